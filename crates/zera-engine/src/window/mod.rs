//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single window, and wires them to the GPU
//! layer and the scene.

mod platform;
mod runtime;

pub use platform::WinitPlatform;
pub use runtime::{Runtime, RuntimeConfig};
