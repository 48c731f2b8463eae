//! Core engine-facing contracts.
//!
//! Startup sequencing (`bootstrap`), the loop state machine (`Lifecycle`), and
//! the fatal startup error type. None of it touches winit or wgpu directly, so
//! the ordering rules are testable without a display or a GPU.

mod bootstrap;
mod error;
mod lifecycle;

pub use bootstrap::{acquire, Platform};
pub use error::StartupError;
pub use lifecycle::{AppControl, Lifecycle, Phase};
