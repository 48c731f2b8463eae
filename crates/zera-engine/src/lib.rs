//! Zera engine crate.
//!
//! Single-window bootstrap: window + GPU acquisition, one shader program,
//! static geometry, and a clear/draw/present loop that runs until the window
//! is asked to close.

pub mod core;
pub mod device;
pub mod driver;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod shader;
pub mod window;
