//! Shader stages: embedded sources, compilation, and program linking checks.
//!
//! Compilation runs the WGSL front end and validator ahead of the GPU driver so
//! compile and link status are known (and logged) before any pipeline exists.
//! Failures are reported as `ShaderError` values carrying a bounded `InfoLog`.

mod compile;
mod error;
mod info_log;
mod source;

pub use compile::{compile, link, CompiledShader};
pub use error::ShaderError;
pub use info_log::{InfoLog, INFO_LOG_CAPACITY};
pub use source::{ShaderSource, ShaderStage, POSITION_VERTEX, SOLID_FRAGMENT};
