//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue (the GPU "loader")
//! - creating & configuring the Surface (swapchain)
//! - acquiring and presenting frames
//! - implementing `driver::Driver` on top of wgpu

mod driver;
mod frame;
mod gpu;
mod init;
mod surface;

pub use driver::{WgpuDriver, WgpuShader};
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
