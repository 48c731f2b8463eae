use std::sync::Arc;

use anyhow::{Context, Result};
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::core::Platform;
use crate::device::{Gpu, GpuInit};

use super::runtime::RuntimeConfig;

/// `Platform` over a live winit event loop.
pub struct WinitPlatform<'a> {
    pub event_loop: &'a ActiveEventLoop,
    pub config: &'a RuntimeConfig,
    pub gpu_init: &'a GpuInit,
}

impl Platform for WinitPlatform<'_> {
    type Window = Arc<Window>;
    type Gpu = Gpu;

    fn create_window(&mut self) -> Result<Arc<Window>> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = self
            .event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        Ok(Arc::new(window))
    }

    fn load_gpu(&mut self, window: &Arc<Window>) -> Result<Gpu> {
        pollster::block_on(Gpu::new(Arc::clone(window), self.gpu_init.clone()))
    }
}
