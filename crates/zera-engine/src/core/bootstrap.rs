use super::error::StartupError;

/// Windowing + GPU-loading collaborator.
///
/// The runtime implements this over winit and wgpu; the ordering rules in
/// `acquire` are independent of either.
pub trait Platform {
    type Window;
    type Gpu;

    fn create_window(&mut self) -> anyhow::Result<Self::Window>;

    /// Loads the GPU for `window`. Only called once a window exists.
    fn load_gpu(&mut self, window: &Self::Window) -> anyhow::Result<Self::Gpu>;
}

/// Creates the window, then loads the GPU for it.
///
/// Fails fast: a window failure returns before the GPU loader is touched, and a
/// GPU failure releases the window before returning.
pub fn acquire<P: Platform>(platform: &mut P) -> Result<(P::Window, P::Gpu), StartupError> {
    let window = match platform.create_window() {
        Ok(window) => window,
        Err(e) => {
            log::error!("window creation failed: {e:#}");
            return Err(StartupError::Window(e));
        }
    };
    log::info!("window created");

    let gpu = match platform.load_gpu(&window) {
        Ok(gpu) => gpu,
        Err(e) => {
            log::error!("GPU initialization failed: {e:#}");
            drop(window);
            log::debug!("window released");
            return Err(StartupError::Gpu(e));
        }
    };
    log::info!("GPU initialized");

    Ok((window, gpu))
}
