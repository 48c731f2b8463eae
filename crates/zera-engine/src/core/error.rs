/// Fatal startup failure.
///
/// Whatever was acquired before the failing step has already been released
/// when this value is returned.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to create window: {0:#}")]
    Window(anyhow::Error),

    #[error("failed to initialize GPU: {0:#}")]
    Gpu(anyhow::Error),
}
