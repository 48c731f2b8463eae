use anyhow::Result;

use zera_engine::device::GpuInit;
use zera_engine::logging::{init_logging, LoggingConfig};
use zera_engine::scene::SceneConfig;
use zera_engine::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("starting zera sandbox");

    Runtime::run(
        RuntimeConfig::default(),
        GpuInit::default(),
        SceneConfig::default(),
    )
}
