use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use simple_logger::SimpleLogger;

use hello_triangle::config::{DemoConfig, CONFIG_FILE};

fn main() -> Result<()> {
    let config = DemoConfig::load_or_default(Path::new(CONFIG_FILE))?;

    SimpleLogger::new().with_level(config.log_level).init()?;
    info!("Initializing application...");

    hello_triangle::run(&config).context("Triangle demo failed")?;

    info!("Done");
    Ok(())
}
