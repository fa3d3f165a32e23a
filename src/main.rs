use anyhow::Context;
use tracing::{info, Level};

use cvgen::Config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = Config::default();
    info!("Reading CV data from {}", config.data_dir.display());

    let path = cvgen::generate(&config).context("CV generation failed")?;
    println!("{}", path.display());

    Ok(())
}
