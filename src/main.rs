//! Bombgrid - Entry Point
//!
//! Generates an arena from the configured dimensions and prints it.

use anyhow::Result;

use bombgrid::config::{Config, OutputFormat};
use bombgrid::create_map;

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .init();

    log::info!("Starting Bombgrid v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load();
    config.validate()?;

    let grid = create_map(config.map.width, config.map.height);
    log::info!("Generated {}x{} arena", grid.width(), grid.height());

    match config.output {
        OutputFormat::Text => print!("{}", grid),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&grid)?),
    }

    Ok(())
}
