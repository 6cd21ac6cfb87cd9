use anyhow::Result;
use tracing::info;

use matto_uci::UciEngine;

fn main() -> Result<()> {
    // Log to stderr — stdout belongs to the UCI protocol.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    info!("matto starting");

    UciEngine::new().run()?;
    Ok(())
}
