//! wlps CLI
//!
//! Command-line interface for browsing the catalog

use clap::Parser;
use wlps_client::cli::{log_filter, Cli, Runner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let runner = Runner::new(cli);
    let config = runner.config()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(
            config.log_level,
            std::env::var("RUST_LOG").ok().as_deref(),
        ))
        .init();

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    Ok(())
}
