//! `quote` binary entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use quote_cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output can be piped
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Cli::parse().run().await?;
    Ok(())
}
