//! `shuriken` - run one concurrency demonstration from the command line.
//!
//! # Logging
//!
//! Diagnostics go to stderr through `tracing`. The filter is taken from
//! `RUST_LOG` when set, otherwise `-v` selects `debug` and the default is
//! `warn`. Demo output goes to stdout.

use anyhow::Result;
use clap::Parser;
use shuriken_cli::{commands, Cli};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(command = ?cli.command, "Starting demo");

    commands::run(cli.command).await
}
