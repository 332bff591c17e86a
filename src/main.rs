//! Strictly Grid - console entry point
//!
//! Runs variable-size tic-tac-toe over stdin/stdout.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::io;
use std::path::Path;
use std::sync::Arc;
use strictly_grid::{GameConfig, Orchestrator, TokenReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_tracing(&config, cli.log_file.as_deref())?;

    info!(grid_size = ?config.grid_size(), "Starting Strictly Grid");

    let input = TokenReader::new(io::stdin().lock());
    let mut console =
        Orchestrator::new(input, io::stdout().lock()).with_preset_size(*config.grid_size());
    console.run()
}

/// Logs go to stderr, or to `log_file`, so they never mix with the grid on stdout.
fn init_tracing(config: &GameConfig, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let init = match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            builder
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init()
        }
        None => builder.with_writer(io::stderr).try_init(),
    };
    init.map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))
}
