//! Command-line interface for strictly_grid.

use clap::Parser;
use std::path::PathBuf;
use strictly_grid::{ConfigError, GameConfig};
use tracing::instrument;

/// Strictly Grid - tic-tac-toe on any N×N grid for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_grid")]
#[command(about = "Variable-size tic-tac-toe for two local players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Grid size for the first game (3 to 999); skips its size prompt
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Builds the effective configuration: file first, then flags.
    #[instrument(skip(self))]
    pub fn load_config(&self) -> Result<GameConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        config.with_grid_size(self.size)
    }
}
