//! Optional settings for the console game.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::games::tictactoe::Board;

/// Settings loaded from a TOML file and the command line.
///
/// ```toml
/// grid_size = 4
/// log_filter = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Grid size for the first game; its size prompt is skipped when set.
    /// Replays always ask for a fresh size.
    grid_size: Option<usize>,

    /// `tracing` filter directives used when `RUST_LOG` is unset.
    log_filter: String,
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: None,
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(grid_size = ?config.grid_size, "Config loaded successfully");
        Ok(config)
    }

    /// Overrides the grid size when `size` is given, then validates.
    #[instrument(skip(self))]
    pub fn with_grid_size(mut self, size: Option<usize>) -> Result<Self, ConfigError> {
        if size.is_some() {
            self.grid_size = size;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks that a preset grid size can make a board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.grid_size {
            Some(size) if !Board::is_valid_size(size) => Err(ConfigError::new(format!(
                "Invalid grid_size {}: must be between {} and {}",
                size,
                Board::MIN_SIZE,
                Board::MAX_SIZE
            ))),
            _ => Ok(()),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
