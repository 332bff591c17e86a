//! Strictly Grid library - variable-size tic-tac-toe for the terminal
//!
//! Two players share one console and take turns claiming numbered cells of
//! an N×N grid. The first to fill a whole row, column or diagonal wins.
//!
//! # Architecture
//!
//! - **Games**: board model, win/tie rules and grid rendering
//! - **Console**: token input and the prompt-driven game loop
//! - **Config**: optional TOML settings for the binary
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//! use strictly_grid::{Orchestrator, TokenReader};
//!
//! # fn example() -> anyhow::Result<()> {
//! let input = TokenReader::new(io::stdin().lock());
//! let mut console = Orchestrator::new(input, io::stdout().lock());
//! console.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console
pub use console::{InputSource, Orchestrator, ReadOutcome, TokenReader};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardError, Game, GameResult, Player, Position, Square, check_win, check_winner,
    is_full, render_grid,
};
