//! N×N tic-tac-toe: board model, rules, turn logic and grid rendering.

mod error;
mod game;
mod position;
mod render;
mod rules;
mod types;

pub use error::BoardError;
pub use game::{Game, GameResult};
pub use position::Position;
pub use render::render_grid;
pub use rules::{check_win, check_winner, is_full};
pub use types::{Board, Player, Square};
