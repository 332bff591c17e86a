//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from board
//! storage so the board only has to know how to hold marks.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_win, check_winner};
