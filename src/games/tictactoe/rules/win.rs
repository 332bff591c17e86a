//! Win detection logic for N×N tic-tac-toe.
//!
//! A player wins by owning every square of a row, a column, the main
//! diagonal or the anti-diagonal. Every line is rescanned on each call.

use super::super::{Board, Player, Position, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks whether `player` owns a complete line on the board.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_win(board: &Board, player: Player) -> bool {
    let n = board.size();
    let owns = |row: usize, col: usize| {
        board.get(Position::new(row, col)) == Some(Square::Occupied(player))
    };

    let row_win = (0..n).any(|row| (0..n).all(|col| owns(row, col)));
    let col_win = (0..n).any(|col| (0..n).all(|row| owns(row, col)));
    let diagonal_win = (0..n).all(|i| owns(i, i));
    let anti_diagonal_win = (0..n).all(|i| owns(i, n - 1 - i));

    row_win || col_win || diagonal_win || anti_diagonal_win
}

/// Returns the player owning a complete line, if any.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board) -> Option<Player> {
    Player::iter().find(|player| check_win(board, *player))
}
