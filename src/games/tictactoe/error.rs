//! Errors raised by the board and game model.

use super::types::Player;

/// Error that can occur when creating a board or placing a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Grid size outside the supported range.
    #[display("Grid size {} is not supported; it must be between 3 and 999", _0)]
    InvalidSize(usize),

    /// Linear index outside `1..=max`.
    #[display("Position {} is outside 1..={}", index, max)]
    OutOfRange {
        /// Index that was requested.
        index: usize,
        /// Largest valid index (N²).
        max: usize,
    },

    /// The target square already holds a mark.
    #[display("Cell {} is already occupied by player {}", index, owner)]
    CellOccupied {
        /// Index that was requested.
        index: usize,
        /// Player whose mark is there.
        owner: Player,
    },

    /// The game already has a result.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for BoardError {}
