//! Core domain types for N×N tic-tac-toe.

use super::error::BoardError;
use super::position::Position;
use super::rules;
use tracing::{debug, instrument};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Player {
    /// Player 1 (goes first, marks with `0`).
    #[strum(to_string = "1")]
    One,
    /// Player 2 (goes second, marks with `X`).
    #[strum(to_string = "2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the symbol drawn on the grid for this player.
    pub fn mark(self) -> char {
        match self {
            Player::One => '0',
            Player::Two => 'X',
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// N×N tic-tac-toe board.
///
/// Squares are stored in row-major order. Once a square is occupied it is
/// never cleared; a new game needs a new board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Smallest grid size that makes a playable game.
    pub const MIN_SIZE: usize = 3;

    /// Largest grid size; cell numbers stay within six digits.
    pub const MAX_SIZE: usize = 999;

    /// Checks whether `size` is within `MIN_SIZE..=MAX_SIZE`.
    pub fn is_valid_size(size: usize) -> bool {
        (Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size)
    }

    /// Creates an empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is outside
    /// [`Board::MIN_SIZE`]`..=`[`Board::MAX_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !Self::is_valid_size(size) {
            return Err(BoardError::InvalidSize(size));
        }

        Ok(Self {
            size,
            squares: vec![Square::Empty; size * size],
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of squares, which is also the largest linear index.
    pub fn cell_count(&self) -> usize {
        self.squares.len()
    }

    /// Width in characters of the largest linear index.
    pub fn digit_width(&self) -> usize {
        self.cell_count().to_string().len()
    }

    /// Gets the square at the given position, or `None` off the grid.
    pub fn get(&self, pos: Position) -> Option<Square> {
        if pos.row() >= self.size || pos.col() >= self.size {
            return None;
        }
        self.squares.get(pos.to_index(self.size) - 1).copied()
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Places `player`'s mark at the 1-based linear `index`.
    ///
    /// A failed placement leaves the board untouched.
    ///
    /// # Errors
    ///
    /// - [`BoardError::OutOfRange`] if `index` is outside `1..=N²`
    /// - [`BoardError::CellOccupied`] if the square already holds a mark
    #[instrument(skip(self), fields(size = self.size))]
    pub fn place(&mut self, index: usize, player: Player) -> Result<Position, BoardError> {
        let max = self.cell_count();
        let pos = Position::from_index(index, self.size)
            .ok_or(BoardError::OutOfRange { index, max })?;

        let square = &mut self.squares[index - 1];
        if let Square::Occupied(owner) = *square {
            return Err(BoardError::CellOccupied { index, owner });
        }
        *square = Square::Occupied(player);

        debug!(row = pos.row(), col = pos.col(), "Mark placed");
        Ok(pos)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks whether `player` owns a complete row, column or diagonal.
    pub fn check_win(&self, player: Player) -> bool {
        rules::check_win(self, player)
    }

    /// Returns the player who owns a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&super::render::render_grid(self))
    }
}
