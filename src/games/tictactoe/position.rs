//! Cell positions on an N×N board.

use tracing::instrument;

/// A cell on the board as a 0-based `(row, col)` pair.
///
/// Players address cells by a 1-based linear index read row by row, so on a
/// 3×3 board index 1 is the top-left corner and index 9 the bottom-right.
/// [`Position::from_index`] and [`Position::to_index`] convert between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a 0-based row and column.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// 0-based row.
    pub fn row(self) -> usize {
        self.row
    }

    /// 0-based column.
    pub fn col(self) -> usize {
        self.col
    }

    /// Maps a 1-based linear index onto a `size`×`size` grid.
    ///
    /// Returns `None` if `index` is outside `1..=size²`.
    #[instrument]
    pub fn from_index(index: usize, size: usize) -> Option<Self> {
        if index == 0 || index > size.checked_mul(size)? {
            return None;
        }
        let offset = index - 1;
        Some(Self {
            row: offset / size,
            col: offset % size,
        })
    }

    /// Converts back to the 1-based linear index on a `size`×`size` grid.
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col + 1
    }
}
