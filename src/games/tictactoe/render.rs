//! Text rendering of the numbered grid.

use super::{Board, Position, Square};
use tracing::instrument;

/// Separator placed between cells on the same row.
const CELL_SEPARATOR: &str = " | ";

/// Joint placed between dash segments on a separator row.
const ROW_JOINT: &str = "-+-";

/// Renders the board as a numbered text grid.
///
/// Every cell is right-aligned to the width of the largest index. Empty cells
/// show their 1-based index and occupied cells show the owner's mark. Each row,
/// separator rows included, ends with a newline.
///
/// ```text
///  1 |  2 |  3 |  4
/// ---+----+----+---
///  5 |  0 |  7 |  8
/// ```
#[instrument(skip(board), fields(size = board.size()))]
pub fn render_grid(board: &Board) -> String {
    let size = board.size();
    let width = board.digit_width();
    let separator = vec!["-".repeat(width); size].join(ROW_JOINT);

    let mut out = String::new();
    for row in 0..size {
        let cells: Vec<String> = (0..size)
            .map(|col| {
                let pos = Position::new(row, col);
                let label = match board.get(pos) {
                    Some(Square::Occupied(player)) => player.mark().to_string(),
                    _ => pos.to_index(size).to_string(),
                };
                format!("{label:>width$}")
            })
            .collect();

        out.push_str(&cells.join(CELL_SEPARATOR));
        out.push('\n');
        if row + 1 < size {
            out.push_str(&separator);
            out.push('\n');
        }
    }
    out
}
