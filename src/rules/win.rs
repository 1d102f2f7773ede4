//! Win condition checking
//!
//! A side wins by owning four consecutive cells in a single row or column.
//! Diagonals do not count.

use crate::board::{Board, Owner, Pos, COLS, ROWS, WIN_LENGTH};

/// Check if `owner` has four in a row or column
pub fn has_four_in_line(board: &Board, owner: Owner) -> bool {
    find_four_positions(board, owner).is_some()
}

/// Find the first winning run for `owner`.
///
/// Row `i` and column `i` are scanned together, index by index, with the run
/// reset on every cell not owned by `owner`. The first run that reaches
/// [`WIN_LENGTH`] is returned, ordered from its first cell to its last.
/// `Unclaimed` never wins.
pub fn find_four_positions(board: &Board, owner: Owner) -> Option<[Pos; WIN_LENGTH]> {
    if owner == Owner::Unclaimed {
        return None;
    }

    debug_assert_eq!(ROWS, COLS);
    for i in 0..ROWS {
        let mut row_run = 0;
        let mut col_run = 0;
        for j in 0..COLS {
            let (line, step) = (i as u8, j as u8);
            row_run = if board.get(Pos::new(line, step)) == owner { row_run + 1 } else { 0 };
            col_run = if board.get(Pos::new(step, line)) == owner { col_run + 1 } else { 0 };

            if row_run >= WIN_LENGTH {
                return Some(std::array::from_fn(|k| {
                    Pos::new(line, (j + 1 - WIN_LENGTH + k) as u8)
                }));
            }
            if col_run >= WIN_LENGTH {
                return Some(std::array::from_fn(|k| {
                    Pos::new((j + 1 - WIN_LENGTH + k) as u8, line)
                }));
            }
        }
    }
    None
}
