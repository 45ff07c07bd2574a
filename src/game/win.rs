//! Win and draw detection over a grid snapshot.
//!
//! Each scan slides a window of [`WIN_LENGTH`] cells along one axis and
//! reports whether every cell in some window holds the given value. The
//! scans share nothing and stop at the first match.

use super::board::{CellValue, Matrix, COLS, ROWS};

pub const WIN_LENGTH: usize = 4;

/// Check whether the `WIN_LENGTH` cells starting at (col, row) and stepping
/// by (dc, dr) all hold `value`. Cells off the grid never match.
fn line_matches(
    matrix: &Matrix,
    value: CellValue,
    col: usize,
    row: usize,
    dc: isize,
    dr: isize,
) -> bool {
    (0..WIN_LENGTH as isize).all(|k| {
        let c = col as isize + dc * k;
        let r = row as isize + dr * k;
        c >= 0
            && r >= 0
            && (c as usize) < COLS
            && (r as usize) < ROWS
            && matrix[c as usize][r as usize] == Some(value)
    })
}

/// Four stacked in one column
pub fn has_won_vertically(matrix: &Matrix, value: CellValue) -> bool {
    (0..COLS).any(|col| {
        (0..=ROWS - WIN_LENGTH).any(|row| line_matches(matrix, value, col, row, 0, 1))
    })
}

/// Four side by side in one row
pub fn has_won_horizontally(matrix: &Matrix, value: CellValue) -> bool {
    (0..ROWS).any(|row| {
        (0..=COLS - WIN_LENGTH).any(|col| line_matches(matrix, value, col, row, 1, 0))
    })
}

/// Four on a bottom-left to top-right diagonal (/)
pub fn has_won_ascending(matrix: &Matrix, value: CellValue) -> bool {
    (0..=COLS - WIN_LENGTH).any(|col| {
        (0..=ROWS - WIN_LENGTH).any(|row| line_matches(matrix, value, col, row, 1, 1))
    })
}

/// Four on a bottom-right to top-left diagonal (\)
pub fn has_won_descending(matrix: &Matrix, value: CellValue) -> bool {
    (WIN_LENGTH - 1..COLS).any(|col| {
        (0..=ROWS - WIN_LENGTH).any(|row| line_matches(matrix, value, col, row, -1, 1))
    })
}

pub fn has_won(matrix: &Matrix, value: CellValue) -> bool {
    has_won_horizontally(matrix, value)
        || has_won_vertically(matrix, value)
        || has_won_ascending(matrix, value)
        || has_won_descending(matrix, value)
}

/// Every cell is occupied. Callers check for a winner first.
pub fn is_draw(matrix: &Matrix) -> bool {
    matrix.iter().all(|column| column.iter().all(Option::is_some))
}
