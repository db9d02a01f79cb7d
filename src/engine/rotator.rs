//! Board rotator: quarter turns that map every direction onto "left".

use crate::core::Board;

/// Rotate the board one quarter turn.
///
/// The output cell at `(row, col)` is the input cell at `(col, N-1-row)`:
/// reverse each row, then transpose. Output row `r` is input column
/// `N-1-r` read top to bottom, so sliding left in the rotated frame is
/// sliding up in the unrotated one. Four turns are the identity.
#[must_use]
pub fn rotate(board: &Board) -> Board {
    let n = board.size();
    let src = board.cells();
    let mut cells = Vec::with_capacity(n * n);
    for row in 0..n {
        for col in 0..n {
            cells.push(src[col * n + (n - 1 - row)]);
        }
    }
    Board::from_cells(n, cells)
}

/// Apply `rotate` `turns` times (taken modulo 4).
#[must_use]
pub fn rotate_times(board: &Board, turns: usize) -> Board {
    let mut out = board.clone();
    for _ in 0..turns % 4 {
        out = rotate(&out);
    }
    out
}
