//! Move orchestrator: apply a directional move to a whole board.
//!
//! Rotate into the canonical (leftward) frame, slide every row, rotate
//! back. The result carries the merge score and whether anything changed.
//! Spawning is left to the caller, who must skip it when `moved` is false.

use tracing::{instrument, trace};

use super::mover::slide_row_left;
use super::rotator::rotate_times;
use crate::core::{Board, Direction, MAX_TILE};

/// Outcome of one move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    /// The board after sliding and merging (no spawn yet).
    pub board: Board,
    /// Total value of all tiles created by merges, saturating at `u64::MAX`.
    pub score_delta: u64,
    /// Did any cell change?
    pub moved: bool,
}

/// Slide the board in `direction`.
///
/// When `moved` is false the returned board equals the input and
/// `score_delta` is 0.
#[instrument(level = "trace", skip(board), fields(size = board.size()))]
#[must_use]
pub fn apply_move(board: &Board, direction: Direction) -> MoveResult {
    let rotated = rotate_times(board, direction.rotations());
    let n = rotated.size();

    let mut cells = Vec::with_capacity(n * n);
    let mut score_delta: u64 = 0;
    let mut moved = false;
    for row in rotated.rows() {
        let slid = slide_row_left(row);
        score_delta = score_delta.saturating_add(slid.score);
        moved |= slid.moved;
        cells.extend_from_slice(&slid.cells);
    }

    let board = rotate_times(&Board::from_cells(n, cells), direction.reverse_rotations());
    trace!(score_delta, moved, "move applied");

    MoveResult {
        board,
        score_delta,
        moved,
    }
}

/// Would a move in `direction` change the board?
#[must_use]
pub fn can_move(board: &Board, direction: Direction) -> bool {
    apply_move(board, direction).moved
}

/// Directions that change the board, in `Direction::ALL` order.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| can_move(board, dir))
        .collect()
}
