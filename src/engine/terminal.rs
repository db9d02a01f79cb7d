//! Terminal evaluator: win and loss detection.
//!
//! Both checks are read-only O(N²) scans. A board may be won and lost at
//! the same time; callers decide which state takes precedence.

use crate::core::{Board, MAX_TILE};

/// Does any cell hold `target`?
#[must_use]
pub fn is_won(board: &Board, target: u64) -> bool {
    board.cells().contains(&target)
}

/// Is the board full with no equal horizontal or vertical neighbours?
#[must_use]
pub fn is_game_over(board: &Board) -> bool {
    !board.has_empty_cell() && !has_adjacent_pair(board)
}

/// Are any two orthogonally adjacent cells equal and able to merge?
///
/// Empty cells count too, so callers interested only in merges should
/// check for empties first. A pair of `MAX_TILE`s does not count, since it
/// never merges.
#[must_use]
pub fn has_adjacent_pair(board: &Board) -> bool {
    let n = board.size();
    let cells = board.cells();
    for row in 0..n {
        for col in 0..n {
            let current = cells[row * n + col];
            if current == MAX_TILE {
                continue;
            }
            if col + 1 < n && current == cells[row * n + col + 1] {
                return true;
            }
            if row + 1 < n && current == cells[(row + 1) * n + col] {
                return true;
            }
        }
    }
    false
}

/// Both terminal checks for one board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Terminal {
    /// The target tile is present.
    pub won: bool,
    /// No move can change the board.
    pub over: bool,
}

/// Run both checks.
#[must_use]
pub fn evaluate(board: &Board, target: u64) -> Terminal {
    Terminal {
        won: is_won(board, target),
        over: is_game_over(board),
    }
}
