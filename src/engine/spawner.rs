//! Tile spawner: drop one new tile into a random empty cell.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Pos, SpawnSource};

/// Probability that a spawned tile is a 2 (otherwise it is a 4).
pub const TWO_PROBABILITY: f64 = 0.9;

/// Where a tile was spawned and what it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spawn {
    /// Cell that received the tile.
    pub pos: Pos,
    /// 2 or 4.
    pub value: u64,
}

/// Spawn a tile, reporting where it landed.
///
/// Returns `None` (and consumes no draws) when the board has no empty cell.
/// Otherwise draws once for the cell and once for the value.
pub fn try_spawn<R: SpawnSource + ?Sized>(board: &Board, rng: &mut R) -> Option<(Board, Spawn)> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let index = rng.pick_index(empty.len()).min(empty.len() - 1);
    let pos = empty[index];
    let value = if rng.unit() < TWO_PROBABILITY { 2 } else { 4 };

    Some((board.with_cell(pos, value), Spawn { pos, value }))
}

/// Spawn a tile, returning the board unchanged if it is full.
///
/// Callers that need to tell "spawned" from "full" should check
/// `Board::has_empty_cell` first or use `try_spawn`.
#[must_use]
pub fn spawn_tile<R: SpawnSource + ?Sized>(board: &Board, rng: &mut R) -> Board {
    match try_spawn(board, rng) {
        Some((next, _)) => next,
        None => board.clone(),
    }
}
