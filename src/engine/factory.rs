//! Board factory: a fresh game board with two seed tiles.

use tracing::debug;

use super::spawner::spawn_tile;
use crate::core::{Board, SpawnSource};

/// Number of tiles placed on a new board.
pub const SEED_TILES: usize = 2;

/// Build an empty `size`×`size` board and spawn the seed tiles into it.
///
/// # Panics
///
/// Panics if `size < 2`. Sizes come from trusted configuration; use
/// `EngineConfig::validate` to check untrusted input first.
#[must_use]
pub fn create_initial_board<R: SpawnSource + ?Sized>(size: usize, rng: &mut R) -> Board {
    assert!(size >= 2, "Board size must be at least 2");

    let mut board = Board::empty(size);
    for _ in 0..SEED_TILES {
        board = spawn_tile(&board, rng);
    }
    debug!(size, tiles = board.tile_count(), "created initial board");
    board
}
