//! # rust-2048
//!
//! A pure board engine for 2048-style sliding-tile games on square grids
//! of any size.
//!
//! ## Design Principles
//!
//! 1. **Stateless Engine**: Every board function takes an immutable `Board`
//!    snapshot and returns a new one. Nothing is mutated in place.
//!
//! 2. **One Move Primitive**: Only the leftward row slide is implemented.
//!    Up, right, and down are reduced to it by rotating the board.
//!
//! 3. **Injected Randomness**: Spawning draws from a `SpawnSource`, usually a
//!    seeded `GameRng`, so every game can be replayed exactly.
//!
//! ## Modules
//!
//! - `core`: Board, positions, directions, RNG, configuration, errors
//! - `engine`: Factory, spawner, mover, rotator, terminal checks, moves
//! - `session`: Optional stateful wrapper (score, best score, win/loss flow)
//!
//! ## Example
//!
//! ```
//! use rust_2048::{apply_move, create_initial_board, is_game_over, spawn_tile, Direction, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let board = create_initial_board(4, &mut rng);
//!
//! let result = apply_move(&board, Direction::Left);
//! let board = if result.moved { spawn_tile(&result.board, &mut rng) } else { board };
//! assert!(!is_game_over(&board));
//! ```

pub mod core;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Pos, Direction,
    GameRng, GameRngState, SpawnSource,
    EngineConfig, EngineError, DEFAULT_TARGET, MAX_TILE,
};

pub use crate::engine::{
    create_initial_board, spawn_tile, try_spawn, Spawn,
    apply_move, can_move, legal_moves, MoveResult,
    is_won, is_game_over, evaluate, Terminal,
};

pub use crate::session::{GameStatus, Session, SessionBuilder, TurnReport};
