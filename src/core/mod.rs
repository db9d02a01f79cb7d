//! Core value types: board, positions, directions, RNG, configuration, errors.
//!
//! Everything here is plain data. The board transformations that operate on
//! these types live in `engine`.

pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod rng;

pub use board::{is_valid_cell, Board, Pos, MAX_TILE};
pub use config::{EngineConfig, DEFAULT_SIZE, DEFAULT_TARGET};
pub use direction::Direction;
pub use error::EngineError;
pub use rng::{GameRng, GameRngState, SpawnSource};
