//! Engine configuration.
//!
//! The engine itself is parameterised only by board size and win target.
//! Callers build an `EngineConfig`, validate it once, and then pass the
//! pieces to the board functions or hand the whole thing to a `Session`.

use serde::{Deserialize, Serialize};

use super::board::MAX_TILE;
use super::error::EngineError;

/// Tile value that wins the classic game.
pub const DEFAULT_TARGET: u64 = 2048;

/// Side length of the classic board.
pub const DEFAULT_SIZE: usize = 4;

/// Board size and win target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side length N of the square board.
    pub size: usize,

    /// Tile value that counts as a win.
    pub target: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            target: DEFAULT_TARGET,
        }
    }
}

impl EngineConfig {
    /// Board sizes a front end typically offers. The engine itself has no
    /// upper bound.
    pub const STANDARD_SIZES: [usize; 4] = [3, 4, 5, 6];

    /// Create the default configuration (4×4, target 2048).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the win target.
    #[must_use]
    pub fn with_target(mut self, target: u64) -> Self {
        self.target = target;
        self
    }

    /// Check that the size and target are usable.
    ///
    /// # Errors
    ///
    /// - `EngineError::InvalidSize` if `size < 2`
    /// - `EngineError::InvalidTarget` if `target` is not a power of two in
    ///   `4..=MAX_TILE`
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.size < 2 {
            return Err(EngineError::InvalidSize(self.size));
        }
        if self.target < 4 || self.target > MAX_TILE || !self.target.is_power_of_two() {
            return Err(EngineError::InvalidTarget(self.target));
        }
        Ok(())
    }
}
