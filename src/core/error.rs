//! Engine error type.
//!
//! The board functions themselves are total. Errors only arise at the
//! edges: building a `Board` from untrusted rows, parsing a direction name,
//! validating configuration, or asking a finished session to keep moving.

use std::fmt;

/// Errors reported by the engine and the session helper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// A board was built from zero rows.
    EmptyBoard,
    /// A row's length does not match the number of rows.
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Expected row length (the number of rows).
        expected: usize,
        /// Actual row length.
        found: usize,
    },
    /// A non-zero cell that is not a power of two in `2..=MAX_TILE`.
    InvalidTile {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The rejected value.
        value: u64,
    },
    /// A direction name that is not one of up/down/left/right.
    InvalidDirection(String),
    /// Board size below the 2x2 minimum.
    InvalidSize(usize),
    /// Win target that is not a power of two in `4..=MAX_TILE`.
    InvalidTarget(u64),
    /// A move was submitted to a session that has already ended.
    GameOver,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::EmptyBoard => write!(f, "board has no rows"),
            EngineError::NotSquare { row, expected, found } => write!(
                f,
                "board is not square: row {row} has {found} cells, expected {expected}"
            ),
            EngineError::InvalidTile { row, col, value } => write!(
                f,
                "invalid tile {value} at ({row}, {col}): tiles must be powers of two from 2 to 2^62"
            ),
            EngineError::InvalidDirection(name) => write!(f, "invalid direction: {name:?}"),
            EngineError::InvalidSize(size) => write!(f, "invalid board size {size}: must be at least 2"),
            EngineError::InvalidTarget(target) => {
                write!(f, "invalid win target {target}: must be a power of two from 4 to 2^62")
            }
            EngineError::GameOver => write!(f, "game is over; restart to keep playing"),
        }
    }
}

impl std::error::Error for EngineError {}
