//! The board: an immutable N×N grid of tile values.
//!
//! Cells are stored row-major. `0` is an empty cell; every other value is a
//! power of two between 2 and `MAX_TILE`. The only public way to obtain a
//! `Board` is through a validated constructor, so every function that takes
//! `&Board` may assume the grid is square, non-empty, and holds legal tiles.
//!
//! ## Example
//!
//! ```
//! use rust_2048::core::{Board, Pos};
//!
//! let board = Board::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
//! assert_eq!(board.size(), 2);
//! assert_eq!(board.get(Pos::new(1, 1)), Some(4));
//! assert_eq!(board.empty_cells().len(), 2);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// A cell coordinate. Rows grow downward, columns grow rightward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Pos {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Largest legal tile, 2^62. Tiles of this value never merge, so no
/// merge can overflow `u64`.
pub const MAX_TILE: u64 = 1 << 62;

/// Is `value` a legal cell value (empty, or a power of two in `2..=MAX_TILE`)?
#[must_use]
pub fn is_valid_cell(value: u64) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

/// Square grid of tile values.
///
/// Serialises as a list of rows and is re-validated on deserialisation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u64>>", into = "Vec<Vec<u64>>")]
pub struct Board {
    size: usize,
    cells: Vec<u64>,
}

impl Board {
    /// Create an all-empty board of the given side length.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        assert!(size > 0, "Board size must be at least 1");
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build a board from rows, checking shape and tile values.
    ///
    /// # Errors
    ///
    /// - `EngineError::EmptyBoard` if `rows` is empty
    /// - `EngineError::NotSquare` if any row length differs from the row count
    /// - `EngineError::InvalidTile` if a non-zero cell is not a power of two
    ///   in `2..=MAX_TILE`
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self, EngineError> {
        let size = rows.len();
        if size == 0 {
            return Err(EngineError::EmptyBoard);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(EngineError::NotSquare {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_cell(value) {
                    return Err(EngineError::InvalidTile { row, col, value });
                }
            }
            cells.extend(values);
        }

        Ok(Self { size, cells })
    }

    /// Build a board from already-validated row-major cells.
    pub(crate) fn from_cells(size: usize, cells: Vec<u64>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        debug_assert!(cells.iter().all(|&v| is_valid_cell(v)));
        Self { size, cells }
    }

    /// Side length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[u64] {
        &self.cells
    }

    /// Value at `pos`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, pos: Pos) -> Option<u64> {
        if pos.row < self.size && pos.col < self.size {
            Some(self.cells[self.index(pos)])
        } else {
            None
        }
    }

    /// One row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= size`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[u64] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u64]> + '_ {
        self.cells.chunks_exact(self.size)
    }

    /// Copy out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.rows().map(<[u64]>::to_vec).collect()
    }

    /// Positions of every empty cell, in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| Pos::new(i / self.size, i % self.size))
            .collect()
    }

    /// Is there at least one empty cell?
    #[must_use]
    pub fn has_empty_cell(&self) -> bool {
        self.cells.contains(&0)
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Largest tile on the board (0 for an empty board).
    #[must_use]
    pub fn max_tile(&self) -> u64 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of every tile, saturating at `u64::MAX`.
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().fold(0, |acc, &v| acc.saturating_add(v))
    }

    /// Return a copy with one cell replaced. The value must already be legal.
    pub(crate) fn with_cell(&self, pos: Pos, value: u64) -> Self {
        debug_assert!(is_valid_cell(value));
        let mut cells = self.cells.clone();
        cells[self.index(pos)] = value;
        Self::from_cells(self.size, cells)
    }

    fn index(&self, pos: Pos) -> usize {
        pos.row * self.size + pos.col
    }
}

impl TryFrom<Vec<Vec<u64>>> for Board {
    type Error = EngineError;

    fn try_from(rows: Vec<Vec<u64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<u64>> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().to_string().len().max(1);
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if value == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{value:>width$}")?;
                }
            }
        }
        Ok(())
    }
}
