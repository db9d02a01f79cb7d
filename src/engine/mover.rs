//! Linear mover: slide and merge a single row toward index 0.
//!
//! This is the only move primitive. Every other direction is reduced to it
//! by rotating the board first (see `rotator`).

use smallvec::SmallVec;

use crate::core::MAX_TILE;

/// Inline buffer sized for the common board sizes; larger rows spill to the heap.
pub type RowCells = SmallVec<[u64; 8]>;

/// Outcome of sliding one row left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowMove {
    /// The row after compaction, merging, and zero padding.
    pub cells: RowCells,
    /// Sum of the values of every tile created by a merge.
    pub score: u64,
    /// Does `cells` differ from the input at any position?
    pub moved: bool,
}

/// Slide `row` left, merging equal neighbours once each.
///
/// Zeros are dropped first, then adjacent equal tiles are merged in a single
/// left-to-right pass. A tile produced by a merge is never merged again in
/// the same call, so `[2, 2, 4]` becomes `[4, 4, 0]`, not `[8, 0, 0]`.
/// A pair of `MAX_TILE`s stays unmerged.
///
/// ```
/// use rust_2048::engine::mover::slide_row_left;
///
/// let m = slide_row_left(&[2, 2, 2, 2]);
/// assert_eq!(m.cells.as_slice(), &[4, 4, 0, 0]);
/// assert_eq!(m.score, 8);
/// assert!(m.moved);
/// ```
#[must_use]
pub fn slide_row_left(row: &[u64]) -> RowMove {
    let tiles: RowCells = row.iter().copied().filter(|&v| v != 0).collect();

    let mut cells = RowCells::with_capacity(row.len());
    let mut score: u64 = 0;
    let mut j = 0;
    while j < tiles.len() {
        if j + 1 < tiles.len() && tiles[j] == tiles[j + 1] && tiles[j] < MAX_TILE {
            let merged = tiles[j] * 2;
            cells.push(merged);
            score = score.saturating_add(merged);
            // Skip the consumed pair.
            j += 2;
        } else {
            cells.push(tiles[j]);
            j += 1;
        }
    }
    cells.resize(row.len(), 0);

    let moved = cells.as_slice() != row;
    RowMove { cells, score, moved }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(row: &[u64]) -> (Vec<u64>, u64, bool) {
        let m = slide_row_left(row);
        (m.cells.to_vec(), m.score, m.moved)
    }

    #[test]
    fn test_four_equal_tiles_merge_pairwise() {
        assert_eq!(slide(&[2, 2, 2, 2]), (vec![4, 4, 0, 0], 8, true));
    }

    #[test]
    fn test_fresh_tile_does_not_remerge() {
        assert_eq!(slide(&[2, 0, 2, 4]), (vec![4, 4, 0, 0], 4, true));
        assert_eq!(slide(&[4, 4, 8, 0]), (vec![8, 8, 0, 0], 8, true));
    }

    #[test]
    fn test_compaction_only() {
        assert_eq!(slide(&[0, 0, 0, 2]), (vec![2, 0, 0, 0], 0, true));
        assert_eq!(slide(&[0, 2, 0, 4]), (vec![2, 4, 0, 0], 0, true));
    }

    #[test]
    fn test_odd_run_merges_leftmost_pair() {
        assert_eq!(slide(&[2, 2, 2, 0]), (vec![4, 2, 0, 0], 4, true));
        assert_eq!(slide(&[0, 8, 8, 8]), (vec![16, 8, 0, 0], 16, true));
    }

    #[test]
    fn test_settled_rows_do_not_move() {
        assert_eq!(slide(&[2, 4, 8, 16]), (vec![2, 4, 8, 16], 0, false));
        assert_eq!(slide(&[2, 4, 0, 0]), (vec![2, 4, 0, 0], 0, false));
        assert_eq!(slide(&[0, 0, 0, 0]), (vec![0, 0, 0, 0], 0, false));
    }

    #[test]
    fn test_gap_between_equal_tiles_still_merges() {
        assert_eq!(slide(&[4, 0, 0, 4]), (vec![8, 0, 0, 0], 8, true));
    }

    #[test]
    fn test_other_lengths() {
        assert_eq!(slide(&[2, 2]), (vec![4, 0], 4, true));
        assert_eq!(slide(&[0, 2, 2]), (vec![4, 0, 0], 4, true));
        assert_eq!(
            slide(&[2, 2, 4, 4, 8, 8, 0, 0, 16, 16]),
            (vec![4, 8, 16, 32, 0, 0, 0, 0, 0, 0], 60, true)
        );
    }

    #[test]
    fn test_merge_up_to_ceiling() {
        let half = MAX_TILE / 2;
        assert_eq!(slide(&[half, half]), (vec![MAX_TILE, 0], MAX_TILE, true));
    }

    #[test]
    fn test_ceiling_tiles_do_not_merge() {
        assert_eq!(slide(&[MAX_TILE, MAX_TILE]), (vec![MAX_TILE, MAX_TILE], 0, false));
        assert_eq!(
            slide(&[0, MAX_TILE, 0, MAX_TILE]),
            (vec![MAX_TILE, MAX_TILE, 0, 0], 0, true)
        );
    }

    #[test]
    fn test_second_slide_is_inert() {
        let first = slide_row_left(&[2, 2, 4, 4, 0, 2]);
        let second = slide_row_left(&first.cells);
        assert_eq!(second.cells, first.cells);
        assert_eq!(second.score, 0);
        assert!(!second.moved);
    }
}
