//! Dense visited set for a single traversal.

use crate::bounds::GridBounds;

const WORD_BITS: usize = u64::BITS as usize;

/// Bit matrix over the cells of a [`GridBounds`], indexed row-major.
///
/// Marks are never cleared. Cells outside the bounds can never be marked.
#[derive(Clone, Debug)]
pub(crate) struct VisitedSet {
    bounds: GridBounds,
    words: Vec<u64>,
    marked: usize,
}

impl VisitedSet {
    /// All cells unvisited.
    pub(crate) fn new(bounds: GridBounds) -> Self {
        let n_words = bounds.cell_count().div_ceil(WORD_BITS);
        Self {
            bounds,
            words: vec![0; n_words],
            marked: 0,
        }
    }

    /// Mark `(x, y)` as visited.
    ///
    /// Returns `true` only if the cell is in bounds and was not already
    /// marked.
    pub(crate) fn insert(&mut self, x: i32, y: i32) -> bool {
        let Some(i) = self.bounds.index(x, y) else {
            return false;
        };
        let word = &mut self.words[i / WORD_BITS];
        let bit = 1u64 << (i % WORD_BITS);
        if *word & bit != 0 {
            return false;
        }
        *word |= bit;
        self.marked += 1;
        true
    }

    /// Number of marked cells.
    pub(crate) fn len(&self) -> usize {
        self.marked
    }
}
