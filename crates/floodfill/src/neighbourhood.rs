//! Adjacency rules for the traversal.
//!
//! A [`Neighbourhood`] maps a cell to its candidate neighbours. Candidates
//! are not bounds-checked here and need not be distinct; the engine drops
//! out-of-bounds and already-visited cells itself.

use crate::Cell;
use smallvec::SmallVec;

/// 4-connected offsets, in emission order: W, E, N, S.
pub const OFFSETS_4: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// 8-connected offsets, in emission order: E, SE, NE, W, SW, NW, S, N.
pub const OFFSETS_8: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (1, -1),
    (-1, 0),
    (-1, 1),
    (-1, -1),
    (0, 1),
    (0, -1),
];

/// An adjacency rule over grid cells.
///
/// Implemented by [`Connectivity`] and by every
/// `Fn(i32, i32) -> I` where `I: IntoIterator<Item = Cell>`.
///
/// # Examples
///
/// ```
/// use floodfill::{Cell, Neighbourhood};
///
/// // Knight moves as a custom neighbourhood.
/// let knight = |x: i32, y: i32| -> Vec<Cell> {
///     [(1, 2), (2, 1), (-1, 2), (-2, 1), (1, -2), (2, -1), (-1, -2), (-2, -1)]
///         .iter()
///         .map(|&(dx, dy)| (x + dx, y + dy))
///         .collect()
/// };
/// assert_eq!(knight.neighbours(0, 0).len(), 8);
/// ```
pub trait Neighbourhood {
    /// Candidate neighbours of `(x, y)`, in the order they should be visited.
    ///
    /// The `SmallVec<[Cell; 8]>` avoids heap allocation for 4- and
    /// 8-connectivity; larger custom rules spill to the heap.
    fn neighbours(&self, x: i32, y: i32) -> SmallVec<[Cell; 8]>;
}

impl<F, I> Neighbourhood for F
where
    F: Fn(i32, i32) -> I,
    I: IntoIterator<Item = Cell>,
{
    fn neighbours(&self, x: i32, y: i32) -> SmallVec<[Cell; 8]> {
        self(x, y).into_iter().collect()
    }
}

/// Stock grid connectivities.
///
/// # Examples
///
/// ```
/// use floodfill::{Connectivity, Neighbourhood};
///
/// assert_eq!(Connectivity::default(), Connectivity::Four);
/// assert_eq!(Connectivity::Four.neighbours(0, 0).len(), 4);
/// assert_eq!(Connectivity::Eight.neighbours(0, 0).len(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Orthogonal neighbours only (von Neumann). See [`neighbours4`].
    #[default]
    Four,
    /// Orthogonal and diagonal neighbours (Moore). See [`neighbours8`].
    Eight,
}

impl Connectivity {
    /// Number of candidates emitted per cell.
    pub const fn degree(self) -> usize {
        match self {
            Self::Four => OFFSETS_4.len(),
            Self::Eight => OFFSETS_8.len(),
        }
    }

    /// The offset table in emission order.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::Four => &OFFSETS_4,
            Self::Eight => &OFFSETS_8,
        }
    }
}

impl Neighbourhood for Connectivity {
    fn neighbours(&self, x: i32, y: i32) -> SmallVec<[Cell; 8]> {
        self.offsets()
            .iter()
            .map(|&offset| shift(x, y, offset))
            .collect()
    }
}

/// The four orthogonal neighbours of `(x, y)`.
///
/// ```
/// assert_eq!(
///     floodfill::neighbours4(5, 5),
///     [(4, 5), (6, 5), (5, 4), (5, 6)]
/// );
/// ```
pub fn neighbours4(x: i32, y: i32) -> [Cell; 4] {
    OFFSETS_4.map(|offset| shift(x, y, offset))
}

/// The eight orthogonal and diagonal neighbours of `(x, y)`.
pub fn neighbours8(x: i32, y: i32) -> [Cell; 8] {
    OFFSETS_8.map(|offset| shift(x, y, offset))
}

// Wrapping keeps extreme coordinates from panicking; a wrapped candidate
// lands far outside any grid and is dropped by the bounds check.
fn shift(x: i32, y: i32, (dx, dy): (i32, i32)) -> Cell {
    (x.wrapping_add(dx), y.wrapping_add(dy))
}
