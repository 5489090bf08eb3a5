//! Reusable grid fixtures.
//!
//! - [`open_grid`] — every cell open.
//! - [`checkerboard`] — open where `x + y` is even; 4-connected components
//!   are single cells, 8-connected ones span the whole board.
//! - [`serpentine`] — a single corridor snaking row by row, the longest
//!   possible path for its area.
//! - [`scatter`] — deterministic pseudo-random open cells.

use crate::MaskGrid;

pub fn open_grid(width: u32, height: u32) -> MaskGrid {
    MaskGrid::from_fn(width, height, |_, _| true)
}

pub fn checkerboard(width: u32, height: u32) -> MaskGrid {
    MaskGrid::from_fn(width, height, |x, y| (x + y) % 2 == 0)
}

/// Odd rows are walls except for one gap, alternating between the right
/// and left ends, so the open cells form one corridor from `(0, 0)`.
pub fn serpentine(width: u32, height: u32) -> MaskGrid {
    let last = width as i32 - 1;
    MaskGrid::from_fn(width, height, move |x, y| {
        if y % 2 == 0 {
            return true;
        }
        let gap = if (y / 2) % 2 == 0 { last } else { 0 };
        x == gap
    })
}

/// Roughly `percent_open`% of cells open, fixed by `seed`.
pub fn scatter(width: u32, height: u32, percent_open: u8, seed: u64) -> MaskGrid {
    MaskGrid::from_fn(width, height, move |x, y| {
        let i = ((y as u64) << 32) | x as u64;
        let h = (i ^ seed)
            .wrapping_mul(6364136223846793007)
            .wrapping_add(1442695040888963407);
        ((h >> 33) % 100) < percent_open as u64
    })
}
