//! Rectangular grid bounds.

use crate::Cell;

/// The rectangle `[0, width) x [0, height)` a traversal is confined to.
///
/// Zero-sized bounds are valid and contain no cells, so any seed is
/// rejected against them.
///
/// # Examples
///
/// ```
/// use floodfill::GridBounds;
///
/// let bounds = GridBounds::new(4, 3);
/// assert!(bounds.contains(3, 2));
/// assert!(!bounds.contains(4, 0));
/// assert!(!bounds.contains(-1, 0));
/// assert_eq!(bounds.index(1, 2), Some(9));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridBounds {
    width: u32,
    height: u32,
}

impl GridBounds {
    /// Create bounds for a `width x height` grid.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of columns.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells (`width * height`).
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// `true` if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `(x, y)` lies inside the rectangle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Whether `cell` lies inside the rectangle.
    pub fn contains_cell(&self, cell: Cell) -> bool {
        self.contains(cell.0, cell.1)
    }

    /// Row-major index `y * width + x`, or `None` outside the rectangle.
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Iterate over every addressable cell in row-major order.
    ///
    /// Columns or rows beyond `i32::MAX` have no [`Cell`] representation
    /// and are skipped.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let w = self.width.min(i32::MAX as u32) as i32;
        let h = self.height.min(i32::MAX as u32) as i32;
        (0..h).flat_map(move |y| (0..w).map(move |x| (x, y)))
    }
}
