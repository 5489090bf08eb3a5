//! Per-run fill statistics.

/// Inclusive bounding box of the filled cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent {
    /// Smallest filled x.
    pub min_x: i32,
    /// Smallest filled y.
    pub min_y: i32,
    /// Largest filled x.
    pub max_x: i32,
    /// Largest filled y.
    pub max_y: i32,
}

impl Extent {
    /// The extent of a single cell.
    pub fn of_cell(x: i32, y: i32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    /// Grow to include `(x, y)`.
    pub fn include(&mut self, x: i32, y: i32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Number of columns spanned.
    pub fn width(&self) -> u32 {
        self.max_x.abs_diff(self.min_x) + 1
    }

    /// Number of rows spanned.
    pub fn height(&self) -> u32 {
        self.max_y.abs_diff(self.min_y) + 1
    }

    /// Whether `(x, y)` lies inside the box.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }
}

/// What a fill did.
///
/// For any completed run `filled == 1 + accepted()`: the seed is filled
/// without being tested, and every other filled cell passed the predicate
/// exactly once. A rejected run reports all zeros.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Number of action invocations.
    pub filled: usize,
    /// Number of predicate evaluations.
    pub tested: usize,
    /// Predicate evaluations that returned `false`.
    pub rejected: usize,
    /// Bounding box of the filled cells, `None` if nothing was filled.
    pub extent: Option<Extent>,
}

impl FillReport {
    /// Predicate evaluations that returned `true`.
    pub fn accepted(&self) -> usize {
        self.tested - self.rejected
    }

    /// `true` if no cell was filled.
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    pub(crate) fn record_fill(&mut self, x: i32, y: i32) {
        self.filled += 1;
        match &mut self.extent {
            Some(extent) => extent.include(x, y),
            None => self.extent = Some(Extent::of_cell(x, y)),
        }
    }

    pub(crate) fn record_test(&mut self, accepted: bool) {
        self.tested += 1;
        if !accepted {
            self.rejected += 1;
        }
    }
}
