//! Test utilities for floodfill development.
//!
//! - [`MaskGrid`]: boolean grid built from ASCII art or a generator.
//! - [`CallLog`]: wraps predicates and actions to count per-cell calls.
//! - [`reference_component`]: fixed-point connected-component computation
//!   with no frontier queue, for cross-checking the engine.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use floodfill::{Cell, GridBounds, Neighbourhood};
use indexmap::{IndexMap, IndexSet};
use std::cell::RefCell;
use std::collections::BTreeSet;

/// A dense grid of open (`true`) and blocked (`false`) cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskGrid {
    bounds: GridBounds,
    open: Vec<bool>,
}

impl MaskGrid {
    /// Parse rows of `.` (open) and `#` (blocked). Surrounding whitespace on
    /// each line is ignored; blank lines are skipped.
    ///
    /// # Panics
    ///
    /// On ragged rows or characters other than `.` and `#`.
    pub fn parse(art: &str) -> Self {
        let rows: Vec<&str> = art
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let width = rows.first().map_or(0, |r| r.len());
        let mut open = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "row {y} has length {}", row.len());
            for ch in row.chars() {
                match ch {
                    '.' => open.push(true),
                    '#' => open.push(false),
                    other => panic!("unexpected character {other:?} in row {y}"),
                }
            }
        }
        Self {
            bounds: GridBounds::new(width as u32, rows.len() as u32),
            open,
        }
    }

    /// Build a grid by evaluating `is_open` on every cell.
    pub fn from_fn(width: u32, height: u32, mut is_open: impl FnMut(i32, i32) -> bool) -> Self {
        let bounds = GridBounds::new(width, height);
        let open = bounds.cells().map(|(x, y)| is_open(x, y)).collect();
        Self { bounds, open }
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// `false` for blocked cells and for anything outside the grid.
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        self.bounds.index(x, y).is_some_and(|i| self.open[i])
    }

    /// A predicate view of the grid, suitable as `to_fill`.
    pub fn predicate(&self) -> impl Fn(i32, i32) -> bool + '_ {
        move |x, y| self.is_open(x, y)
    }

    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|&&o| o).count()
    }
}

/// Records every predicate and action call, keyed by cell.
///
/// Interior mutability lets the predicate and action wrappers share one
/// log while both are alive inside a fill.
#[derive(Debug, Default)]
pub struct CallLog {
    tests: RefCell<IndexMap<Cell, usize>>,
    fills: RefCell<IndexMap<Cell, usize>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `inner` so each call is recorded before delegating.
    pub fn predicate<'a>(
        &'a self,
        mut inner: impl FnMut(i32, i32) -> bool + 'a,
    ) -> impl FnMut(i32, i32) -> bool + 'a {
        move |x, y| {
            *self.tests.borrow_mut().entry((x, y)).or_default() += 1;
            inner(x, y)
        }
    }

    /// An action that only records.
    pub fn action(&self) -> impl FnMut(i32, i32) + '_ {
        move |x, y| {
            *self.fills.borrow_mut().entry((x, y)).or_default() += 1;
        }
    }

    /// Filled cells in first-fill order.
    pub fn filled(&self) -> Vec<Cell> {
        self.fills.borrow().keys().copied().collect()
    }

    pub fn filled_set(&self) -> BTreeSet<Cell> {
        self.fills.borrow().keys().copied().collect()
    }

    /// Tested cells in first-test order.
    pub fn tested(&self) -> Vec<Cell> {
        self.tests.borrow().keys().copied().collect()
    }

    pub fn fill_count(&self, cell: Cell) -> usize {
        self.fills.borrow().get(&cell).copied().unwrap_or(0)
    }

    pub fn test_count(&self, cell: Cell) -> usize {
        self.tests.borrow().get(&cell).copied().unwrap_or(0)
    }

    /// Total action invocations across all cells.
    pub fn total_fills(&self) -> usize {
        self.fills.borrow().values().sum()
    }

    /// Total predicate invocations across all cells.
    pub fn total_tests(&self) -> usize {
        self.tests.borrow().values().sum()
    }

    pub fn max_fill_count(&self) -> usize {
        self.fills.borrow().values().copied().max().unwrap_or(0)
    }

    pub fn max_test_count(&self) -> usize {
        self.tests.borrow().values().copied().max().unwrap_or(0)
    }
}

/// The cells reachable from `seed` through in-bounds cells satisfying
/// `is_open`, seed included unconditionally.
///
/// Computed by repeated expansion to a fixed point rather than a queue, so
/// it shares no traversal logic with the engine. Quadratic; test-sized
/// grids only. Empty if the seed is out of bounds.
pub fn reference_component(
    bounds: GridBounds,
    seed: Cell,
    is_open: impl Fn(i32, i32) -> bool,
    neighbourhood: &impl Neighbourhood,
) -> BTreeSet<Cell> {
    if !bounds.contains_cell(seed) {
        return BTreeSet::new();
    }
    let mut component: IndexSet<Cell> = IndexSet::new();
    component.insert(seed);
    loop {
        let before = component.len();
        let snapshot: Vec<Cell> = component.iter().copied().collect();
        for (x, y) in snapshot {
            for (nx, ny) in neighbourhood.neighbours(x, y) {
                if bounds.contains(nx, ny) && is_open(nx, ny) {
                    component.insert((nx, ny));
                }
            }
        }
        if component.len() == before {
            break;
        }
    }
    component.into_iter().collect()
}
