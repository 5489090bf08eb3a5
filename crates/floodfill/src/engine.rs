//! The flood traversal engine.
//!
//! All entry points funnel into one breadth-first traversal:
//!
//! 1. The seed is marked visited and queued without consulting the
//!    predicate.
//! 2. Cells are popped in FIFO order and the action runs on each.
//! 3. Every in-bounds, unvisited candidate from the neighbourhood is marked
//!    visited *before* the predicate runs, and queued only if it passes.
//!
//! Step 3 is what bounds both the predicate and the action to one call
//! per cell, no matter how many paths reach it.

use crate::bounds::GridBounds;
use crate::config::FillConfig;
use crate::error::FillError;
use crate::neighbourhood::{Connectivity, Neighbourhood};
use crate::report::FillReport;
use crate::visited::VisitedSet;
use crate::Cell;
use std::collections::VecDeque;

const DEFAULT_NEIGHBOURHOOD: Connectivity = Connectivity::Four;

/// Flood fill with optional callbacks.
///
/// Fills from `(seed_x, seed_y)` within `[0, width) x [0, height)`. When
/// `neighbours` is `None`, 4-connectivity is used.
///
/// A missing predicate, a missing action, or an out-of-bounds seed makes
/// this a silent no-op: nothing is invoked and an empty report is returned.
/// Use [`FloodFill`] to get the reason as a [`FillError`].
///
/// # Examples
///
/// ```
/// use floodfill::{fill, Connectivity};
///
/// let mut count = 0;
/// fill(1, 1, 3, 3, Some(&mut |_, _| true), Some(&mut |_, _| count += 1), Some(&Connectivity::Eight));
/// assert_eq!(count, 9);
///
/// // No predicate: nothing happens.
/// let report = fill(1, 1, 3, 3, None, Some(&mut |_, _| unreachable!()), None);
/// assert!(report.is_empty());
/// ```
pub fn fill(
    seed_x: i32,
    seed_y: i32,
    width: u32,
    height: u32,
    to_fill: Option<&mut dyn FnMut(i32, i32) -> bool>,
    fill: Option<&mut dyn FnMut(i32, i32)>,
    neighbours: Option<&dyn Neighbourhood>,
) -> FillReport {
    let default: &dyn Neighbourhood = &DEFAULT_NEIGHBOURHOOD;
    checked_traverse(
        (seed_x, seed_y),
        GridBounds::new(width, height),
        FillConfig::DEFAULT_FRONTIER_CAPACITY,
        to_fill,
        fill,
        neighbours.unwrap_or(default),
    )
    .unwrap_or_default()
}

/// Flood fill with 4-connectivity.
///
/// An out-of-bounds seed is a no-op and yields an empty report.
pub fn flood_fill<P, A>(seed: Cell, bounds: GridBounds, to_fill: P, fill: A) -> FillReport
where
    P: FnMut(i32, i32) -> bool,
    A: FnMut(i32, i32),
{
    flood_fill_with(seed, bounds, to_fill, fill, DEFAULT_NEIGHBOURHOOD)
}

/// Flood fill with an explicit neighbourhood.
///
/// ```
/// use floodfill::{flood_fill_with, neighbours8, GridBounds};
///
/// // Only the diagonal is fillable; 8-connectivity walks it.
/// let mut filled = Vec::new();
/// flood_fill_with(
///     (0, 0),
///     GridBounds::new(4, 4),
///     |x, y| x == y,
///     |x, y| filled.push((x, y)),
///     neighbours8,
/// );
/// assert_eq!(filled, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
/// ```
pub fn flood_fill_with<P, A, N>(
    seed: Cell,
    bounds: GridBounds,
    mut to_fill: P,
    mut fill: A,
    neighbourhood: N,
) -> FillReport
where
    P: FnMut(i32, i32) -> bool,
    A: FnMut(i32, i32),
    N: Neighbourhood,
{
    checked_traverse(
        seed,
        bounds,
        FillConfig::DEFAULT_FRONTIER_CAPACITY,
        Some(&mut to_fill),
        Some(&mut fill),
        &neighbourhood,
    )
    .unwrap_or_default()
}

/// The filled cells, in visit order.
///
/// Empty if the seed is out of bounds.
pub fn fill_region<P, N>(seed: Cell, bounds: GridBounds, to_fill: P, neighbourhood: N) -> Vec<Cell>
where
    P: FnMut(i32, i32) -> bool,
    N: Neighbourhood,
{
    let mut cells = Vec::new();
    flood_fill_with(
        seed,
        bounds,
        to_fill,
        |x, y| cells.push((x, y)),
        neighbourhood,
    );
    cells
}

/// Row-major selection mask of `bounds.cell_count()` entries, `true` for
/// filled cells.
///
/// ```
/// use floodfill::{fill_mask, Connectivity, GridBounds};
///
/// let bounds = GridBounds::new(3, 1);
/// let mask = fill_mask((0, 0), bounds, |x, _| x < 2, Connectivity::Four);
/// assert_eq!(mask, vec![true, true, false]);
/// ```
pub fn fill_mask<P, N>(seed: Cell, bounds: GridBounds, to_fill: P, neighbourhood: N) -> Vec<bool>
where
    P: FnMut(i32, i32) -> bool,
    N: Neighbourhood,
{
    let mut mask = vec![false; bounds.cell_count()];
    flood_fill_with(
        seed,
        bounds,
        to_fill,
        |x, y| {
            if let Some(i) = bounds.index(x, y) {
                mask[i] = true;
            }
        },
        neighbourhood,
    );
    mask
}

/// Builder for a reusable, checked flood fill.
///
/// Unlike [`fill`], [`run`](Self::run) reports misconfiguration as a
/// [`FillError`]. The builder may be run repeatedly; every run starts from
/// a fresh visited set.
///
/// # Examples
///
/// ```
/// use floodfill::{Connectivity, FillError, FloodFill};
///
/// let grid = ["..#", ".##", "#.."];
/// let open = |x: i32, y: i32| grid[y as usize].as_bytes()[x as usize] == b'.';
///
/// let mut filled = Vec::new();
/// let report = FloodFill::new(3, 3)
///     .predicate(open)
///     .action(|x, y| filled.push((x, y)))
///     .neighbourhood(Connectivity::Four)
///     .run(0, 0)
///     .unwrap();
/// assert_eq!(report.filled, 3);
///
/// let err = FloodFill::new(3, 3).action(|_, _| {}).run(0, 0).unwrap_err();
/// assert_eq!(err, FillError::MissingPredicate);
/// ```
pub struct FloodFill<'a> {
    bounds: GridBounds,
    config: FillConfig,
    predicate: Option<Box<dyn FnMut(i32, i32) -> bool + 'a>>,
    action: Option<Box<dyn FnMut(i32, i32) + 'a>>,
    neighbourhood: Option<Box<dyn Neighbourhood + 'a>>,
}

impl<'a> FloodFill<'a> {
    /// A fill over a `width x height` grid with default configuration.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config(width, height, FillConfig::default())
    }

    /// A fill over a `width x height` grid with the given configuration.
    pub fn with_config(width: u32, height: u32, config: FillConfig) -> Self {
        Self {
            bounds: GridBounds::new(width, height),
            config,
            predicate: None,
            action: None,
            neighbourhood: None,
        }
    }

    /// Set the inclusion predicate. The seed is never tested.
    pub fn predicate(mut self, predicate: impl FnMut(i32, i32) -> bool + 'a) -> Self {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Set the action applied to every filled cell.
    pub fn action(mut self, action: impl FnMut(i32, i32) + 'a) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    /// Override the configured [`Connectivity`] with any neighbourhood.
    pub fn neighbourhood(mut self, neighbourhood: impl Neighbourhood + 'a) -> Self {
        self.neighbourhood = Some(Box::new(neighbourhood));
        self
    }

    /// The grid bounds.
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// The configuration.
    pub fn config(&self) -> &FillConfig {
        &self.config
    }

    /// Fill from `(seed_x, seed_y)`.
    ///
    /// # Errors
    ///
    /// Checked in order, before anything is invoked:
    /// - [`FillError::MissingPredicate`] if no predicate was set
    /// - [`FillError::MissingAction`] if no action was set
    /// - [`FillError::SeedOutOfBounds`] if the seed is outside the grid
    pub fn run(&mut self, seed_x: i32, seed_y: i32) -> Result<FillReport, FillError> {
        let neighbourhood: &dyn Neighbourhood = match &self.neighbourhood {
            Some(custom) => &**custom,
            None => &self.config.connectivity,
        };
        checked_traverse(
            (seed_x, seed_y),
            self.bounds,
            self.config.frontier_capacity,
            self.predicate.as_deref_mut(),
            self.action.as_deref_mut(),
            neighbourhood,
        )
    }
}

fn checked_traverse<P, A, N>(
    seed: Cell,
    bounds: GridBounds,
    frontier_capacity: usize,
    to_fill: Option<&mut P>,
    fill: Option<&mut A>,
    neighbourhood: &N,
) -> Result<FillReport, FillError>
where
    P: FnMut(i32, i32) -> bool + ?Sized,
    A: FnMut(i32, i32) + ?Sized,
    N: Neighbourhood + ?Sized,
{
    let outcome = validate(seed, bounds, to_fill, fill).map(|(to_fill, fill)| {
        traverse(seed, bounds, frontier_capacity, to_fill, fill, neighbourhood)
    });
    trace_outcome(seed, &outcome);
    outcome
}

fn validate<'f, P, A>(
    seed: Cell,
    bounds: GridBounds,
    to_fill: Option<&'f mut P>,
    fill: Option<&'f mut A>,
) -> Result<(&'f mut P, &'f mut A), FillError>
where
    P: ?Sized,
    A: ?Sized,
{
    let to_fill = to_fill.ok_or(FillError::MissingPredicate)?;
    let fill = fill.ok_or(FillError::MissingAction)?;
    if !bounds.contains_cell(seed) {
        return Err(FillError::SeedOutOfBounds {
            seed,
            width: bounds.width(),
            height: bounds.height(),
        });
    }
    Ok((to_fill, fill))
}

/// Breadth-first traversal from an in-bounds seed.
fn traverse<P, A, N>(
    seed: Cell,
    bounds: GridBounds,
    frontier_capacity: usize,
    to_fill: &mut P,
    fill: &mut A,
    neighbourhood: &N,
) -> FillReport
where
    P: FnMut(i32, i32) -> bool + ?Sized,
    A: FnMut(i32, i32) + ?Sized,
    N: Neighbourhood + ?Sized,
{
    let mut report = FillReport::default();
    let mut visited = VisitedSet::new(bounds);
    let mut frontier: VecDeque<Cell> = VecDeque::with_capacity(frontier_capacity);

    let seeded = visited.insert(seed.0, seed.1);
    debug_assert!(seeded, "seed must be validated before traversal");
    frontier.push_back(seed);

    while let Some((x, y)) = frontier.pop_front() {
        fill(x, y);
        report.record_fill(x, y);

        for (nx, ny) in neighbourhood.neighbours(x, y) {
            // Marking before the test is what keeps the predicate to one
            // call per cell; rejected cells stay marked.
            if !visited.insert(nx, ny) {
                continue;
            }
            let accepted = to_fill(nx, ny);
            report.record_test(accepted);
            if accepted {
                frontier.push_back((nx, ny));
            }
        }
    }

    debug_assert_eq!(visited.len(), report.tested + 1);
    report
}

#[cfg(feature = "tracing")]
fn trace_outcome(seed: Cell, outcome: &Result<FillReport, FillError>) {
    match outcome {
        Ok(report) => tracing::trace!(
            target: "floodfill::fill",
            ?seed,
            filled = report.filled,
            tested = report.tested,
            rejected = report.rejected,
            "fill complete"
        ),
        Err(err) => tracing::debug!(
            target: "floodfill::fill",
            ?seed,
            error = %err,
            "fill rejected"
        ),
    }
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn trace_outcome(_seed: Cell, _outcome: &Result<FillReport, FillError>) {}
