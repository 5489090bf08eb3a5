//! Generalized flood fill over rectangular 2D grids.
//!
//! Starting from a seed cell, the engine visits the seed and, transitively,
//! every reachable neighbour that satisfies a caller-supplied predicate,
//! running a caller-supplied action on each visited cell exactly once.
//! The grid itself is never stored here: cell contents are only seen
//! through the predicate and action closures.
//!
//! # Entry points
//!
//! - [`fill`]: the optional-argument contract. Missing callbacks or an
//!   out-of-bounds seed make it a silent no-op.
//! - [`flood_fill`] / [`flood_fill_with`]: statically dispatched closures.
//! - [`FloodFill`]: builder that reports misconfiguration as [`FillError`].
//! - [`fill_region`] / [`fill_mask`]: collect the filled cells.
//!
//! # Neighbourhoods
//!
//! [`Connectivity::Four`] (the default) and [`Connectivity::Eight`] are
//! provided. Any `Fn(i32, i32) -> impl IntoIterator<Item = Cell>` also
//! implements [`Neighbourhood`], so [`neighbours4`] and [`neighbours8`]
//! can be passed directly.
//!
//! ```
//! use floodfill::{flood_fill, GridBounds};
//!
//! let mut filled = Vec::new();
//! let report = flood_fill((1, 1), GridBounds::new(3, 3), |_, _| true, |x, y| {
//!     filled.push((x, y));
//! });
//! assert_eq!(report.filled, 9);
//! assert_eq!(filled[0], (1, 1));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod config;
pub mod engine;
pub mod error;
pub mod neighbourhood;
pub mod report;
mod visited;

pub use bounds::GridBounds;
pub use config::FillConfig;
pub use engine::{fill, fill_mask, fill_region, flood_fill, flood_fill_with, FloodFill};
pub use error::FillError;
pub use neighbourhood::{neighbours4, neighbours8, Connectivity, Neighbourhood};
pub use report::{Extent, FillReport};

/// A grid coordinate as `(x, y)`.
///
/// Coordinates are signed so neighbourhoods can produce candidates that
/// fall outside the grid; the engine filters them against [`GridBounds`].
pub type Cell = (i32, i32);
