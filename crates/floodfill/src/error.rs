//! Error types for misconfigured fills.

use crate::Cell;
use std::error::Error;
use std::fmt;

/// Why a fill was rejected before touching any cell.
///
/// Checks run in declaration order: predicate, action, then seed. When a
/// fill is rejected neither the predicate nor the action has been called.
///
/// Only [`FloodFill::run`](crate::FloodFill::run) surfaces this; the
/// [`fill`](crate::fill()) contract swallows it and does nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FillError {
    /// No inclusion predicate was supplied.
    MissingPredicate,
    /// No fill action was supplied.
    MissingAction,
    /// The seed lies outside `[0, width) x [0, height)`.
    SeedOutOfBounds {
        /// The offending seed.
        seed: Cell,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPredicate => write!(f, "no fill predicate supplied"),
            Self::MissingAction => write!(f, "no fill action supplied"),
            Self::SeedOutOfBounds {
                seed,
                width,
                height,
            } => {
                write!(
                    f,
                    "seed {seed:?} out of bounds: [0, {width}) x [0, {height})"
                )
            }
        }
    }
}

impl Error for FillError {}
