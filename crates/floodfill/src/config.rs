//! Fill configuration parameters.

use crate::neighbourhood::Connectivity;

/// Configuration for a [`FloodFill`](crate::FloodFill).
///
/// Plain data; nothing is read from the environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillConfig {
    /// Adjacency used when no custom neighbourhood is supplied.
    ///
    /// Default: [`Connectivity::Four`].
    pub connectivity: Connectivity,

    /// Initial capacity of the frontier queue.
    ///
    /// Default: 64. The queue still grows as needed; this only avoids
    /// early reallocations on large fills.
    pub frontier_capacity: usize,
}

impl FillConfig {
    /// Default initial frontier capacity.
    pub const DEFAULT_FRONTIER_CAPACITY: usize = 64;

    /// Create a config with the given connectivity and default capacity.
    pub fn new(connectivity: Connectivity) -> Self {
        Self {
            connectivity,
            frontier_capacity: Self::DEFAULT_FRONTIER_CAPACITY,
        }
    }

    /// Set the initial frontier capacity.
    pub fn with_frontier_capacity(mut self, capacity: usize) -> Self {
        self.frontier_capacity = capacity;
        self
    }
}

impl Default for FillConfig {
    fn default() -> Self {
        Self::new(Connectivity::default())
    }
}
