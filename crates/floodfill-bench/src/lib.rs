//! Benchmark workloads for floodfill.
//!
//! - [`open_workload`]: fully open square grid, widest frontier
//! - [`corridor_workload`]: serpentine corridor, narrowest frontier
//! - [`scatter_workload`]: 60% open noise, many small components

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use floodfill::Cell;
use floodfill_test_utils::fixtures::{open_grid, scatter, serpentine};
use floodfill_test_utils::MaskGrid;

/// A grid and the seed to fill it from.
pub struct Workload {
    pub name: &'static str,
    pub grid: MaskGrid,
    pub seed: Cell,
}

/// `side x side` open grid seeded at the centre.
pub fn open_workload(side: u32) -> Workload {
    let centre = (side / 2) as i32;
    Workload {
        name: "open",
        grid: open_grid(side, side),
        seed: (centre, centre),
    }
}

/// `side x side` serpentine corridor seeded at its start.
pub fn corridor_workload(side: u32) -> Workload {
    Workload {
        name: "corridor",
        grid: serpentine(side, side),
        seed: (0, 0),
    }
}

/// `side x side` scatter grid seeded at the first open cell.
pub fn scatter_workload(side: u32, seed: u64) -> Workload {
    let grid = scatter(side, side, 60, seed);
    let start = grid
        .bounds()
        .cells()
        .find(|&(x, y)| grid.is_open(x, y))
        .unwrap_or((0, 0));
    Workload {
        name: "scatter",
        grid,
        seed: start,
    }
}

/// The standard benchmark set at `side x side`.
pub fn standard_workloads(side: u32) -> Vec<Workload> {
    vec![
        open_workload(side),
        corridor_workload(side),
        scatter_workload(side, 42),
    ]
}
