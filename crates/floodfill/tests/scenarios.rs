//! End-to-end fills over fixture grids.

use floodfill::{
    fill, fill_mask, fill_region, flood_fill, flood_fill_with, neighbours4, neighbours8, Cell,
    Connectivity, FillConfig, FillError, FloodFill, GridBounds,
};
use floodfill_test_utils::fixtures::{checkerboard, open_grid, serpentine};
use floodfill_test_utils::{reference_component, CallLog, MaskGrid};
use std::collections::BTreeSet;

fn set(cells: &[Cell]) -> BTreeSet<Cell> {
    cells.iter().copied().collect()
}

#[test]
fn scenario_open_3x3_four_connected() {
    let grid = open_grid(3, 3);
    let log = CallLog::new();
    fill(
        1,
        1,
        3,
        3,
        Some(&mut log.predicate(grid.predicate())),
        Some(&mut log.action()),
        None,
    );
    assert_eq!(log.filled_set(), grid.bounds().cells().collect::<BTreeSet<_>>());
    assert_eq!(log.max_fill_count(), 1);
}

#[test]
fn scenario_even_sum_only_seed() {
    let log = CallLog::new();
    flood_fill(
        (0, 0),
        GridBounds::new(3, 3),
        log.predicate(|x, y| (x + y) % 2 == 0),
        log.action(),
    );
    assert_eq!(log.filled(), vec![(0, 0)]);
}

#[test]
fn scenario_open_3x3_eight_connected() {
    let log = CallLog::new();
    flood_fill_with(
        (1, 1),
        GridBounds::new(3, 3),
        log.predicate(|_, _| true),
        log.action(),
        Connectivity::Eight,
    );
    let filled = log.filled();
    assert_eq!(filled.len(), 9);
    // The eight neighbours are queued straight from the seed.
    assert_eq!(filled[1..], neighbours8(1, 1));
}

#[test]
fn scenario_seed_outside_5x5() {
    let log = CallLog::new();
    let report = fill(
        -1,
        0,
        5,
        5,
        Some(&mut log.predicate(|_, _| true)),
        Some(&mut log.action()),
        None,
    );
    assert!(report.is_empty());
    assert_eq!(log.total_fills(), 0);
    assert_eq!(log.total_tests(), 0);
}

#[test]
fn scenario_diagonal_unreachable_with_four() {
    let log = CallLog::new();
    flood_fill(
        (0, 0),
        GridBounds::new(2, 2),
        log.predicate(|x, y| (x, y) == (1, 1)),
        log.action(),
    );
    assert_eq!(log.filled(), vec![(0, 0)]);
    assert_eq!(log.fill_count((1, 1)), 0);
    // Neither orthogonal neighbour passes, so (1, 1) is never even tested.
    assert_eq!(log.test_count((1, 1)), 0);
}

#[test]
fn checkerboard_components_depend_on_connectivity() {
    let grid = checkerboard(6, 6);
    let four = fill_region((2, 2), grid.bounds(), grid.predicate(), Connectivity::Four);
    assert_eq!(four, vec![(2, 2)]);

    let eight = fill_region((2, 2), grid.bounds(), grid.predicate(), Connectivity::Eight);
    assert_eq!(eight.len(), grid.open_count());
}

#[test]
fn serpentine_corridor_is_one_component() {
    let grid = serpentine(7, 9);
    let cells = fill_region((0, 0), grid.bounds(), grid.predicate(), neighbours4);
    assert_eq!(cells.len(), grid.open_count());
    assert_eq!(
        set(&cells),
        reference_component(grid.bounds(), (0, 0), grid.predicate(), &Connectivity::Four)
    );
}

#[test]
fn walled_room_matches_reference() {
    let grid = MaskGrid::parse(
        "
        ..........
        .####.....
        .#..#.....
        .#..#..##.
        .####..#..
        .......#..
        ",
    );
    for conn in [Connectivity::Four, Connectivity::Eight] {
        for seed in [(0, 0), (2, 2), (9, 5), (8, 3)] {
            let cells = fill_region(seed, grid.bounds(), grid.predicate(), conn);
            let expected = reference_component(grid.bounds(), seed, grid.predicate(), &conn);
            assert_eq!(set(&cells), expected, "{conn:?} from {seed:?}");
        }
    }
    // The room interior is sealed under 4-connectivity.
    let inside = fill_region((2, 2), grid.bounds(), grid.predicate(), Connectivity::Four);
    assert_eq!(set(&inside), set(&[(2, 2), (3, 2), (2, 3), (3, 3)]));
}

#[test]
fn blocked_seed_is_still_filled() {
    let grid = MaskGrid::parse(
        "
        ...
        .#.
        ...
        ",
    );
    let log = CallLog::new();
    let report = flood_fill((1, 1), grid.bounds(), log.predicate(grid.predicate()), log.action());
    assert_eq!(report.filled, 9);
    assert_eq!(log.fill_count((1, 1)), 1);
    assert_eq!(log.test_count((1, 1)), 0);
}

#[test]
fn mask_matches_region() {
    let grid = serpentine(5, 5);
    let cells = fill_region((4, 4), grid.bounds(), grid.predicate(), Connectivity::Four);
    let mask = fill_mask((4, 4), grid.bounds(), grid.predicate(), Connectivity::Four);
    let from_mask: BTreeSet<Cell> = grid
        .bounds()
        .cells()
        .zip(&mask)
        .filter(|(_, m)| **m)
        .map(|(c, _)| c)
        .collect();
    assert_eq!(from_mask, set(&cells));
}

#[test]
fn builder_and_contract_agree() {
    let grid = serpentine(6, 6);
    let bounds = grid.bounds();

    let builder_log = CallLog::new();
    let report = FloodFill::with_config(
        bounds.width(),
        bounds.height(),
        FillConfig::new(Connectivity::Eight).with_frontier_capacity(1),
    )
    .predicate(builder_log.predicate(grid.predicate()))
    .action(builder_log.action())
    .run(0, 0)
    .unwrap();

    let contract_log = CallLog::new();
    fill(
        0,
        0,
        bounds.width(),
        bounds.height(),
        Some(&mut contract_log.predicate(grid.predicate())),
        Some(&mut contract_log.action()),
        Some(&Connectivity::Eight),
    );

    assert_eq!(builder_log.filled(), contract_log.filled());
    assert_eq!(builder_log.tested(), contract_log.tested());
    assert_eq!(report.filled, contract_log.total_fills());
    assert_eq!(report.tested, contract_log.total_tests());
}

#[test]
fn builder_errors_leave_callbacks_untouched() {
    let log = CallLog::new();
    let err = FloodFill::new(4, 4)
        .predicate(log.predicate(|_, _| true))
        .action(log.action())
        .run(4, 0)
        .unwrap_err();
    assert_eq!(
        err,
        FillError::SeedOutOfBounds {
            seed: (4, 0),
            width: 4,
            height: 4
        }
    );
    assert_eq!(log.total_tests() + log.total_fills(), 0);
}
