//! Criterion micro-benchmarks for flood fill traversal.

use criterion::{criterion_group, criterion_main, Criterion};
use floodfill::{fill, fill_mask, flood_fill_with, Connectivity, FloodFill};
use floodfill_bench::standard_workloads;
use std::hint::black_box;

/// Benchmark: fill each standard 256x256 workload with both connectivities.
fn bench_flood_fill_256(c: &mut Criterion) {
    for workload in standard_workloads(256) {
        let grid = &workload.grid;
        for conn in [Connectivity::Four, Connectivity::Eight] {
            let id = format!("flood_fill_{}_{:?}_256", workload.name, conn);
            c.bench_function(&id, |b| {
                b.iter(|| {
                    let mut sum = 0i64;
                    let report = flood_fill_with(
                        workload.seed,
                        grid.bounds(),
                        grid.predicate(),
                        |x, y| sum += (x ^ y) as i64,
                        conn,
                    );
                    black_box((report, sum));
                });
            });
        }
    }
}

/// Benchmark: dynamic-dispatch contract vs the generic path on an open grid.
fn bench_dispatch_overhead(c: &mut Criterion) {
    let workloads = standard_workloads(256);
    let workload = &workloads[0];
    let grid = &workload.grid;
    let (w, h) = (grid.bounds().width(), grid.bounds().height());

    c.bench_function("fill_optional_callbacks_open_256", |b| {
        b.iter(|| {
            let mut count = 0usize;
            let report = fill(
                workload.seed.0,
                workload.seed.1,
                w,
                h,
                Some(&mut grid.predicate()),
                Some(&mut |_, _| count += 1),
                None,
            );
            black_box((report, count));
        });
    });

    c.bench_function("flood_fill_builder_open_256", |b| {
        let mut fill = FloodFill::new(w, h)
            .predicate(grid.predicate())
            .action(|x, y| {
                black_box((x, y));
            });
        b.iter(|| black_box(fill.run(workload.seed.0, workload.seed.1)));
    });
}

/// Benchmark: selection mask over the scatter workload.
fn bench_fill_mask(c: &mut Criterion) {
    let workloads = standard_workloads(512);
    let workload = &workloads[2];
    let grid = &workload.grid;
    c.bench_function("fill_mask_scatter_512", |b| {
        b.iter(|| {
            let mask = fill_mask(workload.seed, grid.bounds(), grid.predicate(), Connectivity::Four);
            black_box(mask);
        });
    });
}

criterion_group!(
    benches,
    bench_flood_fill_256,
    bench_dispatch_overhead,
    bench_fill_mask
);
criterion_main!(benches);
