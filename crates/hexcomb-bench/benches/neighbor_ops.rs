//! Criterion micro-benchmarks for neighbor resolution strategies.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexcomb_bench::reference_grid;
use hexcomb_neighbor::{NeighborResolver, Strategy};

/// Benchmark: resolve neighbors for all 10K tiles of the reference grid,
/// once per strategy.
fn bench_neighbors_all_strategies_10k(c: &mut Criterion) {
    let spec = reference_grid();
    for (name, strategy) in [
        ("neighbors_parity_table_10k", Strategy::ParityTable),
        ("neighbors_proximity_10k", Strategy::ProximitySearch),
        ("neighbors_calibrated_10k", Strategy::CalibratedDeltas),
    ] {
        let resolver = NeighborResolver::with_strategy(spec, strategy);
        // Pull calibration out of the measured loop.
        black_box(resolver.neighbors(hexcomb_core::Offset::new(0, 0)));

        c.bench_function(name, |b| {
            b.iter(|| {
                for at in spec.iter_offsets() {
                    let n = resolver.neighbors(at);
                    black_box(&n);
                }
            });
        });
    }
}

/// Benchmark: the one-time calibration cost, including the first query.
fn bench_calibration_cost(c: &mut Criterion) {
    let spec = reference_grid();
    c.bench_function("calibration_first_query", |b| {
        b.iter(|| {
            let resolver = NeighborResolver::new(spec);
            let n = resolver.neighbors(hexcomb_core::Offset::new(50, 50));
            black_box(&n);
        });
    });
}

criterion_group!(
    benches,
    bench_neighbors_all_strategies_10k,
    bench_calibration_cost
);
criterion_main!(benches);
