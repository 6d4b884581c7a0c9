use std::f64::consts::PI;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use dropsize::psd::{binner, Analysis, BinTable, CrossingMode};

fn wide_bins() -> BinTable {
    let representative: Vec<f64> = (0..24).map(|i| 0.5 * 1.4f64.powi(i)).collect();
    let lower: Vec<f64> = std::iter::once(0.0)
        .chain(representative[..representative.len() - 1].iter().copied())
        .collect();
    BinTable::new(lower, representative.clone(), representative).unwrap()
}

// Deterministic spread of areas across the bin range.
fn synthetic_areas(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let d = 0.6 + 30.0 * ((i % 997) as f64 / 997.0);
            PI * d * d / 4.0
        })
        .collect()
}

fn bench_binning(c: &mut Criterion) {
    let bins = wide_bins();
    let areas = synthetic_areas(100_000);

    c.bench_function("bin_100k_areas", |b| {
        b.iter(|| binner::bin_measurements(black_box(&areas), black_box(&bins)))
    });
}

fn bench_full_summary(c: &mut Criterion) {
    let areas = synthetic_areas(100_000);

    c.bench_function("analyze_and_summarize_100k", |b| {
        b.iter(|| {
            let analysis = Analysis::new(black_box(&areas), wide_bins()).unwrap();
            analysis
                .summarize([10.0, 50.0, 90.0], CrossingMode::Inclusive)
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_binning, bench_full_summary);
criterion_main!(benches);
