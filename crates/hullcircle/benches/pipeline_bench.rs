//! Criterion benchmarks for the hull → inscribed-circle pipeline.
//! Focus sizes: n in {10, 100, 1000, 10000} random points on the default canvas.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hullcircle::api::{build_hull, draw_uniform_points, solve, Point, RectCfg, ReplayToken};

fn cloud(n: usize, seed: u64) -> Vec<Point> {
    draw_uniform_points(n, RectCfg::default(), ReplayToken { seed, index: 0 })
        .expect("default rectangle is valid")
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    for &n in &[10usize, 100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("build_hull", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 43),
                |pts| {
                    let _hull = build_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("solve", n), &n, |b, &n| {
            let hull = build_hull(&cloud(n, 44));
            b.iter(|| {
                let _circle = solve(&hull);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
