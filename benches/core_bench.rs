use bezier_drag_demo::{sample_cubic, ControlPoints};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use std::hint::black_box;

fn bench_sample_cubic(c: &mut Criterion) {
    let points = ControlPoints::default();
    let mut group = c.benchmark_group("sample_cubic");

    for sample_count in [100usize, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(sample_count),
            &sample_count,
            |b, &n| b.iter(|| black_box(sample_cubic(black_box(&points), n)).len()),
        );
    }

    group.finish();
}

fn bench_pick(c: &mut Criterion) {
    let points = ControlPoints::default();
    let queries: Vec<DVec2> = (0..1_000)
        .map(|i| DVec2::new((i % 60) as f64 * 0.1 - 1.0, (i / 60) as f64 * 0.3 - 1.0))
        .collect();

    c.bench_function("pick_control_point_1k", |b| {
        b.iter(|| {
            queries
                .iter()
                .filter_map(|q| points.pick(black_box(*q), 0.2))
                .count()
        })
    });
}

criterion_group!(benches, bench_sample_cubic, bench_pick);
criterion_main!(benches);
