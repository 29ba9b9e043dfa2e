use chart_playground::core::PointSeries;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_render_10k(c: &mut Criterion) {
    let xs: Vec<f64> = (0..10_000).map(f64::from).collect();
    let ys: Vec<f64> = xs.iter().map(|x| (x * 0.01).sin() * 100.0).collect();
    let series = PointSeries::new(xs, ys).expect("valid series");

    c.bench_function("point_series_render_10k", |b| {
        b.iter(|| {
            let _ = black_box(&series).render();
        })
    });
}

fn bench_lazy_points_10k(c: &mut Criterion) {
    let xs: Vec<f64> = (0..10_000).map(f64::from).collect();
    let ys = xs.clone();
    let series = PointSeries::new(xs, ys).expect("valid series");

    c.bench_function("point_series_lazy_sum_10k", |b| {
        b.iter(|| black_box(&series).points().map(|p| p.x + p.y).sum::<f64>())
    });
}

criterion_group!(benches, bench_render_10k, bench_lazy_points_10k);
criterion_main!(benches);
