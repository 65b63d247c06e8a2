//! Criterion benchmarks for the annealing loop and distance evaluation.
//!
//! Uses seeded random maps in the unit square so every sample anneals
//! the same instance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsp_anneal::anneal::{AnnealConfig, Annealer, CoolingParameters};
use tsp_anneal::distance::DistanceEvaluator;
use tsp_anneal::map::random_tour;

fn bench_total_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_distance");

    for &n in &[10usize, 100, 1000] {
        let tour = random_tour(n, Some(3141)).expect("valid map size");
        group.bench_with_input(BenchmarkId::from_parameter(n), &tour, |b, t| {
            b.iter(|| DistanceEvaluator::total_distance(black_box(t)))
        });
    }
    group.finish();
}

fn bench_anneal(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal");
    group.sample_size(10);

    for &n in &[10usize, 50, 100] {
        let tour = random_tour(n, Some(3141)).expect("valid map size");
        let config = AnnealConfig::default()
            .with_cooling(CoolingParameters::new(1000.0, 1e-3, 10.0))
            .with_seed(5926);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(tour, config),
            |b, (t, c)| {
                b.iter(|| {
                    let annealer = Annealer::new(t.clone(), c.clone()).expect("valid config");
                    black_box(annealer.run())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_total_distance, bench_anneal);
criterion_main!(benches);
