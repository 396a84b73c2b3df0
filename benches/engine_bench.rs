//! Criterion benchmarks for the two search engines.
//!
//! Uses synthetic random symmetric instances to measure engine overhead at
//! a few sizes, with termination limits small enough for benchmarking.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tsp_heur::ga::{GaConfig, GaRunner};
use tsp_heur::model::TspInstance;
use tsp_heur::sa::{SaConfig, SaRunner};

fn random_instance(n: usize, seed: u64) -> TspInstance {
    let mut rng = StdRng::seed_from_u64(seed);
    let entries: Vec<f64> = (0..n * (n - 1) / 2)
        .map(|_| rng.random_range(1.0..1000.0).round())
        .collect();
    TspInstance::from_upper_triangular(format!("random{n}"), n, &entries).unwrap()
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga");
    for n in [20, 50] {
        let instance = random_instance(n, 42);
        let config = GaConfig::default()
            .with_population_size(100)
            .with_stagnation_limit(500)
            .with_max_generations(2_000)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::new("steady_state", n), &instance, |b, inst| {
            b.iter(|| {
                let result = GaRunner::run(black_box(inst), &config).unwrap();
                black_box(result.best_length)
            })
        });
    }
    group.finish();
}

fn bench_sa(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa");
    group.sample_size(10);
    for n in [20, 50] {
        let instance = random_instance(n, 42);
        let config = SaConfig::default()
            .with_temp_list_length(50)
            .with_max_outer_iterations(20)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::new("ldsa", n), &instance, |b, inst| {
            b.iter(|| {
                let result = SaRunner::run(black_box(inst), &config).unwrap();
                black_box(result.best_length)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ga, bench_sa);
criterion_main!(benches);
