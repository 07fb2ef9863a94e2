//! Criterion benchmarks for the annealing network.
//!
//! Tensor construction and energy are O(N⁴); a single update is O(N²).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use queen_anneal::boltzmann::{
    AnnealRunner, AnnealingNetwork, NetworkConfig, PenaltyWeights, WeightTensor,
};
use queen_anneal::random::create_rng;

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_tensor_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("tensor_build");

    for &n in &[8usize, 16, 24] {
        let penalties = PenaltyWeights::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(WeightTensor::new(black_box(n), &penalties)))
        });
    }
    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");

    for &n in &[8usize, 16, 24] {
        let config = NetworkConfig::new(n);
        let mut network = AnnealingNetwork::with_rng(&config, create_rng(42)).unwrap();
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(network.update()))
        });
    }
    group.finish();
}

fn bench_energy(c: &mut Criterion) {
    let mut group = c.benchmark_group("energy");

    for &n in &[8usize, 16, 24] {
        let config = NetworkConfig::new(n);
        let network = AnnealingNetwork::with_rng(&config, create_rng(42)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &network, |b, net| {
            b.iter(|| black_box(net.energy()))
        });
    }
    group.finish();
}

fn bench_anneal(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal");
    group.sample_size(10);

    for &n in &[4usize, 6, 8] {
        let config = NetworkConfig::new(n).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &config, |b, c| {
            b.iter(|| {
                let result = AnnealRunner::run(black_box(c)).unwrap();
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tensor_build, bench_update, bench_energy, bench_anneal);
criterion_main!(benches);
