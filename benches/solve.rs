use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use series_ac::circuits::{resolve, solve, CircuitType};
use series_ac::sweep::{frequency_response, logspace_hz};
use series_ac::visual::{waveforms, WaveformConfig};

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.bench_function("resolve_rc", |b| {
        b.iter(|| resolve(Some(1.0e-6), None, Some(376.99), CircuitType::RC))
    });
    group.bench_function("solve_rl", |b| {
        b.iter(|| solve(230.0, 47.0, Some(0.2), None, Some(50.0), CircuitType::RL))
    });
    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    let freqs = logspace_hz(1.0, 1.0e6, 10_000).expect("valid bounds");
    group.bench_function(BenchmarkId::new("frequency_response_rc", freqs.len()), |b| {
        b.iter(|| frequency_response(1.0, 100.0, 1.0e-6, CircuitType::RC, freqs.iter().copied()))
    });

    let solution = solve(10.0, 100.0, Some(1.0e-6), None, Some(1.0e3), CircuitType::RC).expect("valid circuit");
    group.bench_function(BenchmarkId::new("waveforms", 500), |b| {
        b.iter(|| waveforms(&solution, &WaveformConfig::default()))
    });
    group.finish();
}

criterion_group!(benches, bench_solve, bench_sweep);
criterion_main!(benches);
