use chart_core::rolling_mean;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001)).collect()
}

fn bench_rolling(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling_mean");
    for &n in &[1_000usize, 100_000usize] {
        let data = gen(n);
        for &w in &[7usize, 28usize] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_w{w}")), &w, |b, &w| {
                b.iter(|| black_box(rolling_mean(&data, w)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_rolling);
criterion_main!(benches);
