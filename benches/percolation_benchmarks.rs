/// Performance benchmarks for the percolation core
///
/// Run with: cargo bench
///
/// Tracks single-trial cost across grid sizes and raw union-find throughput.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use percolation::stats::run_trial;
use percolation::UnionFind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Benchmark: one Monte Carlo trial from empty grid to percolation
fn bench_trial(c: &mut Criterion) {
    let mut group = c.benchmark_group("trial");

    for n in [16usize, 64, 256].iter() {
        group.throughput(Throughput::Elements((n * n) as u64));
        group.sample_size(20);

        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(2024);
            b.iter(|| black_box(run_trial(n, &mut rng).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark: random unions followed by connectivity queries
fn bench_union_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("union_find");

    for size in [1_000usize, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut rng = StdRng::seed_from_u64(7);
            let pairs: Vec<(usize, usize)> = (0..size)
                .map(|_| (rng.gen_range(0..size), rng.gen_range(0..size)))
                .collect();

            b.iter(|| {
                let mut uf = UnionFind::new(size);
                for &(x, y) in &pairs {
                    uf.union(x, y).unwrap();
                }
                black_box(uf.connected(0, size - 1).unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_trial, bench_union_find);
criterion_main!(benches);
