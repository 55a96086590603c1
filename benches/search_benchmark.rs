use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vectorwalk::{build_index, search, search_with_budget, BuildParams, Index};

fn random_corpus(n: usize, d: usize, seed: u64) -> Array2<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let flat: Vec<f32> = (0..n * d).map(|_| rng.random_range(-1.0..1.0)).collect();
    Array2::from_shape_vec((n, d), flat).unwrap()
}

fn random_query(d: usize, seed: u64) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..d).map(|_| rng.random_range(-1.0..1.0)).collect()
}

fn build_fixture(n: usize) -> Index {
    let vectors = random_corpus(n, 32, 42);
    build_index(vectors, &BuildParams::default()).expect("build failed")
}

/// Benchmark: end-to-end query latency (both searches) over growing corpora
fn bench_search_by_corpus_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_by_corpus_size");

    for n in [200usize, 1_000, 5_000] {
        let index = build_fixture(n);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("search", n), &n, |b, _| {
            let mut counter = 0u64;
            b.iter(|| {
                let query = random_query(32, counter);
                counter += 1;
                search(&index, black_box(&query)).expect("search failed")
            });
        });
    }

    group.finish();
}

/// Benchmark: query latency with a step budget applied, relative to unbounded
fn bench_search_budget_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_budget_comparison");
    let index = build_fixture(1_000);

    group.throughput(Throughput::Elements(1));
    group.bench_function("unbounded", |b| {
        let mut counter = 0u64;
        b.iter(|| {
            let query = random_query(32, counter);
            counter += 1;
            search(&index, black_box(&query)).expect("search failed")
        });
    });

    group.bench_function("budget_64", |b| {
        let mut counter = 0u64;
        b.iter(|| {
            let query = random_query(32, counter);
            counter += 1;
            // A generous budget rarely trips BudgetExhausted for this
            // corpus size; it measures the bookkeeping overhead, not the
            // exhaustion path.
            search_with_budget(&index, black_box(&query), 64)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_search_by_corpus_size,
    bench_search_budget_comparison
);
criterion_main!(benches);
