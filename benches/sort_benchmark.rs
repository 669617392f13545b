use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dsal::SortAlgorithm;

/// Deterministic pseudo-random input (xorshift).
fn shuffled(len: usize) -> Vec<u64> {
    let mut state = 0x9E37_79B9_7F4A_7C15_u64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state % 10_000
        })
        .collect()
}

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_random");
    for &len in &[64usize, 512, 2048] {
        let input = shuffled(len);
        for alg in SortAlgorithm::ALL {
            group.bench_with_input(BenchmarkId::new(alg.name(), len), &input, |b, input| {
                b.iter(|| {
                    let mut items = input.clone();
                    black_box(alg.sort(&mut items));
                    items
                })
            });
        }
    }
    group.finish();

    let mut group = c.benchmark_group("sort_presorted");
    let sorted: Vec<u64> = (0..2048).collect();
    for alg in [SortAlgorithm::Insertion, SortAlgorithm::Shell, SortAlgorithm::Merge] {
        group.bench_function(alg.name(), |b| {
            b.iter(|| {
                let mut items = sorted.clone();
                black_box(alg.sort(&mut items));
                items
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sorts);
criterion_main!(benches);
