use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use algoviz_core::registry::Registry;
use algoviz_core::tree::Avl;

fn reversed(n: i64) -> Vec<i64> {
    (1..=n).rev().collect()
}

fn sorting_traces(c: &mut Criterion) {
    let registry = Registry::new();
    let mut group = c.benchmark_group("sorting_traces");
    for size in [16i64, 64, 256] {
        let input = reversed(size);
        for id in registry.sorting_ids() {
            group.bench_with_input(
                BenchmarkId::new(id, size),
                &input,
                |b, input| {
                    b.iter(|| registry.sorting_steps(id, black_box(input)).unwrap());
                },
            );
        }
    }
    group.finish();
}

fn avl_bulk_insert(c: &mut Criterion) {
    let input = reversed(128);
    c.bench_function("avl_insert_128_descending", |b| {
        b.iter(|| {
            let mut avl = Avl::new();
            avl.insert(black_box(&input), None)
        });
    });
}

criterion_group!(benches, sorting_traces, avl_bulk_insert);
criterion_main!(benches);
