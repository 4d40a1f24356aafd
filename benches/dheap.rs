use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dheap::DHeap;
use rand::prelude::*;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for d in [2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(d), &d, |b, &d| {
            let mut heap = DHeap::new(d).unwrap();
            b.iter(|| {
                let mut rng = rand::thread_rng();
                heap.insert(rng.gen::<i32>());
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("insert_delete_min");
    for d in [2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(d), &d, |b, &d| {
            let mut rng = rand::thread_rng();
            let mut heap = DHeap::new(d).unwrap();
            heap.extend((0..10_000).map(|_| rng.gen::<i32>()));
            b.iter(|| {
                heap.insert(rng.gen::<i32>());
                heap.delete_min().unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
