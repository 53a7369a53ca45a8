use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lazyseq::prelude::*;
use std::hint::black_box;

fn bench_cursor_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_traversal");

    for size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("range", size), size, |b, &size| {
            b.iter(|| {
                let mut numbers = sources::range(0..size);
                let mut cursor = numbers.begin();
                let mut sum = 0i64;
                while cursor != Generator::end() {
                    sum += *cursor.get().unwrap();
                    cursor.advance();
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("iterator", size), size, |b, &size| {
            b.iter(|| {
                let sum: i64 = sources::range(0..size).map(|n| n.unwrap()).sum();
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("plain_loop", size), size, |b, &size| {
            b.iter(|| {
                let sum: i64 = (0..size).map(black_box).sum();
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn bench_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("creation");

    group.bench_function("create_and_drop_undriven", |b| {
        b.iter(|| {
            let idle = sources::range(0..black_box(10));
            drop(idle);
        });
    });

    group.bench_function("create_and_drop_after_one_item", |b| {
        b.iter(|| {
            let mut numbers = sources::fibonacci();
            black_box(numbers.next());
        });
    });

    group.finish();
}

fn bench_combinators(c: &mut Criterion) {
    let mut group = c.benchmark_group("combinators");

    for chunk_size in [1, 10, 100].iter() {
        group.bench_with_input(
            BenchmarkId::new("chunked", chunk_size),
            chunk_size,
            |b, &chunk_size| {
                b.iter(|| {
                    let chunks = sources::chunked(sources::range(0..10000), black_box(chunk_size));
                    black_box(chunks.count())
                });
            },
        );
    }

    group.bench_function("merge_three", |b| {
        b.iter(|| {
            let merged = sources::merge(vec![
                sources::range(0..1000),
                sources::range(1000..2000),
                sources::range(2000..3000),
            ]);
            black_box(merged.count())
        });
    });

    group.finish();
}

fn bench_async_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("async_stream");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("collect", size), size, |b, &size| {
            b.iter(|| {
                tokio::runtime::Runtime::new().unwrap().block_on(async {
                    let mut numbers: AsyncGenerator<'_, i64> =
                        AsyncGenerator::new(move |co| async move {
                            for n in 0..size {
                                co.yield_(black_box(n)).await;
                            }
                            Ok(())
                        });
                    black_box(numbers.collect_all().await.unwrap())
                })
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_cursor_traversal,
    bench_creation,
    bench_combinators,
    bench_async_stream
);
criterion_main!(benches);
