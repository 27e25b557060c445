use criterion::{black_box, criterion_group, criterion_main, Criterion};
use unroll_bench::{fill_buffer, sum_array, sum_array_unrolled};

fn bench_sum(c: &mut Criterion) {
    let buffer = fill_buffer();

    c.bench_function("sum_array", |b| {
        b.iter(|| sum_array(black_box(&buffer)))
    });

    c.bench_function("sum_array_unrolled", |b| {
        b.iter(|| sum_array_unrolled(black_box(&buffer)))
    });
}

criterion_group!(benches, bench_sum);
criterion_main!(benches);
