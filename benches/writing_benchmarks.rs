use criterion::{
    Criterion,
    criterion_group,
    criterion_main, //
};
use std::hint::black_box;
use strkit::*;

fn benchmark_writing_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("writing_integers");
    let mut buf = vec![0u8; 100];

    group.bench_function("write_u16_max", |b| {
        b.iter(|| write_u16(black_box(&mut buf), 0, black_box(65535)))
    });

    group.bench_function("write_u32_small", |b| {
        b.iter(|| write_u32(black_box(&mut buf), 0, black_box(12345)))
    });

    group.bench_function("write_u32_max", |b| {
        b.iter(|| write_u32(black_box(&mut buf), 0, black_box(u32::MAX)))
    });

    group.bench_function("write_u64_max", |b| {
        b.iter(|| write_u64(black_box(&mut buf), 0, black_box(u64::MAX)))
    });

    group.bench_function("write_u128_max", |b| {
        b.iter(|| write_u128(black_box(&mut buf), 0, black_box(u128::MAX)))
    });

    group.bench_function("write_i32_negative", |b| {
        b.iter(|| write_i32(black_box(&mut buf), 0, black_box(-123456789)))
    });

    group.bench_function("write_i64_min", |b| {
        b.iter(|| write_i64(black_box(&mut buf), 0, black_box(i64::MIN)))
    });

    group.finish();
}

fn benchmark_writing_floats(c: &mut Criterion) {
    let mut group = c.benchmark_group("writing_floats");
    let mut buf = vec![0u8; 100];

    group.bench_function("write_f32_decimal", |b| {
        b.iter(|| write_f32(black_box(&mut buf), 0, black_box(123.456)))
    });

    group.bench_function("write_f64_decimal", |b| {
        b.iter(|| write_f64(black_box(&mut buf), 0, black_box(-123.456789012345)))
    });

    group.bench_function("write_f64_integral", |b| {
        b.iter(|| write_f64(black_box(&mut buf), 0, black_box(1e15)))
    });

    group.finish();
}

fn benchmark_to_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_string");

    group.bench_function("type_to_string_u64", |b| {
        b.iter(|| type_to_string(black_box(&18446744073709551615u64)))
    });

    group.bench_function("std_to_string_u64", |b| {
        b.iter(|| black_box(18446744073709551615u64).to_string())
    });

    group.bench_function("append_to_string_row", |b| {
        let mut out = String::with_capacity(64);
        b.iter(|| {
            out.clear();
            append_to_string(black_box(&42u32), &mut out);
            append_to_string(",", &mut out);
            append_to_string(black_box(&-7i64), &mut out);
            append_to_string(",", &mut out);
            append_to_string(black_box(&3.25f64), &mut out);
            black_box(out.len())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_writing_integers,
    benchmark_writing_floats,
    benchmark_to_string
);
criterion_main!(benches);
