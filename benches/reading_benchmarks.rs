use criterion::{
    Criterion, //
    criterion_group,
    criterion_main,
};
use std::hint::black_box;
use strkit::fast::{DigitCheck, numeric_convert};
use strkit::*;

fn benchmark_reading_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("reading_integers");

    group.bench_function("read_u16_max", |b| {
        b.iter(|| read_u16(black_box(b"65535")))
    });

    group.bench_function("read_u32_small", |b| {
        b.iter(|| read_u32(black_box(b"12345")))
    });

    group.bench_function("read_u32_max", |b| {
        b.iter(|| read_u32(black_box(b"4294967295")))
    });

    group.bench_function("read_u64_max", |b| {
        b.iter(|| read_u64(black_box(b"18446744073709551615")))
    });

    group.bench_function("read_u64_leading_zeros", |b| {
        b.iter(|| read_u64(black_box(b"0000000000123456789")))
    });

    group.bench_function("read_i32_negative", |b| {
        b.iter(|| read_i32(black_box(b"-123456789")))
    });

    group.bench_function("read_i64_min", |b| {
        b.iter(|| read_i64(black_box(b"-9223372036854775808")))
    });

    group.bench_function("read_u128_max", |b| {
        b.iter(|| read_u128(black_box(b"340282366920938463463374607431768211455")))
    });

    // Rejections are as common as successes on dirty input
    group.bench_function("read_u32_overflow", |b| {
        b.iter(|| read_u32(black_box(b"4294967296")))
    });

    group.bench_function("read_u32_invalid", |b| {
        b.iter(|| read_u32(black_box(b"12x45")))
    });

    group.finish();
}

fn benchmark_reading_fixed_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("reading_fixed_width");

    group.bench_function("numeric_convert_8_unchecked", |b| {
        b.iter(|| numeric_convert::<8, u32>(black_box(b"20240131"), DigitCheck::Unchecked))
    });

    group.bench_function("numeric_convert_8_checked", |b| {
        b.iter(|| numeric_convert::<8, u32>(black_box(b"20240131"), DigitCheck::Checked))
    });

    group.bench_function("read_u32_8_digits", |b| {
        b.iter(|| read_u32(black_box(b"20240131")))
    });

    group.bench_function("numeric_convert_19_unchecked", |b| {
        b.iter(|| {
            numeric_convert::<19, u64>(black_box(b"1234567890123456789"), DigitCheck::Unchecked)
        })
    });

    group.finish();
}

fn benchmark_reading_floats(c: &mut Criterion) {
    let mut group = c.benchmark_group("reading_floats");

    group.bench_function("read_f32_decimal", |b| {
        b.iter(|| read_f32(black_box(b"123.456789")))
    });

    group.bench_function("read_f64_integer", |b| {
        b.iter(|| read_f64(black_box(b"123456789")))
    });

    group.bench_function("read_f64_decimal", |b| {
        b.iter(|| read_f64(black_box(b"-123.456789012345")))
    });

    group.bench_function("read_f64_exponent", |b| {
        b.iter(|| read_f64(black_box(b"6.02214076e23")))
    });

    group.bench_function("read_f64_infinity", |b| {
        b.iter(|| read_f64(black_box(b"-Infinity")))
    });

    group.finish();
}

fn benchmark_reading_other(c: &mut Criterion) {
    let mut group = c.benchmark_group("reading_other");

    group.bench_function("read_bool_word", |b| {
        b.iter(|| read_bool(black_box(b"False")))
    });

    group.bench_function("string_to_type_char", |b| {
        b.iter(|| string_to_type::<char>(black_box(b"x")))
    });

    group.bench_function("parse_three_fields", |b| {
        b.iter(|| parse::<(f64, i32, i32)>(black_box(b"3.14,42,-7"), b","))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_reading_integers,
    benchmark_reading_fixed_width,
    benchmark_reading_floats,
    benchmark_reading_other
);
criterion_main!(benches);
