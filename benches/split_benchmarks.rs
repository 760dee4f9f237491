use criterion::{
    Criterion,
    Throughput,
    criterion_group,
    criterion_main, //
};
use core::ops::Range;
use std::hint::black_box;
use strkit::*;

fn csv_line(fields: usize) -> Vec<u8> {
    let mut line = Vec::new();
    for i in 0..fields {
        if i > 0 {
            line.push(b',');
        }
        line.extend_from_slice(format!("{}", i * 7919).as_bytes());
    }
    line
}

fn benchmark_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");
    let line = csv_line(64);
    group.throughput(Throughput::Bytes(line.len() as u64));

    group.bench_function("split_single_delimiter_count", |b| {
        b.iter(|| split(b",", black_box(&line), CountSink, SplitOptions::DEFAULT))
    });

    group.bench_function("split_table_delimiter_count", |b| {
        let table = DelimiterTable::from_bytes(b",;");
        b.iter(|| split_with(&table, black_box(&line), CountSink, SplitOptions::DEFAULT))
    });

    group.bench_function("split_into_spans", |b| {
        let mut spans: Vec<Range<usize>> = Vec::with_capacity(64);
        b.iter(|| {
            spans.clear();
            split(b",", black_box(&line), &mut spans, SplitOptions::COMPRESS_DELIMITERS)
        })
    });

    group.bench_function("tokenizer_iter", |b| {
        let delimiter = SingleDelimiter(b',');
        b.iter(|| Tokenizer::new(black_box(&line), &delimiter).count_tokens())
    });

    group.bench_function("split_n_first_4", |b| {
        let mut slots: [&[u8]; 4] = [b"".as_slice(); 4];
        b.iter(|| {
            split_n(
                b",",
                black_box(&line),
                4,
                SliceSink::new(&mut slots),
                SplitOptions::DEFAULT,
            )
        })
    });

    group.finish();
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let line = csv_line(64);

    group.bench_function("parse_all_u32", |b| {
        let mut values: Vec<u32> = Vec::with_capacity(64);
        b.iter(|| {
            values.clear();
            parse_all(black_box(&line), b",", &mut values)
        })
    });

    group.bench_function("parse_six_fields", |b| {
        b.iter(|| parse::<(u32, u32, u32, u32, u32, u32)>(black_box(&line), b","))
    });

    group.finish();
}

criterion_group!(benches, benchmark_split, benchmark_parse);
criterion_main!(benches);
