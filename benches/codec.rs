//! Sequence codec throughput for both widths and byte orders.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use floatcast::{EncodingOptions, bytes_to_f32s, bytes_to_f64s, f32s_to_bytes, f64s_to_bytes};
use std::hint::black_box;

const LEN: usize = 4096;

fn options() -> [(&'static str, EncodingOptions); 2] {
    [
        ("big_endian", EncodingOptions::big_endian()),
        ("little_endian", EncodingOptions::little_endian()),
    ]
}

fn encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(LEN as u64));

    let f32s: Vec<f32> = (0..LEN).map(|i| i as f32 * 0.25).collect();
    let f64s: Vec<f64> = (0..LEN).map(|i| i as f64 * 0.25).collect();

    for (name, opts) in options() {
        group.bench_with_input(BenchmarkId::new("f32", name), &opts, |b, opts| {
            b.iter(|| f32s_to_bytes(black_box(&f32s), Some(opts)))
        });
        group.bench_with_input(BenchmarkId::new("f64", name), &opts, |b, opts| {
            b.iter(|| f64s_to_bytes(black_box(&f64s), Some(opts)))
        });
    }

    group.finish();
}

fn decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(LEN as u64));

    for (name, opts) in options() {
        let f32_bytes = f32s_to_bytes(&vec![1.5f32; LEN], Some(&opts));
        let f64_bytes = f64s_to_bytes(&vec![1.5f64; LEN], Some(&opts));

        group.bench_with_input(BenchmarkId::new("f32", name), &opts, |b, opts| {
            b.iter(|| bytes_to_f32s(black_box(&f32_bytes), Some(opts)))
        });
        group.bench_with_input(BenchmarkId::new("f64", name), &opts, |b, opts| {
            b.iter(|| bytes_to_f64s(black_box(&f64_bytes), Some(opts)))
        });
    }

    group.finish();
}

criterion_group!(benches, encode, decode);
criterion_main!(benches);
