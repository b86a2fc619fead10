//! Criterion benchmarks for digit generation, mapping, and rendering.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use digpipe_bench::{cycled_chunk, pi_chunk};
use digpipe_core::{Mapper, TapeHeader};
use digpipe_engine::{render_from, RenderOptions};
use digpipe_mapper::GbaTenKeyMapper;
use digpipe_source::PiDigitSource;
use digpipe_tape::TapeStore;
use digpipe_test_utils::{CollectingSink, MemoryTape};

/// Benchmark: Compute 10K digits of π.
fn bench_pi_10k(c: &mut Criterion) {
    c.bench_function("pi_digits_10k", |b| {
        b.iter(|| black_box(PiDigitSource::new(10_000)));
    });
}

/// Benchmark: Map one 100K-digit chunk to actions.
fn bench_map_chunk(c: &mut Criterion) {
    let chunk = cycled_chunk(0, 100_000);
    let mapper = GbaTenKeyMapper::default();

    let mut group = c.benchmark_group("mapper");
    group.throughput(Throughput::Elements(chunk.len() as u64));
    group.bench_function("gba_tenkey_100k", |b| {
        b.iter(|| black_box(mapper.map_chunk(&chunk, 0).unwrap()));
    });
    group.finish();
}

/// Benchmark: Render a 10-chunk in-memory tape of real π digits.
fn bench_render_tape(c: &mut Criterion) {
    let chunk_size = 1_000;
    let mut tape = MemoryTape::new();
    for i in 0..10 {
        tape.write_chunk(&pi_chunk(i, chunk_size).unwrap()).unwrap();
    }
    let header = TapeHeader {
        source_name: "pi".into(),
        total_digits: 10 * chunk_size,
        chunk_size,
    };
    let mapper = GbaTenKeyMapper::default();

    c.bench_function("render_10x1k", |b| {
        b.iter(|| {
            let mut sink = CollectingSink::new();
            let report =
                render_from(&tape, &header, &mapper, &mut sink, &RenderOptions::default()).unwrap();
            black_box((report, sink.actions.len()));
        });
    });
}

criterion_group!(benches, bench_pi_10k, bench_map_chunk, bench_render_tape);
criterion_main!(benches);
