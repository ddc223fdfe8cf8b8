//! Performance benchmarks for ctrlcache
//!
//! This benchmark suite measures:
//! - Serialization with increasing numbers of directives
//! - Parsing clean, labelled and noisy header text
//!
//! Run with: cargo bench
//! View results: open target/criterion/report/index.html

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ctrlcache::{
    parse_cache_control, serialize_cache_control, CacheControlSettings, Directive, DirectiveKind,
    DirectiveValue,
};
use std::hint::black_box;

// ============================================================================
// Benchmark Fixtures
// ============================================================================

/// Settings holding the first `count` directives of the table.
fn settings_with(count: usize) -> CacheControlSettings {
    Directive::ALL
        .into_iter()
        .take(count)
        .map(|directive| match directive.kind() {
            DirectiveKind::Seconds => (directive, DirectiveValue::Seconds(3600.0)),
            DirectiveKind::Flag => (directive, DirectiveValue::Flag),
        })
        .collect()
}

const NOISY_HEADER: &str = "Cache-Control:max-age=60,    s-maxage=invalid,immutable, \
     no-store=false ,, stale-while-revalidate = 300  ,x-vendor-directive=1, stale-if-error=360";

// ============================================================================
// Group 1: Serialization
// ============================================================================

fn serialize_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for count in [1, 4, 8, Directive::ALL.len()].iter() {
        let settings = settings_with(*count);

        group
            .throughput(Throughput::Elements(*count as u64))
            .bench_with_input(BenchmarkId::new("directives", count), &settings, |b, settings| {
                b.iter(|| serialize_cache_control(black_box(settings)));
            });
    }

    group.finish();
}

// ============================================================================
// Group 2: Parsing
// ============================================================================

fn parse_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for count in [1, 4, 8, Directive::ALL.len()].iter() {
        let header = serialize_cache_control(&settings_with(*count));

        group
            .throughput(Throughput::Bytes(header.len() as u64))
            .bench_with_input(BenchmarkId::new("clean", count), &header, |b, header| {
                b.iter(|| parse_cache_control(black_box(header)));
            });
    }

    let labelled = format!("Cache-Control: {}", serialize_cache_control(&settings_with(14)));
    group.bench_function("labelled", |b| {
        b.iter(|| parse_cache_control(black_box(&labelled)));
    });

    group.bench_function("noisy", |b| {
        b.iter(|| parse_cache_control(black_box(NOISY_HEADER)));
    });

    group.finish();
}

// ============================================================================
// Benchmark Registration
// ============================================================================

criterion_group!(benches, serialize_benchmarks, parse_benchmarks);
criterion_main!(benches);
