//! Criterion benchmarks for fanlog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fanlog::core::format;
use fanlog::prelude::*;

fn site() -> CallSite {
    CallSite::new("bench", "benches/dispatch_benchmarks.rs", 1)
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(1));

    let table = PolicyTable::default();
    let diagnostic = LogRecord::new(Level::Error, "disk almost full on /var", site());
    let terse = LogRecord::new(Level::Info, "user signed in", site());

    group.bench_function("diagnostic_line", |b| {
        b.iter(|| format::render(black_box(&diagnostic), black_box(&table)));
    });

    group.bench_function("terse_line", |b| {
        b.iter(|| format::render(black_box(&terse), black_box(&table)));
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let logger = Dispatcher::new(vec![Box::new(MemorySink::new())]);

    group.bench_function("enabled_level", |b| {
        b.iter(|| {
            logger.info(black_box("benchmark message"), None, site());
        });
    });

    let muted = Dispatcher::with_filter(vec![Box::new(MemorySink::new())], LevelFilter::none());

    group.bench_function("disabled_level_fast_path", |b| {
        b.iter(|| {
            muted.info(black_box("benchmark message"), None, site());
        });
    });

    group.finish();
}

fn bench_fan_out_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out_width");
    group.throughput(Throughput::Elements(1));

    for sinks in [1usize, 4, 8] {
        let logger = Dispatcher::new(
            (0..sinks)
                .map(|_| Box::new(MemorySink::new()) as Box<dyn Sink>)
                .collect(),
        );
        group.bench_function(format!("{}_sinks", sinks), |b| {
            b.iter(|| {
                logger.warning(black_box("fan out"), None, site());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render, bench_dispatch, bench_fan_out_width);
criterion_main!(benches);
