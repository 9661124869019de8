//! Display-series benchmarks: payload parsing, downsampling and labeling.
//!
//! Run with: `cargo bench --package suiwatch-bench`

use chrono::Utc;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use suiwatch_bench::{SeriesShape, market_chart_payload, synthetic_series};
use suiwatch_chart::{DEFAULT_POINT_BUDGET, build_display_series_in, downsample};
use suiwatch_fetch::parse_series;
use suiwatch_types::Timeframe;

fn parse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_series");

    for timeframe in Timeframe::all() {
        let shape = SeriesShape::for_timeframe(*timeframe);
        let payload = market_chart_payload(&synthetic_series(shape));
        group.throughput(Throughput::Bytes(payload.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(timeframe),
            &payload,
            |b, payload| b.iter(|| parse_series(black_box(payload))),
        );
    }
    group.finish();
}

fn downsample_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("downsample");

    for timeframe in Timeframe::all() {
        let series = synthetic_series(SeriesShape::for_timeframe(*timeframe));
        group.throughput(Throughput::Elements(series.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(timeframe),
            &series,
            |b, series| b.iter(|| downsample(black_box(series), DEFAULT_POINT_BUDGET)),
        );
    }
    group.finish();
}

fn display_series_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_display_series");

    for timeframe in Timeframe::all() {
        let series = synthetic_series(SeriesShape::for_timeframe(*timeframe));
        group.throughput(Throughput::Elements(series.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(timeframe),
            &series,
            |b, series| {
                b.iter(|| {
                    build_display_series_in(
                        black_box(series),
                        *timeframe,
                        DEFAULT_POINT_BUDGET,
                        &Utc,
                    )
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    parse_benchmark,
    downsample_benchmark,
    display_series_benchmark
);
criterion_main!(benches);
