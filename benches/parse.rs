//! Benchmarks for path data parsing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use pathdata::path::Scanner;
use pathdata::{parse_path, PathData, PathSink, SegmentParser};

const ICON: &str = "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm0 18\
                    c-4.41 0-8-3.59-8-8s3.59-8 8-8 8 3.59 8 8-3.59 8-8 8zm-1-13h2v6h-2zm0 8h2v2h-2z";

const ARCS: &str = "M10 80 A45 45 0 0 0 125 125 L125 80 Z a25 25 -30 0 1 50 -25 \
                    a25 50 -30 1 1 50 -25 a25 75 -30 0 0 50 -25 a25 100 -30 1 0 50 -25";

/// Sink that discards everything.
struct NullSink;

impl PathSink for NullSink {
    fn move_to(&mut self, x: f64, y: f64) {
        black_box((x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        black_box((x, y));
    }
    fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        black_box((x1, y1, x2, y2, x3, y3));
    }
    fn close(&mut self) {}
}

/// A long polyline in the compact relative form exporters like to write.
fn polyline(count: usize) -> String {
    let mut data = String::from("M0 0");
    for i in 0..count {
        let dx = (i % 7) as f64 * 0.5 + 0.25;
        let dy = -((i % 5) as f64) * 1.5;
        data.push_str(&format!("l{dx}{dy}"));
    }
    data
}

fn bench_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_numbers");

    let numbers = "12.5 -0.75 3e2 .5-.5 1000000 0.000001 42 -7.125e-3 9 8";
    group.throughput(Throughput::Bytes(numbers.len() as u64));
    group.bench_function("mixed", |b| {
        b.iter(|| {
            let mut scanner = Scanner::new(black_box(numbers));
            while black_box(scanner.parse_number()).is_ok() {}
        })
    });

    group.finish();
}

fn bench_segments(c: &mut Criterion) {
    let mut group = c.benchmark_group("segments");

    group.throughput(Throughput::Bytes(ICON.len() as u64));
    group.bench_function("icon", |b| {
        b.iter(|| SegmentParser::new(black_box(ICON)).count())
    });

    group.finish();
}

fn bench_parse_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_path");

    for (name, data) in [("icon", ICON), ("arcs", ARCS)] {
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("null_sink", name), &data, |b, data| {
            b.iter(|| parse_path(black_box(*data), &mut NullSink))
        });
        group.bench_with_input(BenchmarkId::new("path_data", name), &data, |b, data| {
            b.iter(|| PathData::parse(black_box(*data)))
        });
    }

    for count in [100, 1000, 10000] {
        let data = polyline(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("polyline", count), &data, |b, data| {
            b.iter(|| parse_path(black_box(data), &mut NullSink))
        });
    }

    group.finish();
}

fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("write");

    let path = PathData::parse(ARCS).unwrap_or_default();
    group.bench_function("shortest", |b| b.iter(|| black_box(&path).to_string()));
    group.bench_function("precision_3", |b| {
        let options = pathdata::WriteOptions::with_precision(3);
        b.iter(|| black_box(&path).to_svg_string(&options))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_numbers,
    bench_segments,
    bench_parse_path,
    bench_write
);
criterion_main!(benches);
