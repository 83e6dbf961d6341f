//! Key discovery performance benchmarks.
//!
//! Measures the full pipeline (dedup, weighting, reduction) on generated tables.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use keydecomp::{Table, find_minimal_key};

/// Generate a table whose key is the pair of the first two columns, padded
/// with low-cardinality filler columns.
fn generate_table(rows: usize, filler_columns: usize) -> Table {
    let mut headers = vec!["site".to_string(), "visit".to_string()];
    headers.extend((0..filler_columns).map(|i| format!("attr_{i}")));

    let data: Vec<Vec<String>> = (0..rows)
        .map(|row| {
            let mut values = vec![format!("S{:04}", row / 4), (row % 4).to_string()];
            values.extend((0..filler_columns).map(|i| ((row + i) % 3).to_string()));
            values
        })
        .collect();

    Table::from_text(headers, data)
}

/// Benchmark tall tables with a fixed width.
fn bench_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("rows");

    for rows in [100, 1_000, 10_000].iter() {
        let table = generate_table(*rows, 8);
        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("find_minimal_key", rows), &table, |b, t| {
            b.iter(|| find_minimal_key(black_box(t)).unwrap())
        });
    }

    group.finish();
}

/// Benchmark wide tables, where the reducer runs the most steps.
fn bench_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("columns");

    for width in [10, 50, 200].iter() {
        let table = generate_table(500, *width);
        group.bench_with_input(BenchmarkId::new("find_minimal_key", width), &table, |b, t| {
            b.iter(|| find_minimal_key(black_box(t)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rows, bench_columns);
criterion_main!(benches);
