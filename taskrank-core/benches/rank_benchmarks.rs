//! Criterion benchmarks for ranking task batches.
//!
//! Measures scoring plus sorting across batch sizes (100, 1000, 10000 tasks).
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package taskrank-core
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use serde_json::{Value, json};
use taskrank_core::Ranker;

/// Batch sizes to benchmark.
const BATCH_SIZES: &[usize] = &[100, 1_000, 10_000];

/// Build a deterministic batch mixing dated, undated and blocked tasks.
fn build_batch(size: usize) -> Vec<Value> {
    (0..size)
        .map(|index| {
            let importance = index % 12;
            let hours = index % 9;
            let dependencies: Vec<usize> = (0..index % 4).collect();
            if index % 5 == 0 {
                json!({
                    "title": format!("task-{index}"),
                    "importance": importance,
                    "estimated_hours": hours,
                    "dependencies": dependencies,
                })
            } else {
                let day = index % 28 + 1;
                json!({
                    "title": format!("task-{index}"),
                    "due_date": format!("2024-04-{day:02}"),
                    "importance": importance,
                    "estimated_hours": hours,
                    "dependencies": dependencies,
                })
            }
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let today = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap_or(NaiveDate::MIN);
    let ranker = Ranker::with_defaults();

    for &size in BATCH_SIZES {
        let batch = build_batch(size);

        #[expect(
            clippy::as_conversions,
            reason = "Batch sizes are small constants"
        )]
        let throughput_size = size as u64;
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("tasks", size), &batch, |b, tasks| {
            b.iter(|| ranker.rank(tasks, today, None));
        });
        group.bench_with_input(BenchmarkId::new("top3", size), &batch, |b, tasks| {
            b.iter(|| ranker.top(tasks, today, 3));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
