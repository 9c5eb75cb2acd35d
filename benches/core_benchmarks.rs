//! Benchmarks for blogdash-core formatting, pagination and decoding

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use blogdash_core::utils::{format_count, format_long_date, format_short_date, reading_time_minutes};
use blogdash_core::{PageEnvelope, Post, page_window};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Benchmark the page-button window across a long listing
fn bench_page_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_window");

    for total in [1_u32, 5, 12, 1_000] {
        group.bench_with_input(BenchmarkId::new("all_pages", total), &total, |b, &total| {
            b.iter(|| {
                (1..=total)
                    .map(|current| page_window(black_box(current), total))
                    .collect::<Vec<_>>()
            });
        });
    }

    group.finish();
}

/// Benchmark display formatting used by every table row
fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    let timestamps = [
        Some("2024-01-15T10:30:00Z"),
        Some("2024-01-15T10:30:00.123+02:00"),
        Some("2024-03-01"),
        Some("not a date"),
        None,
    ];

    group.bench_function("format_count", |b| {
        b.iter(|| format_count(black_box(1_234_567_890)));
    });

    group.throughput(Throughput::Elements(timestamps.len() as u64));
    group.bench_function("short_dates", |b| {
        b.iter(|| timestamps.iter().map(|ts| format_short_date(*ts)).collect::<Vec<_>>());
    });
    group.bench_function("long_dates", |b| {
        b.iter(|| timestamps.iter().map(|ts| format_long_date(*ts)).collect::<Vec<_>>());
    });

    let article = "lorem ipsum dolor sit amet ".repeat(2_000);
    group.bench_function("reading_time", |b| {
        b.iter(|| reading_time_minutes(Some(black_box(&article))));
    });

    group.finish();
}

/// Benchmark decoding a full page envelope
fn bench_envelope_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("envelope_decoding");

    for size in [10_usize, 100] {
        let posts: Vec<serde_json::Value> = (0..size)
            .map(|i| {
                serde_json::json!({
                    "_id": format!("post-{i}"),
                    "title": format!("Post {i}"),
                    "content": "<p>body</p>",
                    "status": if i % 3 == 0 { "published" } else { "draft" },
                    "createdAt": "2024-01-15T10:30:00Z",
                    "views": i,
                    "tags": ["rust", "leptos"]
                })
            })
            .collect();
        let body = serde_json::json!({
            "data": posts,
            "pagination": {"total": size, "totalPages": 1}
        })
        .to_string();

        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(BenchmarkId::new("posts", size), &body, |b, body| {
            b.iter(|| serde_json::from_str::<PageEnvelope<Post>>(black_box(body)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_page_window,
    bench_formatting,
    bench_envelope_decoding
);
criterion_main!(benches);
