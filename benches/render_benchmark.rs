//! Performance benchmarks for dashboard rendering
//!
//! Measures full-frame render time as the trend list grows.
//! Run with: cargo bench

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ratatui::{backend::TestBackend, Terminal};
use trendboard::adapters::MockHttpClient;
use trendboard::app::App;
use trendboard::backend::BackendClient;
use trendboard::models::{ContentItem, GeneratedContentBundle, Trend};
use trendboard::startup::DashboardConfig;
use trendboard::ui;
use trendboard::ui::dashboard::trend_list::trend_row;

/// App with `count` trends, every third one selected, and a small bundle
fn app_with_trends(count: usize) -> App {
    let backend = BackendClient::with_http("http://bench.test", Arc::new(MockHttpClient::new()));
    let mut app = App::with_backend(DashboardConfig::new(), backend);

    let trends: Vec<Trend> = (0..count)
        .map(|i| {
            Trend::new(format!("t{}", i), format!("Trend headline number {} with some words", i))
                .with_source(if i % 2 == 0 { "reddit" } else { "google_trends" })
                .with_score((i * 37) as i64)
        })
        .collect();
    app.trends.replace(trends);
    for i in (0..count).step_by(3) {
        app.toggle_trend(&format!("t{}", i));
    }

    let mut bundle = GeneratedContentBundle::default();
    bundle.by_platform.insert(
        "telegram".to_string(),
        (0..5)
            .map(|i| ContentItem::new(format!("c{}", i), format!("Post {}", i), "Body line\nSecond line"))
            .collect(),
    );
    app.composer.replace_bundle(bundle);
    app
}

/// Benchmark a full dashboard frame
fn bench_dashboard_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard_frame");

    for count in [0, 10, 50, 200, 1000].iter() {
        let mut app = app_with_trends(*count);
        let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();
        group.throughput(Throughput::Elements(*count as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_trends", count)),
            count,
            |b, _| {
                b.iter(|| {
                    terminal.draw(|frame| ui::render(frame, &mut app)).unwrap();
                    black_box(app.hit_areas.len())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark row formatting alone
fn bench_trend_row(c: &mut Criterion) {
    let trend = Trend::new("t1", "A fairly long trend headline that will need truncating at some widths")
        .with_source("youtube")
        .with_score(1_234_567);

    let mut group = c.benchmark_group("trend_row");
    for width in [40usize, 80, 160].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(width), width, |b, width| {
            b.iter(|| black_box(trend_row(black_box(&trend), true, *width, 70)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dashboard_frame, bench_trend_row);
criterion_main!(benches);
