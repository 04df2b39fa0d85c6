// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the notification manager and reveal math.
//!
//! Measures the per-tick cost of:
//! - Advancing a stack of active notification lifecycles
//! - Evaluating reveal visibility over a page of sections

use criterion::{criterion_group, criterion_main, Criterion};
use iced_beacon::ui::notifications::{Kind, Manager};
use iced_beacon::ui::reveal::{Observer, Span};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Benchmark a tick over a busy stack of concurrent toasts.
fn bench_manager_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_lifecycle");

    let start = Instant::now();
    group.bench_function("tick_32_active", |b| {
        b.iter(|| {
            let mut manager = Manager::new();
            for i in 0..32 {
                manager.notify_at(
                    format!("toast-{i}"),
                    Kind::INFO,
                    start + Duration::from_millis(i * 10),
                );
            }
            // Sweep one full lifecycle in 100 ms ticks.
            for ms in (0..=3700).step_by(100) {
                black_box(manager.tick(start + Duration::from_millis(ms)));
            }
            black_box(&manager);
        });
    });

    group.finish();
}

/// Benchmark reveal evaluation across a long page.
fn bench_reveal_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_lifecycle");

    let spans: Vec<Span> = (0..64).map(|i| Span::new(i as f32 * 400.0, 400.0)).collect();
    let now = Instant::now();

    group.bench_function("reveal_update_64_sections", |b| {
        b.iter(|| {
            let mut observer = Observer::new(spans.clone());
            for step in 0..64 {
                black_box(observer.update(step as f32 * 400.0, 700.0, now));
            }
            black_box(observer.all_revealed());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_manager_tick, bench_reveal_update);
criterion_main!(benches);
