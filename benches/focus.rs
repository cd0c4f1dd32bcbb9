//! Benchmarks for the per-frame engine work.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(
    clippy::expect_used,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use filmstrip::engine::nearest_to_center;
use filmstrip::{EngineConfig, ImageSequence, InputEvent, ScrollFocusEngine, StripLayout};

const STRIP_SIZES: [usize; 4] = [12, 120, 1_200, 12_000];

fn open(count: usize) -> (ScrollFocusEngine, filmstrip::LoopToken) {
    let mut engine = ScrollFocusEngine::new(EngineConfig::default());
    let images = ImageSequence::from_paths((0..count).map(|i| format!("img_{i}.jpg")));
    let token = engine.open_view(images).expect("loop starts");
    engine.resize(1280.0);
    engine.set_thumb_container_extent(900.0);
    engine.set_layouts(
        StripLayout::uniform(count, 640.0, 16.0),
        StripLayout::uniform(count, 80.0, 8.0),
    );
    (engine, token)
}

/// Nearest-item search across strip sizes
fn bench_nearest_to_center(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_to_center");

    for count in STRIP_SIZES {
        let layout = StripLayout::uniform(count, 640.0, 16.0);
        let center_line = layout.content_extent() * 0.7;

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &layout, |b, layout| {
            b.iter(|| nearest_to_center(black_box(layout.items()), black_box(center_line)))
        });
    }

    group.finish();
}

/// One frame while the strip is gliding across items
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for count in STRIP_SIZES {
        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            let (mut engine, token) = open(count);
            let mut frame = 0u32;
            b.iter(|| {
                // keep the target moving so every tick does real work
                if frame % 30 == 0 {
                    engine.handle(InputEvent::Wheel { delta_y: 400.0 });
                }
                frame = frame.wrapping_add(1);
                black_box(engine.tick(token))
            })
        });
    }

    group.finish();
}

/// Open, select the last item and settle
fn bench_select_and_settle(c: &mut Criterion) {
    c.bench_function("select_and_settle_120", |b| {
        b.iter(|| {
            let (mut engine, token) = open(120);
            engine.select_index(119);
            while !engine.scroll().is_settled(0.5) {
                engine.tick(token).expect("loop is live");
            }
            black_box(engine.active_index())
        })
    });
}

criterion_group!(
    benches,
    bench_nearest_to_center,
    bench_tick,
    bench_select_and_settle,
);

criterion_main!(benches);
