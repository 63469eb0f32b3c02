//! Benchmark for the magnification hot path.
//!
//! TARGET: a 12-item bar costs well under a microsecond per frame.
//!
//! Run with: cargo bench --package magdock_ui --bench effect_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use magdock_ui::{effect, DockConfig, DockFlags, DockStyle, DockUi, LayoutFrame, Rect};

fn bench_bubble(c: &mut Criterion) {
    let mut group = c.benchmark_group("bubble");
    group.throughput(Throughput::Elements(256));
    group.bench_function("sweep_256", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for i in 0..256 {
                #[allow(clippy::cast_precision_loss)]
                let d = (i as f32 - 128.0) / 128.0;
                acc += effect::bubble(black_box(d), black_box(0.5));
            }
            acc
        });
    });
    group.finish();
}

fn bench_bar_frame(c: &mut Criterion) {
    let config = DockConfig::default();
    let mut ui = DockUi::new();
    let mut frame = LayoutFrame::new(Rect::new(0.0, 0.0, 1280.0, 720.0), DockStyle::default());

    // Warm up the registry and park the pointer on the bar so the ramp is
    // saturated and the full math path runs every item.
    for _ in 0..16 {
        frame.begin_frame();
        let center = ui
            .bar("bench")
            .map_or((640.0, 700.0), |b| (b.window().center().x, b.window().center().y));
        frame.pointer.set_pos(center.0, center.1);
        if ui.begin_bar("bench", DockFlags::HORIZONTAL, &config, &mut frame) {
            for _ in 0..12 {
                let _ = ui.bar_item(&mut frame);
            }
        }
        ui.end_bar(&mut frame);
    }

    let mut group = c.benchmark_group("bar_frame");
    group.throughput(Throughput::Elements(12));
    group.bench_function("hovered_12_items", |b| {
        b.iter(|| {
            frame.begin_frame();
            frame.pointer.set_pos(640.0, 700.0);
            if ui.begin_bar("bench", DockFlags::HORIZONTAL, &config, &mut frame) {
                for _ in 0..12 {
                    let _ = black_box(ui.bar_item(&mut frame));
                }
            }
            ui.end_bar(&mut frame);
            black_box(ui.item_size())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_bubble, bench_bar_frame);
criterion_main!(benches);
