//! # Dock Demo
//!
//! THE ARCHITECT'S CHALLENGE:
//!
//! Pointer approaches → bar engages → items swell under the cursor →
//! click lands on the magnified item → pointer leaves → bar settles.
//!
//! ALL WITHOUT A WINDOW.
//!
//! This binary drives four dock bars (bottom, top, left, right) through a
//! scripted pointer path, renders every frame into a command list, and
//! verifies the observable contract. It exits nonzero if any check fails.

mod config;

use std::path::PathBuf;

use config::DemoConfig;
use magdock_ui::{
    show_metrics, DockConfig, DockFlags, DockStyle, DockUi, LayoutFrame, Rect, RenderCommand,
    RenderList, Vec2,
};

/// Outcome of one bar's draw pass.
struct BarPass {
    /// Sizes emitted this frame, in item order.
    sizes: Vec<f32>,
    /// Item index hit by a click this frame, if any.
    clicked: Option<usize>,
}

/// Accumulated results of the scripted run.
struct DemoReport {
    /// Frames simulated.
    frames: u32,
    /// Highest ramp value the bottom bar reached.
    peak_ramp: f32,
    /// Bottom bar ramp after the pointer left.
    final_ramp: f32,
    /// Smallest item size observed.
    min_size: f32,
    /// Largest item size observed.
    max_size: f32,
    /// Sizes observed outside [normal, hovered].
    band_violations: u32,
    /// Worst distance of the bottom bar's bottom edge from the viewport edge.
    bottom_edge_drift: f32,
    /// Item index that received the scripted click.
    clicked_item: Option<usize>,
    /// Largest per-frame command count.
    peak_commands: usize,
    /// Largest per-frame vertex count after tessellation.
    peak_vertices: usize,
}

/// Draws one bar and its items, collecting sizes and click hits.
fn draw_bar(
    ui: &mut DockUi,
    frame: &mut LayoutFrame,
    list: &mut RenderList,
    label: &str,
    flags: DockFlags,
    dock: &DockConfig,
    items: usize,
) -> BarPass {
    let mut pass = BarPass {
        sizes: Vec::with_capacity(items),
        clicked: None,
    };

    if ui.begin_bar(label, flags, dock, frame) {
        if !flags.contains(DockFlags::NO_BACKGROUND) {
            let window = frame.window();
            list.push(RenderCommand::Rect {
                bounds: window,
                color: frame.style.bar_background,
                corner_radius: frame.style.corner_radius,
            });
            list.push(RenderCommand::RectOutline {
                bounds: window,
                color: frame.style.bar_outline,
                width: 1.0,
                corner_radius: frame.style.corner_radius,
            });
        }

        for index in 0..items {
            if !ui.bar_item(frame) {
                break;
            }
            let rect = ui.item_rect();
            #[allow(clippy::cast_possible_truncation)]
            list.push(RenderCommand::Icon {
                bounds: rect,
                icon_id: index as u32,
                color: frame.style.icon_tint,
            });
            pass.sizes.push(ui.item_size());
            if frame.pointer.clicked() && rect.contains(frame.pointer.pos()) {
                pass.clicked = Some(index);
            }
        }
    }
    ui.end_bar(frame);
    pass
}

/// Scripted pointer position for a frame: approach the bottom bar, sweep
/// along it (with one click mid-sweep), then leave.
fn pointer_script(frame_index: u32, total: u32, bar: Rect, view: Vec2) -> (Vec2, bool) {
    let approach_end = total / 4;
    let sweep_end = total * 3 / 4;
    let rest = Vec2::new(view.x * 0.5, view.y * 0.35);

    if frame_index < approach_end {
        #[allow(clippy::cast_precision_loss)]
        let t = frame_index as f32 / approach_end.max(1) as f32;
        let target = bar.center();
        return (rest + (target - rest) * t, false);
    }
    if frame_index < sweep_end {
        #[allow(clippy::cast_precision_loss)]
        let t = (frame_index - approach_end) as f32 / (sweep_end - approach_end).max(1) as f32;
        let x = bar.x + 20.0 + (bar.width - 40.0) * t;
        // A short burst of click edges around mid-sweep. Consecutive edges
        // travel less than an item pitch, so at least one lands on an item.
        let mid = (approach_end + sweep_end) / 2;
        let press = frame_index.abs_diff(mid) <= 6 && frame_index % 2 == 0;
        return (Vec2::new(x, bar.center().y), press);
    }
    (rest, false)
}

/// Runs the scripted simulation.
fn run_demo(config: &DemoConfig) -> DemoReport {
    let viewport = Rect::new(0.0, 0.0, config.width, config.height);
    let mut ui = DockUi::new();
    let mut frame = LayoutFrame::new(viewport, DockStyle::default());
    let mut list = RenderList::new();
    let mut metrics_open = config.show_metrics;

    let bottom = config.dock.with_anchor(Vec2::new(0.5, 1.0));
    let top = config.dock.with_anchor(Vec2::new(0.5, 0.0));
    let left = config.dock.with_anchor(Vec2::new(0.0, 0.5));
    let right = config.dock.with_anchor(Vec2::new(1.0, 0.5));

    let lo = config.dock.normal_size.min(config.dock.hovered_size);
    let hi = config.dock.normal_size.max(config.dock.hovered_size);

    let mut report = DemoReport {
        frames: config.frames,
        peak_ramp: 0.0,
        final_ramp: 0.0,
        min_size: f32::INFINITY,
        max_size: f32::NEG_INFINITY,
        band_violations: 0,
        bottom_edge_drift: 0.0,
        clicked_item: None,
        peak_commands: 0,
        peak_vertices: 0,
    };

    for frame_index in 0..config.frames {
        // The script follows the bar placed last frame; the first frame has
        // no placement yet and aims at the viewport's bottom center.
        let bar_rect = ui.bar("bottom").map_or(
            Rect::new(viewport.width * 0.5, viewport.height - 1.0, 1.0, 1.0),
            magdock_ui::BarState::window,
        );
        let (pointer, press) = pointer_script(frame_index, config.frames, bar_rect, viewport.size());

        frame.begin_frame();
        frame.pointer.set_pos(pointer.x, pointer.y);
        if press {
            frame.pointer.press();
        } else {
            frame.pointer.release();
        }
        list.begin_frame();

        let passes = [
            draw_bar(&mut ui, &mut frame, &mut list, "bottom", DockFlags::HORIZONTAL, &bottom, config.items),
            draw_bar(&mut ui, &mut frame, &mut list, "top", DockFlags::HORIZONTAL, &top, config.items),
            draw_bar(&mut ui, &mut frame, &mut list, "left", DockFlags::VERTICAL, &left, config.items),
            draw_bar(
                &mut ui,
                &mut frame,
                &mut list,
                "right",
                DockFlags::VERTICAL | DockFlags::NO_BACKGROUND,
                &right,
                config.items,
            ),
        ];

        show_metrics(&mut metrics_open, &ui, &frame, &mut list);

        for pass in &passes {
            for &size in &pass.sizes {
                report.min_size = report.min_size.min(size);
                report.max_size = report.max_size.max(size);
                if size < lo - 1e-3 || size > hi + 1e-3 {
                    report.band_violations += 1;
                }
            }
        }
        if let Some(index) = passes[0].clicked {
            report.clicked_item = Some(index);
        }

        if let Some(bar) = ui.bar("bottom") {
            report.peak_ramp = report.peak_ramp.max(bar.ramp());
            report.final_ramp = bar.ramp();
            let drift = (bar.window().bottom() - viewport.height).abs();
            report.bottom_edge_drift = report.bottom_edge_drift.max(drift);
        }

        report.peak_commands = report.peak_commands.max(list.len());
        report.peak_vertices = report.peak_vertices.max(list.tessellate().len());
    }

    report
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("magdock.toml"), PathBuf::from);

    let config = match DemoConfig::load(&path) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("config error: {error}");
            std::process::exit(2);
        }
    };

    let report = run_demo(&config);

    println!();
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                      DOCK DEMO RESULTS                           ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();
    println!("┌─ RUN ──────────────────────────────────────────────────────────┐");
    println!("│ Frames simulated:   {}                                        ", report.frames);
    println!("│ Bars driven:        4 (bottom, top, left, right)               ");
    println!("│ Peak commands:      {}                                        ", report.peak_commands);
    println!("│ Peak vertices:      {}                                        ", report.peak_vertices);
    println!("└────────────────────────────────────────────────────────────────┘");
    println!();
    println!("┌─ MAGNIFICATION ────────────────────────────────────────────────┐");
    println!("│ Peak ramp:          {:.3}                                      ", report.peak_ramp);
    println!("│ Final ramp:         {:.3}                                      ", report.final_ramp);
    println!("│ Smallest item:      {:.3}                                      ", report.min_size);
    println!("│ Largest item:       {:.3}                                      ", report.max_size);
    println!("│ Band violations:    {}                                        ", report.band_violations);
    println!("│ Bottom edge drift:  {:.3} px                                   ", report.bottom_edge_drift);
    match report.clicked_item {
        Some(index) => println!("│ Clicked item:       #{index}                                      "),
        None => println!("│ Clicked item:       none                                       "),
    }
    println!("└────────────────────────────────────────────────────────────────┘");
    println!();

    let checks = [
        ("sizes stayed in band", report.band_violations == 0),
        ("ramp saturated while hovered", (report.peak_ramp - 1.0).abs() < f32::EPSILON),
        ("ramp settled after leaving", report.final_ramp <= f32::EPSILON),
        ("anchored edge held (<= 1 px)", report.bottom_edge_drift <= 1.0),
        ("mid-sweep click landed", report.clicked_item.is_some()),
    ];

    let mut failed = false;
    for (name, ok) in checks {
        if ok {
            println!("✓ {name}");
        } else {
            println!("✗ {name}");
            failed = true;
        }
    }

    println!();
    if failed {
        println!("❌ DOCK DEMO FAILED");
        std::process::exit(1);
    }
    println!("✅ DOCK DEMO PASSED");
}
