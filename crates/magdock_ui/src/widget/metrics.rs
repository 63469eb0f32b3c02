//! Dock diagnostics panel.
//!
//! Renders every registered bar's configuration and per-slot sizes as a
//! monospace table. Debugging aid, not load-bearing.

use crate::layout::{Axis, LayoutFrame, Rect, Vec2};
use crate::render::{RenderCommand, RenderList};
use crate::style::Color;
use crate::widget::DockUi;

/// Fixed panel width in pixels.
const PANEL_WIDTH: f32 = 380.0;

/// Renders the dock metrics panel when the toggle is set.
///
/// The toggle is a reference so the host can flip it from its own UI; the
/// panel itself never mutates it.
pub fn show_metrics(opened: &mut bool, ui: &DockUi, frame: &LayoutFrame, out: &mut RenderList) {
    if !*opened {
        return;
    }

    let style = &frame.style;
    let line = style.font_size + 2.0;

    // One title row, then per bar: header, seven field rows, one per slot.
    let mut rows = 1;
    for bar in ui.bars() {
        rows += 8 + bar.slot_sizes().len();
    }

    let pad = style.window_padding;
    #[allow(clippy::cast_precision_loss)]
    let size = Vec2::new(PANEL_WIDTH, pad.y * 2.0 + line * rows as f32);
    let pos = frame.viewport.min() + Vec2::new(16.0, 16.0);
    let bounds = Rect::from_pos_size(pos, size);

    out.push(RenderCommand::Rect {
        bounds,
        color: style.panel_background,
        corner_radius: style.corner_radius,
    });
    out.push(RenderCommand::RectOutline {
        bounds,
        color: style.panel_outline,
        width: 1.0,
        corner_radius: style.corner_radius,
    });

    let x = pos.x + pad.x;
    let mut y = pos.y + pad.y;
    push_row(out, x, &mut y, line, "DOCK METRICS", style.panel_outline, style.font_size);

    for bar in ui.bars() {
        let axis = match bar.axis() {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        };
        push_row(
            out,
            x,
            &mut y,
            line,
            &format!("bar '{}' [{axis}]", bar.label()),
            style.text,
            style.font_size,
        );

        let window = bar.window();
        let fields = [
            format!("  items     {}", bar.item_count()),
            format!("  anchor    {:.3}", bar.anchor_cross()),
            format!("  ramp      {:.3}", bar.ramp()),
            format!("  normal    {:.1}", bar.normal_size()),
            format!("  hovered   {:.1}", bar.hovered_size()),
            format!("  strength  {:.2}", bar.effect_strength()),
            format!(
                "  window    {:.0},{:.0} {:.0}x{:.0}",
                window.x, window.y, window.width, window.height
            ),
        ];
        for field in fields {
            push_row(out, x, &mut y, line, &field, style.text_muted, style.font_size);
        }

        for (index, slot) in bar.slot_sizes().iter().enumerate() {
            push_row(
                out,
                x,
                &mut y,
                line,
                &format!("  slot {index:>2}   {slot:7.3}"),
                style.text_muted,
                style.font_size,
            );
        }
    }
}

fn push_row(
    out: &mut RenderList,
    x: f32,
    y: &mut f32,
    line: f32,
    text: &str,
    color: Color,
    font_size: f32,
) {
    out.push(RenderCommand::Text {
        text: text.to_owned(),
        x,
        y: *y,
        color,
        font_size,
    });
    *y += line;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DockConfig, DockFlags};
    use crate::style::DockStyle;

    fn drive_one_bar() -> (DockUi, LayoutFrame) {
        let mut ui = DockUi::new();
        let mut frame =
            LayoutFrame::new(Rect::new(0.0, 0.0, 1280.0, 720.0), DockStyle::default());
        frame.begin_frame();
        if ui.begin_bar("demo", DockFlags::HORIZONTAL, &DockConfig::default(), &mut frame) {
            for _ in 0..3 {
                assert!(ui.bar_item(&mut frame));
            }
        }
        ui.end_bar(&mut frame);
        (ui, frame)
    }

    #[test]
    fn test_closed_toggle_renders_nothing() {
        let (ui, frame) = drive_one_bar();
        let mut out = RenderList::new();
        let mut opened = false;

        show_metrics(&mut opened, &ui, &frame, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_open_panel_lists_every_slot() {
        let (ui, frame) = drive_one_bar();
        let mut out = RenderList::new();
        let mut opened = true;

        show_metrics(&mut opened, &ui, &frame, &mut out);

        let texts: Vec<&str> = out
            .commands()
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();

        assert!(texts.iter().any(|t| t.contains("bar 'demo'")));
        assert_eq!(texts.iter().filter(|t| t.contains("slot")).count(), 3);
    }
}
