//! Bar lifecycle and item placement.
//!
//! One [`DockUi`] owns every bar's persistent state, keyed by a stable hash
//! of the bar label. The frame protocol is strict:
//!
//! ```text
//! begin_bar ── true ──► bar_item × N ──► end_bar
//!      │                                   ▲
//!      └────────────── false ──────────────┘   (end_bar is always safe)
//! ```
//!
//! Item growth is a pure function of the pointer distance and the bar's
//! engagement ramp; the only memory the effect needs is one remembered size
//! per item slot so a freshly engaged frame starts from where the item
//! actually was.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use crate::animation::HoverRamp;
use crate::config::{DockConfig, DockFlags};
use crate::effect;
use crate::layout::{Axis, LayoutFrame, Rect, Vec2};

/// Stable identifier for a bar, derived from its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BarId(u64);

impl BarId {
    /// Derives the identifier for a label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        label.hash(&mut hasher);
        Self(hasher.finish())
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Persistent state of one bar.
///
/// Created implicitly the first time its label is used and kept for the life
/// of the registry. A bar that is not invoked for a frame simply freezes.
#[derive(Debug, Clone)]
pub struct BarState {
    /// Display label, also the identity key.
    label: String,
    /// Main axis recorded this frame.
    axis: Axis,
    /// Flags recorded this frame.
    flags: DockFlags,
    /// Items declared so far this frame.
    item_index: usize,
    /// Engagement ramp.
    ramp: HoverRamp,
    /// Last known pointer coordinate along the main axis.
    pointer_main: f32,
    /// Remembered size per item slot, in declaration order. A slot that was
    /// never written reads as the normal size.
    slots: Vec<f32>,
    /// Config snapshot: item size at rest.
    normal_size: f32,
    /// Config snapshot: item size at full engagement.
    hovered_size: f32,
    /// Config snapshot: cross-axis anchor, clamped to [0, 1].
    anchor_cross: f32,
    /// Config snapshot: bell localization.
    effect_strength: f32,
    /// Container rectangle placed this frame. Next frame's hover test runs
    /// against it.
    window: Rect,
    /// Main-axis content extent produced last frame.
    content_main: f32,
}

impl BarState {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_owned(),
            axis: Axis::Horizontal,
            flags: DockFlags::NONE,
            item_index: 0,
            ramp: HoverRamp::new(),
            pointer_main: 0.0,
            slots: Vec::new(),
            normal_size: 0.0,
            hovered_size: 0.0,
            anchor_cross: 0.0,
            effect_strength: 0.0,
            window: Rect::ZERO,
            content_main: 0.0,
        }
    }

    /// Remembered size of a slot, falling back to the normal size.
    fn slot(&self, index: usize) -> f32 {
        let size = self.slots.get(index).copied().unwrap_or(0.0);
        if size <= 0.0 {
            self.normal_size
        } else {
            size
        }
    }

    fn set_slot(&mut self, index: usize, size: f32) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, 0.0);
        }
        self.slots[index] = size;
    }

    /// Returns the bar label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the main axis recorded this frame.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns the flags recorded this frame.
    #[must_use]
    pub const fn flags(&self) -> DockFlags {
        self.flags
    }

    /// Returns the engagement ramp value.
    #[must_use]
    pub const fn ramp(&self) -> f32 {
        self.ramp.value()
    }

    /// Returns how many items the bar declared this frame.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_index
    }

    /// Returns the remembered per-slot sizes in declaration order.
    #[must_use]
    pub fn slot_sizes(&self) -> &[f32] {
        &self.slots
    }

    /// Returns the container rectangle placed this frame.
    #[must_use]
    pub const fn window(&self) -> Rect {
        self.window
    }

    /// Returns the normal item size snapshot.
    #[must_use]
    pub const fn normal_size(&self) -> f32 {
        self.normal_size
    }

    /// Returns the hovered item size snapshot.
    #[must_use]
    pub const fn hovered_size(&self) -> f32 {
        self.hovered_size
    }

    /// Returns the cross-axis anchor snapshot.
    #[must_use]
    pub const fn anchor_cross(&self) -> f32 {
        self.anchor_cross
    }

    /// Returns the bell localization snapshot.
    #[must_use]
    pub const fn effect_strength(&self) -> f32 {
        self.effect_strength
    }

    /// Returns the main-axis content extent recorded at the last `end_bar`.
    #[must_use]
    pub const fn content_extent(&self) -> f32 {
        self.content_main
    }
}

/// Application-owned dock registry and frame protocol.
///
/// Holds every bar's persistent state plus the readouts of the most recent
/// [`DockUi::bar_item`] call.
#[derive(Debug, Default)]
pub struct DockUi {
    /// Bar states by identity.
    bars: HashMap<BarId, BarState>,
    /// Registration order, for stable enumeration.
    order: Vec<BarId>,
    /// The bar currently between `begin_bar` and `end_bar`.
    current: Option<BarId>,
    /// Size computed by the most recent item call.
    item_size: f32,
    /// Scale computed by the most recent item call.
    item_scale: f32,
    /// Draw rectangle of the most recent item call.
    item_rect: Rect,
}

impl DockUi {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a bar for this frame.
    ///
    /// Returns true if the bar is open; the caller then declares items with
    /// [`Self::bar_item`] and closes with [`Self::end_bar`]. On false the
    /// caller skips items but may still call `end_bar` unconditionally.
    ///
    /// Orientation must be exactly one of horizontal or vertical, and
    /// `normal_size` must be positive; both are debug assertions.
    pub fn begin_bar(
        &mut self,
        label: &str,
        flags: DockFlags,
        config: &DockConfig,
        frame: &mut LayoutFrame,
    ) -> bool {
        debug_assert!(self.current.is_none(), "begin_bar while a bar is open");
        debug_assert!(config.normal_size > 0.0, "normal_size must be positive");
        let axis = flags.axis();

        if flags.contains(DockFlags::HIDDEN) {
            return false;
        }

        let id = BarId::from_label(label);
        if !self.bars.contains_key(&id) {
            tracing::debug!(label, "dock bar registered");
            self.bars.insert(id, BarState::new(label));
            self.order.push(id);
        }
        let Some(state) = self.bars.get_mut(&id) else {
            return false;
        };

        state.axis = axis;
        state.flags = flags;
        state.item_index = 0;
        state.normal_size = config.normal_size;
        state.hovered_size = config.hovered_size;
        state.anchor_cross = axis.cross_of(config.anchor).clamp(0.0, 1.0);
        state.effect_strength = config.effect_strength;

        // Hover test against the rect placed last frame, then one ramp step.
        let engaged = state.window.contains(frame.pointer.pos());
        let ramp = state.ramp.advance(engaged, config.anim_step);
        tracing::trace!(label, ramp, engaged, "hover ramp");

        // Predicted footprint: last frame's content on the main axis, the
        // ramped bar size on the cross axis, padding on both.
        let pad = frame.style.window_padding;
        let cross = effect::bar_size(config.normal_size, config.hovered_size, ramp);
        let footprint = axis.pack(
            state.content_main + axis.main_of(pad) * 2.0,
            cross + axis.cross_of(pad) * 2.0,
        );

        // Anchored placement, floored to whole pixels.
        let anchor = config.anchor.clamp_unit();
        let pos = (frame.viewport.min() + (frame.viewport.size() - footprint) * anchor).floor();
        state.window = Rect::from_pos_size(pos, footprint);

        frame.open_window(state.window);
        self.current = Some(id);
        true
    }

    /// Declares the next item of the open bar.
    ///
    /// Returns false when the container cannot render; the caller must skip
    /// the item body. On true, the size/scale/rect readouts are valid until
    /// the next dock call.
    pub fn bar_item(&mut self, frame: &mut LayoutFrame) -> bool {
        debug_assert!(self.current.is_some(), "bar_item outside begin_bar/end_bar");
        let Some(id) = self.current else {
            return false;
        };
        if frame.skip_items() {
            return false;
        }
        let Some(state) = self.bars.get_mut(&id) else {
            return false;
        };

        let axis = state.axis;
        let index = state.item_index;
        let remembered = state.slot(index);

        if state.window.contains(frame.pointer.pos()) {
            state.pointer_main = axis.main_of(frame.pointer.pos());
        }

        let mut size = state.normal_size;
        if !state.ramp.is_idle() {
            // Distance signal: pointer offset from the item's estimated
            // center, normalized by the container extent.
            let extent = axis.main_of(state.window.size());
            let center = axis.main_of(frame.cursor()) + remembered * 0.5;
            let signal = if extent > 0.0 {
                (state.pointer_main - center) / extent
            } else {
                0.0
            };
            size = effect::hover_size(
                signal,
                state.normal_size,
                state.hovered_size,
                state.effect_strength,
                state.ramp.value(),
            );

            // Pin the cross-axis anchor as this item deviates from the
            // ramped bar size.
            let bar_cross =
                effect::bar_size(state.normal_size, state.hovered_size, state.ramp.value());
            let pad_cross = axis.cross_of(frame.style.window_padding);
            let offset = ((bar_cross - size) * state.anchor_cross + pad_cross).floor();
            frame.set_cursor_cross(axis, axis.cross_of(state.window.min()) + offset);
        }

        self.item_rect = Rect::from_pos_size(frame.cursor(), Vec2::new(size, size));
        frame.advance_main(axis, size + frame.style.item_spacing);

        state.set_slot(index, size);
        state.item_index = index + 1;
        self.item_size = size;
        self.item_scale = size / state.normal_size;
        true
    }

    /// Closes the bar opened this frame and records its content extent.
    ///
    /// Safe to call even when `begin_bar` returned false.
    pub fn end_bar(&mut self, frame: &mut LayoutFrame) {
        let Some(id) = self.current.take() else {
            return;
        };
        if let Some(state) = self.bars.get_mut(&id) {
            let axis = state.axis;
            let origin =
                axis.main_of(state.window.min()) + axis.main_of(frame.style.window_padding);
            let mut extent = axis.main_of(frame.cursor()) - origin;
            if state.item_index > 0 {
                extent -= frame.style.item_spacing;
            }
            state.content_main = extent.max(0.0);
        }
        frame.close_window();
    }

    /// Size of the most recent item. Valid immediately after a successful
    /// [`Self::bar_item`].
    #[must_use]
    pub const fn item_size(&self) -> f32 {
        self.item_size
    }

    /// Scale (size over normal size) of the most recent item. Valid
    /// immediately after a successful [`Self::bar_item`].
    #[must_use]
    pub const fn item_scale(&self) -> f32 {
        self.item_scale
    }

    /// Draw rectangle of the most recent item. Valid immediately after a
    /// successful [`Self::bar_item`].
    #[must_use]
    pub const fn item_rect(&self) -> Rect {
        self.item_rect
    }

    /// Looks up a bar's state by label.
    #[must_use]
    pub fn bar(&self, label: &str) -> Option<&BarState> {
        self.bars.get(&BarId::from_label(label))
    }

    /// Enumerates bar states in registration order.
    pub fn bars(&self) -> impl Iterator<Item = &BarState> {
        self.order.iter().filter_map(|id| self.bars.get(id))
    }

    /// Returns how many bars are registered.
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.order.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::DockStyle;

    fn test_frame() -> LayoutFrame {
        LayoutFrame::new(Rect::new(0.0, 0.0, 1280.0, 720.0), DockStyle::default())
    }

    fn run_frame(
        ui: &mut DockUi,
        frame: &mut LayoutFrame,
        config: &DockConfig,
        pointer: (f32, f32),
        items: usize,
    ) -> Vec<f32> {
        frame.begin_frame();
        frame.pointer.set_pos(pointer.0, pointer.1);
        let mut sizes = Vec::new();
        if ui.begin_bar("dock", DockFlags::HORIZONTAL, config, frame) {
            for _ in 0..items {
                assert!(ui.bar_item(frame));
                sizes.push(ui.item_size());
            }
        }
        ui.end_bar(frame);
        sizes
    }

    #[test]
    fn test_idle_bar_emits_normal_size_exactly() {
        let mut ui = DockUi::new();
        let mut frame = test_frame();
        let config = DockConfig::default();

        // Pointer far away: ramp stays at rest, every item is normal size.
        let sizes = run_frame(&mut ui, &mut frame, &config, (10.0, 10.0), 5);
        assert_eq!(sizes, vec![40.0; 5]);
        assert_eq!(ui.item_scale(), 1.0);
    }

    #[test]
    fn test_registration_is_implicit_and_stable() {
        let mut ui = DockUi::new();
        let mut frame = test_frame();
        let config = DockConfig::default();

        run_frame(&mut ui, &mut frame, &config, (0.0, 0.0), 3);
        run_frame(&mut ui, &mut frame, &config, (0.0, 0.0), 3);

        assert_eq!(ui.bar_count(), 1);
        let bar = ui.bar("dock").expect("bar registered on first use");
        assert_eq!(bar.item_count(), 3);
        assert_eq!(bar.label(), "dock");
    }

    #[test]
    fn test_slots_persist_between_frames() {
        let mut ui = DockUi::new();
        let mut frame = test_frame();
        let config = DockConfig::default();

        // Frame 1 settles the footprint; afterwards park the pointer on the
        // bar until the ramp saturates.
        run_frame(&mut ui, &mut frame, &config, (0.0, 0.0), 4);
        let center = ui.bar("dock").expect("registered").window().center();
        for _ in 0..12 {
            run_frame(&mut ui, &mut frame, &config, (center.x, center.y), 4);
        }

        let bar = ui.bar("dock").expect("registered");
        assert!(bar.ramp() >= 1.0);
        let grown: Vec<f32> = bar.slot_sizes().to_vec();
        assert!(grown.iter().any(|&s| s > 40.0), "some item grew: {grown:?}");

        // The next frame reads those sizes back as slot memory.
        run_frame(&mut ui, &mut frame, &config, (center.x, center.y), 4);
        let bar = ui.bar("dock").expect("registered");
        for (slot, prev) in bar.slot_sizes().iter().zip(&grown) {
            assert!((slot - prev).abs() < 20.0);
        }
    }

    #[test]
    fn test_hidden_bar_returns_false_and_freezes_state() {
        let mut ui = DockUi::new();
        let mut frame = test_frame();
        let config = DockConfig::default();

        run_frame(&mut ui, &mut frame, &config, (0.0, 0.0), 2);
        let before = ui.bar("dock").expect("registered").clone();

        frame.begin_frame();
        let open = ui.begin_bar(
            "dock",
            DockFlags::HORIZONTAL | DockFlags::HIDDEN,
            &config,
            &mut frame,
        );
        assert!(!open);
        ui.end_bar(&mut frame);

        let after = ui.bar("dock").expect("registered");
        assert_eq!(after.ramp(), before.ramp());
        assert_eq!(after.window(), before.window());
    }

    #[test]
    fn test_end_bar_without_begin_is_a_no_op() {
        let mut ui = DockUi::new();
        let mut frame = test_frame();
        frame.begin_frame();
        ui.end_bar(&mut frame);
        assert_eq!(ui.bar_count(), 0);
    }

    #[test]
    fn test_content_extent_excludes_trailing_spacing() {
        let mut ui = DockUi::new();
        let mut frame = test_frame();
        let config = DockConfig::default();

        run_frame(&mut ui, &mut frame, &config, (0.0, 0.0), 3);
        let bar = ui.bar("dock").expect("registered");

        // Three idle items: 3 sizes plus 2 gaps.
        let expected = 3.0 * 40.0 + 2.0 * frame.style.item_spacing;
        assert!((bar.content_extent() - expected).abs() < 0.001);
    }
}
