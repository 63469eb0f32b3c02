//! Layout primitives and the per-frame layout context.
//!
//! The dock bar never reaches into a host GUI's internals. Everything it
//! needs from the surrounding frame (viewport, draw cursor, window region,
//! pointer, style metrics) travels through [`LayoutFrame`].

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::input::PointerState;
use crate::style::DockStyle;

/// 2D vector - positions, sizes, anchors.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
}

impl Vec2 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Converts to array.
    #[must_use]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Component-wise floor.
    #[must_use]
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    /// Clamps both components to [0, 1].
    #[must_use]
    pub fn clamp_unit(self) -> Self {
        Self::new(self.x.clamp(0.0, 1.0), self.y.clamp(0.0, 1.0))
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Component-wise product, used for anchor-weighted placement.
impl std::ops::Mul for Vec2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle from position and size vectors.
    #[must_use]
    pub const fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            width: size.x,
            height: size.y,
        }
    }

    /// Returns the top-left corner.
    #[must_use]
    pub const fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Returns the size.
    #[must_use]
    pub const fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Returns true if the rectangle has no renderable area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// The bar's main axis. Items flow along it; magnification distance is
/// measured along it; the bar breathes on the other (cross) axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Items flow left to right.
    #[default]
    Horizontal,
    /// Items flow top to bottom.
    Vertical,
}

impl Axis {
    /// Selects the main-axis channel of a vector.
    #[must_use]
    pub const fn main_of(self, v: Vec2) -> f32 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }

    /// Selects the cross-axis channel of a vector.
    #[must_use]
    pub const fn cross_of(self, v: Vec2) -> f32 {
        match self {
            Self::Horizontal => v.y,
            Self::Vertical => v.x,
        }
    }

    /// Builds a vector from main/cross channel values.
    #[must_use]
    pub const fn pack(self, main: f32, cross: f32) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(main, cross),
            Self::Vertical => Vec2::new(cross, main),
        }
    }
}

/// Per-frame layout context.
///
/// Owned by the application and handed to the dock calls each frame. Holds
/// the viewport, the style metrics, the pointer snapshot and the draw cursor
/// of whichever container is currently open.
#[derive(Debug, Clone)]
pub struct LayoutFrame {
    /// Viewport rectangle in screen coordinates.
    pub viewport: Rect,
    /// Style metrics (padding, spacing, palette).
    pub style: DockStyle,
    /// Pointer state for the current frame.
    pub pointer: PointerState,
    /// Current draw cursor in screen coordinates.
    cursor: Vec2,
    /// Rectangle of the container currently open.
    window: Rect,
    /// True while the open container cannot render items.
    skip_items: bool,
}

impl LayoutFrame {
    /// Creates a layout frame for the given viewport.
    #[must_use]
    pub fn new(viewport: Rect, style: DockStyle) -> Self {
        Self {
            viewport,
            style,
            pointer: PointerState::new(),
            cursor: Vec2::ZERO,
            window: Rect::ZERO,
            skip_items: true,
        }
    }

    /// Begins a new frame: rolls the pointer state over and forgets the
    /// previous frame's container.
    pub fn begin_frame(&mut self) {
        self.pointer.begin_frame();
        self.cursor = Vec2::ZERO;
        self.window = Rect::ZERO;
        self.skip_items = true;
    }

    /// Opens a container region and parks the cursor at its padded origin.
    pub(crate) fn open_window(&mut self, rect: Rect) {
        self.window = rect;
        self.cursor = rect.min() + self.style.window_padding;
        self.skip_items = rect.is_empty();
    }

    /// Closes the current container region.
    pub(crate) fn close_window(&mut self) {
        self.window = Rect::ZERO;
        self.cursor = Vec2::ZERO;
        self.skip_items = true;
    }

    /// Returns the current draw cursor.
    #[must_use]
    pub const fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Returns the rectangle of the open container.
    #[must_use]
    pub const fn window(&self) -> Rect {
        self.window
    }

    /// Returns true if the open container cannot render items.
    #[must_use]
    pub const fn skip_items(&self) -> bool {
        self.skip_items
    }

    /// Moves the cursor's cross-axis channel to an absolute coordinate.
    pub(crate) fn set_cursor_cross(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::Horizontal => self.cursor.y = value,
            Axis::Vertical => self.cursor.x = value,
        }
    }

    /// Advances the cursor's main-axis channel.
    pub(crate) fn advance_main(&mut self, axis: Axis, amount: f32) {
        match axis {
            Axis::Horizontal => self.cursor.x += amount,
            Axis::Vertical => self.cursor.y += amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(Vec2::new(50.0, 30.0)));
        assert!(!rect.contains(Vec2::new(5.0, 30.0)));
        assert!(!rect.contains(Vec2::new(50.0, 80.0)));
    }

    #[test]
    fn test_axis_channels() {
        let v = Vec2::new(3.0, 7.0);

        assert_eq!(Axis::Horizontal.main_of(v), 3.0);
        assert_eq!(Axis::Horizontal.cross_of(v), 7.0);
        assert_eq!(Axis::Vertical.main_of(v), 7.0);
        assert_eq!(Axis::Vertical.cross_of(v), 3.0);

        assert_eq!(Axis::Vertical.pack(7.0, 3.0), v);
    }

    #[test]
    fn test_frame_cursor_tracks_window() {
        let mut frame = LayoutFrame::new(Rect::new(0.0, 0.0, 800.0, 600.0), DockStyle::default());
        frame.begin_frame();

        frame.open_window(Rect::new(100.0, 500.0, 300.0, 80.0));
        let pad = frame.style.window_padding;
        assert_eq!(frame.cursor(), Vec2::new(100.0 + pad.x, 500.0 + pad.y));
        assert!(!frame.skip_items());

        frame.advance_main(Axis::Horizontal, 44.0);
        assert_eq!(frame.cursor().x, 100.0 + pad.x + 44.0);

        frame.set_cursor_cross(Axis::Horizontal, 510.0);
        assert_eq!(frame.cursor().y, 510.0);

        frame.close_window();
        assert!(frame.skip_items());
    }

    #[test]
    fn test_empty_window_skips_items() {
        let mut frame = LayoutFrame::new(Rect::new(0.0, 0.0, 800.0, 600.0), DockStyle::default());
        frame.begin_frame();
        frame.open_window(Rect::new(10.0, 10.0, 0.0, 40.0));
        assert!(frame.skip_items());
    }
}
