//! Styling for the dock and its diagnostics panel.
//!
//! Dark surfaces with one neon accent. Metrics text assumes a monospace
//! backend font.

use crate::layout::Vec2;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Neon cyan accent.
    pub const NEON_CYAN: Self = Self::rgba(0.2, 0.9, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Linearly interpolates between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::rgba(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Style metrics and palette for the dock.
///
/// `window_padding` and `item_spacing` are the two layout inputs the bar
/// math consumes; the rest is palette for the caller's renderer and the
/// metrics panel.
#[derive(Debug, Clone)]
pub struct DockStyle {
    /// Padding between the bar edge and its items.
    pub window_padding: Vec2,
    /// Gap between consecutive items on the main axis.
    pub item_spacing: f32,
    /// Font size used for metrics text.
    pub font_size: f32,
    /// Bar background color.
    pub bar_background: Color,
    /// Bar outline color.
    pub bar_outline: Color,
    /// Icon tint.
    pub icon_tint: Color,
    /// Diagnostics panel background.
    pub panel_background: Color,
    /// Diagnostics panel outline.
    pub panel_outline: Color,
    /// Primary text color.
    pub text: Color,
    /// Muted text color.
    pub text_muted: Color,
    /// Corner radius for bar and panel surfaces.
    pub corner_radius: f32,
}

impl Default for DockStyle {
    fn default() -> Self {
        Self {
            window_padding: Vec2::new(8.0, 8.0),
            item_spacing: 4.0,
            font_size: 14.0,
            bar_background: Color::rgba(0.05, 0.05, 0.08, 0.9),
            bar_outline: Color::rgba(0.2, 0.3, 0.2, 0.8),
            icon_tint: Color::WHITE,
            panel_background: Color::rgba(0.03, 0.03, 0.05, 0.95),
            panel_outline: Color::NEON_CYAN.with_alpha(0.8),
            text: Color::rgba(0.9, 0.9, 0.9, 1.0),
            text_muted: Color::rgba(0.5, 0.5, 0.5, 1.0),
            corner_radius: 4.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lerp() {
        let a = Color::rgba(0.0, 0.0, 0.0, 1.0);
        let mid = a.lerp(Color::WHITE, 0.5);

        assert!((mid.r - 0.5).abs() < 0.01);
        assert!((mid.g - 0.5).abs() < 0.01);
        assert!((mid.b - 0.5).abs() < 0.01);
    }
}
