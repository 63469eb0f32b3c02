//! Caller-supplied bar configuration and flags.

use serde::{Deserialize, Serialize};

use crate::layout::{Axis, Vec2};

/// Configuration for one dock bar, immutable for the duration of a frame.
///
/// Deserializable so applications can keep dock tuning in their TOML config
/// files; unspecified fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockConfig {
    /// Normalized viewport anchor. (0.5, 1.0) hugs the bottom edge,
    /// (0.0, 0.5) the left edge. Both components are clamped to [0, 1].
    pub anchor: Vec2,
    /// Item size at rest. Must be positive.
    pub normal_size: f32,
    /// Item size under the pointer at full engagement.
    pub hovered_size: f32,
    /// Ramp movement per frame while engaging or resting.
    pub anim_step: f32,
    /// Bell localization. Larger values narrow the magnified neighborhood.
    pub effect_strength: f32,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            anchor: Vec2::new(0.5, 1.0),
            normal_size: 40.0,
            hovered_size: 60.0,
            anim_step: 0.15,
            effect_strength: 0.5,
        }
    }
}

impl DockConfig {
    /// Sets the viewport anchor.
    #[must_use]
    pub const fn with_anchor(mut self, anchor: Vec2) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the normal and hovered item sizes.
    #[must_use]
    pub const fn with_sizes(mut self, normal: f32, hovered: f32) -> Self {
        self.normal_size = normal;
        self.hovered_size = hovered;
        self
    }

    /// Sets the per-frame ramp step.
    #[must_use]
    pub const fn with_anim_step(mut self, step: f32) -> Self {
        self.anim_step = step;
        self
    }

    /// Sets the bell localization strength.
    #[must_use]
    pub const fn with_effect_strength(mut self, strength: f32) -> Self {
        self.effect_strength = strength;
        self
    }
}

/// Dock bar flags (bitfield).
///
/// Exactly one orientation bit must be set; requesting both or neither is a
/// contract violation caught by a debug assertion. The remaining bits pass
/// window behavior through to the caller's renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DockFlags(u32);

impl DockFlags {
    /// No flags.
    pub const NONE: Self = Self(0);
    /// Items flow left to right; the bar breathes vertically.
    pub const HORIZONTAL: Self = Self(1);
    /// Items flow top to bottom; the bar breathes horizontally.
    pub const VERTICAL: Self = Self(1 << 1);
    /// The bar is suppressed entirely this frame.
    pub const HIDDEN: Self = Self(1 << 2);
    /// The caller's renderer should skip the bar background.
    pub const NO_BACKGROUND: Self = Self(1 << 3);

    /// Returns true if all bits of `other` are set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Resolves the orientation.
    ///
    /// Exactly one of [`Self::HORIZONTAL`] and [`Self::VERTICAL`] must be
    /// set. Debug builds halt on violation; release builds fall back to
    /// horizontal.
    #[must_use]
    pub fn axis(self) -> Axis {
        let horizontal = self.contains(Self::HORIZONTAL);
        let vertical = self.contains(Self::VERTICAL);
        debug_assert!(
            horizontal ^ vertical,
            "dock flags must select exactly one orientation"
        );
        if vertical && !horizontal {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }
}

impl std::ops::BitOr for DockFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning() {
        let config = DockConfig::default();

        assert_eq!(config.normal_size, 40.0);
        assert_eq!(config.hovered_size, 60.0);
        assert_eq!(config.anim_step, 0.15);
        assert_eq!(config.effect_strength, 0.5);
        assert_eq!(config.anchor, Vec2::new(0.5, 1.0));
    }

    #[test]
    fn test_flags_orientation() {
        assert_eq!(DockFlags::HORIZONTAL.axis(), Axis::Horizontal);
        assert_eq!(DockFlags::VERTICAL.axis(), Axis::Vertical);
        assert_eq!(
            (DockFlags::VERTICAL | DockFlags::NO_BACKGROUND).axis(),
            Axis::Vertical
        );
    }

    #[test]
    #[should_panic(expected = "exactly one orientation")]
    #[cfg(debug_assertions)]
    fn test_both_orientations_is_a_contract_violation() {
        let _ = (DockFlags::HORIZONTAL | DockFlags::VERTICAL).axis();
    }

    #[test]
    fn test_config_from_toml_with_partial_fields() {
        let config: DockConfig = toml::from_str(
            "normal_size = 32.0\nhovered_size = 56.0\nanchor = { x = 0.0, y = 0.5 }\n",
        )
        .expect("partial dock config parses");

        assert_eq!(config.normal_size, 32.0);
        assert_eq!(config.hovered_size, 56.0);
        assert_eq!(config.anchor, Vec2::new(0.0, 0.5));
        // Unspecified fields keep their defaults.
        assert_eq!(config.anim_step, 0.15);
        assert_eq!(config.effect_strength, 0.5);
    }
}
