//! Magnification math.
//!
//! Three pure functions produce the whole dock effect: a bell-shaped falloff
//! around the pointer, a clamped size interpolation, and their composition.
//! Every output is clamped; no input can make these fail.

use std::f32::consts::{FRAC_PI_2, PI};

/// Cosine-bell falloff exponent. Even, so the bell is symmetric; raising it
/// narrows the peak.
const BELL_EXPONENT: i32 = 8;

/// Bell-shaped falloff around the pointer.
///
/// `value` is the normalized main-axis distance between pointer and item
/// center, `strength` controls how localized the bell is (larger strength,
/// narrower bell). Returns 1 at zero distance, decays smoothly to 0 at the
/// first cosine zero (`|value| = 0.5 / strength`) and stays 0 beyond it, so
/// far-away items never pick up side-lobe growth.
#[must_use]
pub fn bubble(value: f32, strength: f32) -> f32 {
    let arg = value * PI * strength;
    if !arg.is_finite() || arg.abs() >= FRAC_PI_2 {
        return 0.0;
    }
    arg.cos().powi(BELL_EXPONENT)
}

/// Interpolates between the normal and hovered size at `scale`, clamped so
/// the result never leaves the band the two sizes span. An inverted
/// configuration (hovered below normal) degrades to the same stable clamp.
#[must_use]
pub fn bar_size(normal_size: f32, hovered_size: f32, scale: f32) -> f32 {
    let lo = normal_size.min(hovered_size);
    let hi = normal_size.max(hovered_size);
    (normal_size + (hovered_size - normal_size) * scale).clamp(lo, hi)
}

/// Size of one item: the bell falloff at its distance, weighted by the bar's
/// engagement ramp, fed through the clamped interpolation.
#[must_use]
pub fn hover_size(value: f32, normal_size: f32, hovered_size: f32, strength: f32, ramp: f32) -> f32 {
    bar_size(normal_size, hovered_size, bubble(value, strength) * ramp)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_bubble_peaks_at_zero_distance() {
        for strength in [0.25, 0.5, 1.0, 2.0] {
            assert!((bubble(0.0, strength) - 1.0).abs() < EPS, "strength {strength}");
        }
    }

    #[test]
    fn test_bubble_zero_at_first_cosine_zero() {
        for strength in [0.25, 0.5, 1.0, 2.0] {
            let zero = 0.5 / strength;
            assert_eq!(bubble(zero, strength), 0.0, "strength {strength}");
            assert_eq!(bubble(-zero, strength), 0.0, "strength {strength}");
        }
    }

    #[test]
    fn test_bubble_stays_zero_beyond_first_lobe() {
        // cos^8 has side lobes past pi/2; the falloff must not.
        assert_eq!(bubble(2.0, 0.5), 0.0);
        assert_eq!(bubble(10.0, 1.0), 0.0);
        assert_eq!(bubble(f32::INFINITY, 1.0), 0.0);
    }

    #[test]
    fn test_full_magnification_at_pointer_center() {
        assert!((hover_size(0.0, 40.0, 60.0, 0.5, 1.0) - 60.0).abs() < EPS);
    }

    #[test]
    fn test_idle_ramp_gives_normal_size() {
        assert!((hover_size(0.0, 40.0, 60.0, 0.5, 0.0) - 40.0).abs() < EPS);
        assert!((hover_size(0.3, 40.0, 60.0, 0.5, 0.0) - 40.0).abs() < EPS);
    }

    #[test]
    fn test_far_items_keep_normal_size() {
        // Distance past the first lobe: cosine argument beyond pi/2.
        assert!((hover_size(3.0, 40.0, 60.0, 0.5, 1.0) - 40.0).abs() < EPS);
    }

    #[test]
    fn test_size_stays_in_band() {
        let mut d = -4.0;
        while d <= 4.0 {
            for ramp in [0.0, 0.3, 0.7, 1.0] {
                let size = hover_size(d, 40.0, 60.0, 0.5, ramp);
                assert!((40.0..=60.0).contains(&size), "d {d} ramp {ramp} size {size}");
            }
            d += 0.05;
        }
    }

    #[test]
    fn test_inverted_sizes_degrade_to_clamp() {
        // hovered below normal must not panic and must stay in band.
        let size = bar_size(60.0, 40.0, 0.5);
        assert!((40.0..=60.0).contains(&size));
    }
}
