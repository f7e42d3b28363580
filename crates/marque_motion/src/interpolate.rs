//! Animatable value interpolation
//!
//! The [`Interpolate`] trait is the seam between the calculators and the
//! value types they animate; the free functions cover the two progress-bound
//! interpolations the showcase uses directly (card scale and spec-figure
//! count-up).

use crate::easing::Easing;
use marque_core::{Offset, Rgb};

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal (for settling detection)
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

impl Interpolate for Offset {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Offset::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

impl Interpolate for Rgb {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Rgb::lerp(*self, *other, t)
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        let eps = epsilon as i16;
        (self.r as i16 - other.r as i16).abs() <= eps
            && (self.g as i16 - other.g as i16).abs() <= eps
            && (self.b as i16 - other.b as i16).abs() <= eps
    }
}

/// Progress-bound scale interpolation
///
/// Progress is clamped to [0, 1] first, so the result always lies in
/// [from, to]: `from` at 0, `to` at 1, linear in between.
#[inline]
pub fn interpolate_scale(progress: f32, from: f32, to: f32) -> f32 {
    let progress = progress.clamp(0.0, 1.0);
    from + (to - from) * progress
}

/// Eased count-up toward a target figure (horsepower, top speed, price)
///
/// Applies `easing` to clamped progress, then scales by `target`: exactly 0
/// at progress 0 and exactly `target` at progress 1.
#[inline]
pub fn interpolate_count(progress: f32, target: f32, easing: Easing) -> f32 {
    easing.apply(progress) * target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_lerp() {
        assert!((0.0_f32.lerp(&1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((10.0_f32.lerp(&20.0, 0.25) - 12.5).abs() < 1e-6);
    }

    #[test]
    fn test_offset_lerp() {
        let a = Offset::ZERO;
        let b = Offset::new(100.0, -40.0);
        let mid = a.lerp(&b, 0.5);
        assert!(mid.approx_eq(&Offset::new(50.0, -20.0), 1e-6));
    }

    #[test]
    fn test_rgb_lerp_settles() {
        let a = Rgb::new(10, 10, 10);
        let b = Rgb::new(210, 110, 60);
        assert!(a.lerp(&b, 1.0).approx_eq(&b, 1.0));
    }

    #[test]
    fn test_scale_endpoints_and_bounds() {
        assert_eq!(interpolate_scale(0.0, 0.8, 1.2), 0.8);
        assert_eq!(interpolate_scale(1.0, 0.8, 1.2), 1.2);

        // Out-of-range progress pins to the boundary value
        assert_eq!(interpolate_scale(-5.0, 0.8, 1.2), 0.8);
        assert_eq!(interpolate_scale(42.0, 0.8, 1.2), 1.2);

        let mut prev = f32::MIN;
        for i in 0..=50 {
            let v = interpolate_scale(i as f32 / 50.0, 0.8, 1.2);
            assert!((0.8..=1.2).contains(&v));
            assert!(v >= prev, "not monotonic at step {i}");
            prev = v;
        }
    }

    #[test]
    fn test_count_up_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOutCubic, Easing::EaseInOutCubic] {
            assert_eq!(interpolate_count(0.0, 1015.0, easing), 0.0);
            assert_eq!(interpolate_count(1.0, 1015.0, easing), 1015.0);
        }
    }

    #[test]
    fn test_count_up_bounded_and_linear_monotonic() {
        let target = 320.0;
        let mut prev = -1.0;
        for i in 0..=100 {
            let p = i as f32 / 100.0;
            let linear = interpolate_count(p, target, Easing::Linear);
            assert!(linear >= prev);
            prev = linear;

            for easing in [Easing::EaseOutCubic, Easing::EaseInOutCubic] {
                let v = interpolate_count(p, target, easing);
                assert!((0.0..=target).contains(&v), "{easing:?} escaped at {p}");
            }
        }
    }
}
