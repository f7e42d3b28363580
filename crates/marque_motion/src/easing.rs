//! Easing curves for count-up and reveal timing
//!
//! Every curve maps clamped progress [0, 1] to [0, 1] with `apply(0) = 0`
//! and `apply(1) = 1`.

use serde::{Deserialize, Serialize};

/// Easing curve applied to animation progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Constant-rate progress
    Linear,
    /// Cubic ease-out: fast start, decelerating finish
    #[default]
    EaseOutCubic,
    /// Cubic ease-in-out: slow start and finish
    EaseInOutCubic,
}

impl Easing {
    /// Apply the curve to a progress value, clamping input to [0, 1]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => ease_out_cubic(t),
            Easing::EaseInOutCubic => ease_in_out_cubic(t),
        }
    }
}

/// f(t) = 1 - (1-t)³
#[inline]
fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Piecewise cubic: 4t³ below the midpoint, mirrored above it
#[inline]
fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 3] = [Easing::Linear, Easing::EaseOutCubic, Easing::EaseInOutCubic];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            assert!((easing.apply(0.0)).abs() < 1e-6, "{easing:?} at t=0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at t=1");
        }
    }

    #[test]
    fn test_easing_clamps_input() {
        for easing in ALL {
            assert_eq!(easing.apply(-3.0), easing.apply(0.0));
            assert_eq!(easing.apply(7.5), easing.apply(1.0));
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!(v >= prev, "{easing:?} not monotonic at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_easing_stays_in_unit_range() {
        for easing in ALL {
            for i in 0..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!((0.0..=1.0).contains(&v), "{easing:?} escaped at step {i}");
            }
        }
    }
}
