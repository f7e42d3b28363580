//! Pointer-driven card effects
//!
//! Tilt rotates a card toward the cursor; the magnetic effect drags an
//! element a few pixels toward it. Both are bounded for any finite input:
//! the cursor can be far outside the element.

use marque_core::{Offset, Point, Size};
use serde::{Deserialize, Serialize};

/// Default tilt bound, in degrees
pub const DEFAULT_MAX_ROTATION_DEG: f32 = 15.0;

/// Two-axis card rotation, in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltRotation {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

/// Rotation of a card under the cursor
///
/// Cursor offset from the element center is normalized by the half extents,
/// scaled by `max_rotation` and clamped to ±`max_rotation` per axis.
/// `rotate_x` is inverted so the card tilts toward the cursor. Exactly zero
/// when the cursor sits on the center; degenerate extents (zero or negative
/// width/height) contribute zero rather than NaN.
pub fn tilt_rotation(cursor: Point, center: Point, size: Size, max_rotation: f32) -> TiltRotation {
    let delta = cursor.delta_from(center);

    let normalized = |component: f32, half_extent: f32| {
        if half_extent <= 0.0 {
            return 0.0;
        }
        (component / half_extent * max_rotation).clamp(-max_rotation.abs(), max_rotation.abs())
    };

    TiltRotation {
        rotate_x: -normalized(delta.y, size.height / 2.0),
        rotate_y: normalized(delta.x, size.width / 2.0),
    }
}

/// Magnetic pull configuration
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MagneticConfig {
    /// Longest pull, in pixels
    pub max_distance: f32,
    /// Fraction of the cursor delta applied, in (0, 1]
    pub strength: f32,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            max_distance: 20.0,
            strength: 0.5,
        }
    }
}

/// Pull an element toward the cursor
///
/// The raw pull is `(cursor - center) * strength`; when its magnitude
/// exceeds `max_distance` the vector is rescaled onto the max-distance
/// circle, preserving direction. Exactly zero at cursor == center.
pub fn magnetic_offset(cursor: Point, center: Point, config: &MagneticConfig) -> Offset {
    let pull = cursor.delta_from(center).scaled(config.strength);

    let magnitude = pull.magnitude();
    if magnitude > config.max_distance && magnitude > 0.0 {
        pull.scaled(config.max_distance / magnitude)
    } else {
        pull
    }
}
