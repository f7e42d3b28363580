//! Design tokens
//!
//! Plain immutable constant tables. Pages take these by reference; nothing
//! here carries state.

use marque_core::Rgb;

/// Color tokens of a showcase theme
#[derive(Clone, Copy, Debug)]
pub struct ColorTokens {
    /// Brand accent, also the sampling fallback
    pub accent: Rgb,
    /// Page backdrop behind the starfield
    pub background: Rgb,
    /// Card and panel surfaces
    pub surface: Rgb,
    /// Headline text
    pub text_primary: Rgb,
    /// Taglines and spec labels
    pub text_secondary: Rgb,
}

/// Motion tokens of a showcase theme
#[derive(Clone, Copy, Debug)]
pub struct MotionTokens {
    /// Reveal travel distance, pixels
    pub reveal_distance: f32,
    /// Per-item stagger delay, milliseconds
    pub stagger_base_ms: f32,
    /// Tilt bound, degrees
    pub tilt_max_deg: f32,
    /// Magnetic pull bound, pixels
    pub magnet_max_distance: f32,
    /// Magnetic pull strength, fraction of cursor delta
    pub magnet_strength: f32,
    /// Glow alpha applied to sampled accents
    pub glow_opacity: f32,
    /// Count-up duration for spec figures, milliseconds
    pub count_up_ms: f32,
}

impl Default for MotionTokens {
    fn default() -> Self {
        Self {
            reveal_distance: 80.0,
            stagger_base_ms: 100.0,
            tilt_max_deg: 15.0,
            magnet_max_distance: 20.0,
            magnet_strength: 0.5,
            glow_opacity: 0.5,
            count_up_ms: 2000.0,
        }
    }
}
