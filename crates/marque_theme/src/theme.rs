//! The shipped showcase theme

use crate::css::glow_color;
use crate::tokens::{ColorTokens, MotionTokens};
use marque_core::{ColorParseError, Rgb};

/// Token bundle for the showcase
///
/// One theme ships: the dark showroom the brand pages are set in.
#[derive(Clone, Copy, Debug)]
pub struct ShowroomTheme {
    pub colors: ColorTokens,
    pub motion: MotionTokens,
}

impl ShowroomTheme {
    /// The dark showroom variant
    pub fn dark() -> Self {
        Self {
            colors: ColorTokens {
                accent: Rgb::GOLD,
                background: Rgb::new(0x0A, 0x0A, 0x0F),
                surface: Rgb::new(0x14, 0x14, 0x1E),
                text_primary: Rgb::new(0xF5, 0xF5, 0xF0),
                text_secondary: Rgb::new(0x8A, 0x8A, 0x96),
            },
            motion: MotionTokens::default(),
        }
    }

    /// Glow string for an accent sampled from vehicle imagery
    ///
    /// Uses the theme's glow opacity; accepts any `#RRGGBB` string.
    pub fn glow_for(&self, accent_hex: &str) -> Result<String, ColorParseError> {
        glow_color(accent_hex, self.motion.glow_opacity)
    }

    /// Glow string for the theme's own accent
    pub fn accent_glow(&self) -> String {
        self.colors
            .accent
            .to_rgba_string(self.motion.glow_opacity)
    }
}

impl Default for ShowroomTheme {
    fn default() -> Self {
        Self::dark()
    }
}
