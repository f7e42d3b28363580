//! CSS color strings
//!
//! The style layer only ever receives colors the toolkit produced itself:
//! `#rrggbb` from sampling, `rgb(...)`/`rgba(...)` from glow construction.
//! The validator recognizes exactly those three forms. It is not a CSS
//! color parser: named colors, short hex and every other syntax are
//! rejected.

use marque_core::{ColorParseError, Rgb};
use regex::Regex;
use std::sync::OnceLock;

/// Default alpha for glow colors
pub const DEFAULT_GLOW_OPACITY: f32 = 0.5;

static CSS_COLOR: OnceLock<Regex> = OnceLock::new();

fn css_color_pattern() -> &'static Regex {
    CSS_COLOR.get_or_init(|| {
        Regex::new(
            r"^(#[0-9a-fA-F]{6}|rgb\(\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*\d{1,3}\s*\)|rgba\(\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*\d*\.?\d+\s*\))$",
        )
        .expect("css color pattern is valid")
    })
}

/// Check a color string against the three supported forms
///
/// Accepts `#RRGGBB`, `rgb(n, n, n)` and `rgba(n, n, n, a)`; rejects
/// everything else, including named colors and `#fff` short hex.
pub fn is_valid_css_color(s: &str) -> bool {
    css_color_pattern().is_match(s)
}

/// Build a translucent glow color from a 6-digit hex accent
///
/// The hex string must be `#RRGGBB`; malformed input surfaces as a
/// [`ColorParseError`] rather than a broken style string.
pub fn glow_color(hex: &str, opacity: f32) -> Result<String, ColorParseError> {
    Ok(Rgb::from_hex_str(hex)?.to_rgba_string(opacity))
}
