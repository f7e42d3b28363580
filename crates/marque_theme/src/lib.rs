//! Marque Showcase Theming
//!
//! Color-string plumbing and the design tokens of the showcase:
//!
//! - **Validation**: the narrow CSS color-string check used before handing
//!   a sampled color to the style layer
//! - **Glow Colors**: translucent `rgba(...)` strings derived from a hex
//!   accent, tinting card shadows and neon edges
//! - **Tokens**: the color and motion constants of the shipped dark theme

pub mod css;
pub mod theme;
pub mod tokens;

pub use css::{glow_color, is_valid_css_color, DEFAULT_GLOW_OPACITY};
pub use theme::ShowroomTheme;
pub use tokens::{ColorTokens, MotionTokens};
