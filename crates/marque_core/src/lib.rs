//! Marque Core Primitives
//!
//! This crate provides the foundational value types for the Marque showcase
//! toolkit:
//!
//! - **Geometry**: `Point`, `Size` and `Offset` for cursor and scroll math
//! - **Color**: the 8-bit `Rgb` triple with clamped construction, hex/rgba
//!   formatting, interpolation and the sampling helpers used by
//!   dominant-color extraction
//!
//! # Example
//!
//! ```rust
//! use marque_core::Rgb;
//!
//! // Out-of-range channels are clamped, never rejected
//! let accent = Rgb::from_unclamped(300.0, -10.0, 128.0);
//! assert_eq!(accent.to_hex(), "#ff0080");
//! ```

pub mod color;
pub mod geometry;

pub use color::{ColorParseError, Rgb};
pub use geometry::{Offset, Point, Size};
