//! Marque Image Pipeline
//!
//! Vehicle photography enters the showcase through this crate:
//!
//! - **Sources**: file paths, raw bytes, base64 data URIs and (with the
//!   `network` feature) URLs
//! - **Decoding**: [`ImageData`], decoded RGBA pixels ready for sampling
//! - **Dominant Color**: brightness-filtered average with a saturation
//!   boost, used to tint glows and shadows to match each vehicle
//!
//! Extraction never fails the caller: [`dominant_color`] always resolves,
//! substituting the gold fallback accent when a source can't be read.

pub mod dominant;
pub mod error;
pub mod loader;
pub mod source;

pub use dominant::{dominant_color, extract_dominant, ExtractedColor};
pub use error::{ImageError, Result};
pub use loader::ImageData;
pub use source::ImageSource;
