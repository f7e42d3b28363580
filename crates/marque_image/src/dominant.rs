//! Dominant-color extraction
//!
//! Each vehicle's glow is tinted with a color sampled from its photograph:
//! sample a coarse grid, drop near-black and near-white pixels (shadows,
//! sky, studio floor), average what's left and boost saturation so the
//! accent reads against the dark showroom backdrop.

use crate::loader::ImageData;
use crate::source::ImageSource;
use marque_core::Rgb;

/// Sampling grid bound: at most this many samples per axis
pub const SAMPLE_GRID: u32 = 50;

/// Pixels at or below this mean brightness are skipped
pub const MIN_BRIGHTNESS: f32 = 30.0;

/// Pixels at or above this mean brightness are skipped
pub const MAX_BRIGHTNESS: f32 = 225.0;

/// Saturation boost applied to the averaged color
const SATURATION_BOOST: f32 = 1.2;

/// Result of a dominant-color extraction
///
/// The fallback case is part of the type: extraction degrades, it never
/// errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtractedColor {
    /// Color sampled from the image
    Sampled(Rgb),
    /// The fallback accent; the source couldn't be sampled
    Fallback(Rgb),
}

impl ExtractedColor {
    /// The color, sampled or not
    pub fn rgb(self) -> Rgb {
        match self {
            ExtractedColor::Sampled(rgb) | ExtractedColor::Fallback(rgb) => rgb,
        }
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, ExtractedColor::Fallback(_))
    }

    /// Hex form of the color, for the style layer
    pub fn to_hex(self) -> String {
        self.rgb().to_hex()
    }
}

/// Average the image's mid-brightness pixels and boost saturation
///
/// Samples a grid of at most [`SAMPLE_GRID`]² pixels. Returns `None` when
/// the image is empty or every sampled pixel fails the brightness filter.
pub fn extract_dominant(data: &ImageData) -> Option<Rgb> {
    let (width, height) = data.dimensions();
    if width == 0 || height == 0 {
        return None;
    }

    let step_x = width.div_ceil(SAMPLE_GRID).max(1) as usize;
    let step_y = height.div_ceil(SAMPLE_GRID).max(1) as usize;
    let pixels = data.pixels();

    let mut sum = [0u64; 3];
    let mut count = 0u64;

    for y in (0..height as usize).step_by(step_y) {
        for x in (0..width as usize).step_by(step_x) {
            let i = (y * width as usize + x) * 4;
            let sample = Rgb::new(pixels[i], pixels[i + 1], pixels[i + 2]);

            let brightness = sample.brightness();
            if brightness <= MIN_BRIGHTNESS || brightness >= MAX_BRIGHTNESS {
                continue;
            }

            sum[0] += sample.r as u64;
            sum[1] += sample.g as u64;
            sum[2] += sample.b as u64;
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }

    let average = Rgb::from_unclamped(
        (sum[0] / count) as f32,
        (sum[1] / count) as f32,
        (sum[2] / count) as f32,
    );
    Some(average.saturated(SATURATION_BOOST))
}

/// Extract the dominant color of a source, falling back to gold
///
/// Never fails: a source that can't be loaded, decoded or sampled resolves
/// to [`ExtractedColor::Fallback`] with [`Rgb::GOLD`]. A superseded call's
/// result is simply ignored by the caller; there is no cancellation.
pub async fn dominant_color(source: ImageSource) -> ExtractedColor {
    #[cfg(feature = "network")]
    let loaded = ImageData::load_async(source).await;
    #[cfg(not(feature = "network"))]
    let loaded = ImageData::load(source);

    match loaded {
        Ok(data) => match extract_dominant(&data) {
            Some(rgb) => ExtractedColor::Sampled(rgb),
            None => {
                tracing::debug!("no pixels passed the brightness filter, using fallback accent");
                ExtractedColor::Fallback(Rgb::GOLD)
            }
        },
        Err(e) => {
            tracing::debug!("image load failed ({e}), using fallback accent");
            ExtractedColor::Fallback(Rgb::GOLD)
        }
    }
}
