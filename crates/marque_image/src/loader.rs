//! Image loading and decoding

use crate::error::{ImageError, Result};
use crate::source::ImageSource;
use base64::Engine;
use image::{DynamicImage, GenericImageView};

/// Decoded image data ready for pixel sampling
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw RGBA pixel data, row-major
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl ImageData {
    /// Wrap raw RGBA pixels
    ///
    /// The buffer length must be exactly `width * height * 4`.
    pub fn from_rgba(pixels: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(ImageError::PixelData(format!(
                "expected {expected} bytes for {width}x{height}, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Decode encoded image bytes (png, jpeg, ...)
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data)?;
        Ok(Self::from_dynamic_image(img))
    }

    /// Decode a base64 payload
    ///
    /// Accepts both plain base64 and data URIs
    /// (`data:image/png;base64,...`).
    pub fn from_base64(data: &str) -> Result<Self> {
        let payload = if data.starts_with("data:") {
            data.find(";base64,")
                .map(|pos| &data[pos + 8..])
                .ok_or_else(|| ImageError::DataUri("missing ;base64, marker".to_string()))?
        } else {
            data
        };

        let bytes = base64::engine::general_purpose::STANDARD.decode(payload)?;
        Self::from_bytes(&bytes)
    }

    /// Load a source synchronously
    ///
    /// URL sources need [`ImageData::load_async`] and the `network`
    /// feature.
    pub fn load(source: ImageSource) -> Result<Self> {
        match source {
            ImageSource::File(path) => {
                let data = std::fs::read(&path)
                    .map_err(|e| ImageError::FileLoad(format!("{}: {e}", path.display())))?;
                Self::from_bytes(&data)
            }
            ImageSource::Base64(data) => Self::from_base64(&data),
            ImageSource::Bytes(data) => Self::from_bytes(&data),
            ImageSource::Rgba {
                data,
                width,
                height,
            } => Self::from_rgba(data, width, height),
            ImageSource::Url(url) => Err(ImageError::Network(format!(
                "URL sources require load_async and the 'network' feature: {url}"
            ))),
        }
    }

    /// Load a source, fetching URL sources over HTTP
    #[cfg(feature = "network")]
    pub async fn load_async(source: ImageSource) -> Result<Self> {
        match source {
            ImageSource::Url(url) => {
                let response = reqwest::get(&url)
                    .await
                    .map_err(|e| ImageError::Network(e.to_string()))?;

                if !response.status().is_success() {
                    return Err(ImageError::Network(format!(
                        "HTTP {} for {url}",
                        response.status()
                    )));
                }

                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| ImageError::Network(e.to_string()))?;
                Self::from_bytes(&bytes)
            }
            other => Self::load(other),
        }
    }

    fn from_dynamic_image(img: DynamicImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            pixels: img.to_rgba8().into_raw(),
            width,
            height,
        }
    }

    /// Raw RGBA pixel data
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
