//! Image pipeline errors

use thiserror::Error;

/// Errors from loading or decoding an image source
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("invalid pixel data: {0}")]
    PixelData(String),

    #[error("failed to read image file: {0}")]
    FileLoad(String),

    #[error("invalid base64 image data: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid data URI: {0}")]
    DataUri(String),

    #[error("network error: {0}")]
    Network(String),
}

pub type Result<T> = std::result::Result<T, ImageError>;
