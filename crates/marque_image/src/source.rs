//! Image sources

use std::path::PathBuf;

/// Where an image comes from
///
/// The showcase references vehicle imagery by path in the catalog; the
/// other variants cover embedded assets and tests.
#[derive(Clone, Debug)]
pub enum ImageSource {
    /// Filesystem path
    File(PathBuf),
    /// Remote URL (requires the `network` feature to load)
    Url(String),
    /// Base64 payload, plain or `data:image/...;base64,` URI
    Base64(String),
    /// Encoded image bytes (png, jpeg, ...)
    Bytes(Vec<u8>),
    /// Already-decoded RGBA pixels
    Rgba {
        data: Vec<u8>,
        width: u32,
        height: u32,
    },
}

impl From<&str> for ImageSource {
    /// Treat http(s) strings as URLs and anything else as a path
    fn from(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            ImageSource::Url(s.to_string())
        } else if s.starts_with("data:") {
            ImageSource::Base64(s.to_string())
        } else {
            ImageSource::File(PathBuf::from(s))
        }
    }
}
