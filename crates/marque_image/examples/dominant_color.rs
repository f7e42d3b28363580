//! Dominant Color Demo
//!
//! Samples the dominant color of an image file and prints the hex accent
//! plus the glow string a card would use.
//!
//! Run with: cargo run -p marque_image --example dominant_color -- path/to/image.jpg

use marque_core::Rgb;
use marque_image::{extract_dominant, ImageData, ImageSource};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: dominant_color <image-path>");
        return;
    };

    let accent = ImageData::load(ImageSource::from(path.as_str()))
        .ok()
        .and_then(|data| extract_dominant(&data))
        .unwrap_or(Rgb::GOLD);

    println!("accent: {}", accent.to_hex());
    println!("glow:   {}", accent.to_rgba_string(0.5));
}
