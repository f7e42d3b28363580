//! Catalog records

use serde::{Deserialize, Serialize};

/// One vehicle of the showcase
///
/// Pure display content; `src` is the path of the hero photograph the
/// dominant-color sampler reads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub src: String,
    pub alt: String,
    pub title: String,
    pub description: String,
    pub tagline: String,
    pub specs: VehicleSpecs,
}

/// Headline figures shown by the count-up animations
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpecs {
    pub horsepower: u32,
    /// Top speed, mph
    pub top_speed: u32,
    /// 0-60 mph, seconds
    pub acceleration: f32,
    pub engine: String,
    /// USD
    pub price: u64,
}
