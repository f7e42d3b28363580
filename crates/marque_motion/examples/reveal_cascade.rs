//! Reveal Cascade Demo
//!
//! Prints the staggered entrance schedule for a row of gallery cards:
//! per-card delay, starting offset and the eased count-up a spec figure
//! would display at a few progress points.
//!
//! Run with: cargo run -p marque_motion --example reveal_cascade

use marque_motion::{
    interpolate_count, reveal_transform, stagger_delay, Easing, RevealDirection,
    DEFAULT_STAGGER_MS,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cards = ["Meridian GT", "Vanta S", "Aurelia R", "Strada E"];

    for (index, name) in cards.iter().enumerate() {
        let delay = stagger_delay(index, DEFAULT_STAGGER_MS);
        let transform = reveal_transform(RevealDirection::Up, 80.0);
        println!(
            "{name}: starts at +{delay}ms from ({}, {})",
            transform.x, transform.y
        );
    }

    println!("\ncount-up toward 1015 hp:");
    for step in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let shown = interpolate_count(step, 1015.0, Easing::EaseOutCubic);
        println!("  progress {step:>4}: {:>6.1}", shown);
    }
}
