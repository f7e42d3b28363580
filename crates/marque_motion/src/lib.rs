//! Marque Motion Math
//!
//! The numeric core of the showcase: every entrance, scroll and pointer
//! effect reduces to one of the pure calculators in this crate.
//!
//! # Features
//!
//! - **Reveal Transforms**: direction tag to initial offset vector
//! - **Stagger Delays**: linear per-item delay cascades
//! - **Scroll**: progress normalization, parallax offsets, hero fade
//! - **Interpolators**: clamped scale and eased count-up interpolation
//! - **Pointer**: bounded tilt rotation and magnetic pull
//!
//! All calculators are total functions: out-of-range numeric input is
//! clamped at the boundary, never rejected.

pub mod easing;
pub mod interpolate;
pub mod pointer;
pub mod reveal;
pub mod scroll;
pub mod stagger;

pub use easing::Easing;
pub use interpolate::{interpolate_count, interpolate_scale, Interpolate};
pub use pointer::{
    magnetic_offset, tilt_rotation, MagneticConfig, TiltRotation, DEFAULT_MAX_ROTATION_DEG,
};
pub use reveal::{reveal_transform, Axis, RevealDirection, RevealTransform};
pub use scroll::{bounded_parallax_offset, hero_fade_opacity, parallax_offset, scroll_progress};
pub use stagger::{stagger_delay, DEFAULT_STAGGER_MS};
