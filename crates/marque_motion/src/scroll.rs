//! Scroll-driven motion
//!
//! Progress normalization, parallax offsets and the hero fade ramp. Inputs
//! come straight from the host's scroll metrics; every function clamps
//! rather than trusting the caller.

/// Normalize a scroll position to [0, 1] of the scrollable distance
///
/// Returns 0 when the document is not scrollable
/// (`doc_height <= viewport_height`).
#[inline]
pub fn scroll_progress(scroll_y: f32, doc_height: f32, viewport_height: f32) -> f32 {
    let scrollable = doc_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Unbounded parallax offset: exactly `scroll_y * speed`
#[inline]
pub fn parallax_offset(scroll_y: f32, speed: f32) -> f32 {
    scroll_y * speed
}

/// Bounded parallax offset for element and hero layers
///
/// Remaps progress [0, 1] onto [-max_offset, +max_offset], then clamps the
/// result to the same envelope. The clamp is a hard post-condition, not
/// redundancy: hosts feed these offsets through spring-physics followers,
/// which can overshoot the mapped range mid-flight.
#[inline]
pub fn bounded_parallax_offset(progress: f32, max_offset: f32) -> f32 {
    let progress = progress.clamp(0.0, 1.0);
    let raw = (progress * 2.0 - 1.0) * max_offset;
    raw.clamp(-max_offset, max_offset)
}

/// Hero section fade: opacity 1 before `fade_start`, 0 after `fade_end`,
/// linear ramp in between
///
/// Callers must pass `fade_start < fade_end`.
#[inline]
pub fn hero_fade_opacity(progress: f32, fade_start: f32, fade_end: f32) -> f32 {
    if progress <= fade_start {
        return 1.0;
    }
    if progress >= fade_end {
        return 0.0;
    }
    1.0 - (progress - fade_start) / (fade_end - fade_start)
}
