//! Stagger delays
//!
//! Cascading reveals (gallery cards, split headline characters) offset each
//! item's start time by a fixed per-index delay.

/// Default delay between consecutive items, in milliseconds
pub const DEFAULT_STAGGER_MS: f32 = 100.0;

/// Delay before item `index` starts animating
///
/// Strictly linear: `index * base_ms`. Item 0 starts immediately.
#[inline]
pub fn stagger_delay(index: usize, base_ms: f32) -> f32 {
    index as f32 * base_ms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_is_linear() {
        assert_eq!(stagger_delay(0, 100.0), 0.0);
        assert_eq!(stagger_delay(3, 100.0), 300.0);
        assert_eq!(stagger_delay(7, 60.0), 420.0);
    }

    #[test]
    fn test_stagger_strictly_increasing() {
        for base in [1.0, 50.0, DEFAULT_STAGGER_MS, 333.3] {
            let mut prev = -1.0;
            for index in 0..32 {
                let delay = stagger_delay(index, base);
                assert!(delay > prev, "not increasing at index {index}");
                prev = delay;
            }
        }
    }
}
