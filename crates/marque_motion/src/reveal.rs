//! Reveal transforms
//!
//! An element entering the page starts offset from its resting position and
//! animates to zero. The transform here encodes where it starts: revealing
//! "up" means the element begins *below* its slot (positive y) and travels
//! upward.

use serde::{Deserialize, Serialize};

/// Which axis a reveal travels along
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// Travel direction of a reveal animation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl RevealDirection {
    /// Parse a direction tag
    ///
    /// Unrecognized tags fall back to `Up`, the default entrance.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "up" => RevealDirection::Up,
            "down" => RevealDirection::Down,
            "left" => RevealDirection::Left,
            "right" => RevealDirection::Right,
            _ => RevealDirection::Up,
        }
    }

    /// The axis this direction travels along
    pub fn axis(self) -> Axis {
        match self {
            RevealDirection::Up | RevealDirection::Down => Axis::Y,
            RevealDirection::Left | RevealDirection::Right => Axis::X,
        }
    }
}

/// Initial offset of a revealing element relative to its resting position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTransform {
    pub x: f32,
    pub y: f32,
    pub axis: Axis,
}

/// Compute the starting offset for a reveal
///
/// The sign encodes where the element starts: `Up` starts below (+y),
/// `Down` starts above (-y), `Left` starts to the right (+x), `Right`
/// starts to the left (-x). The off-axis component is always exactly 0.
pub fn reveal_transform(direction: RevealDirection, distance: f32) -> RevealTransform {
    let (x, y) = match direction {
        RevealDirection::Up => (0.0, distance),
        RevealDirection::Down => (0.0, -distance),
        RevealDirection::Left => (distance, 0.0),
        RevealDirection::Right => (-distance, 0.0),
    };
    RevealTransform {
        x,
        y,
        axis: direction.axis(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_up() {
        let t = reveal_transform(RevealDirection::Up, 80.0);
        assert_eq!(t, RevealTransform { x: 0.0, y: 80.0, axis: Axis::Y });
    }

    #[test]
    fn test_axis_and_sign_per_direction() {
        for distance in [1.0, 40.0, 80.0, 250.0] {
            let up = reveal_transform(RevealDirection::Up, distance);
            assert_eq!((up.axis, up.x, up.y), (Axis::Y, 0.0, distance));

            let down = reveal_transform(RevealDirection::Down, distance);
            assert_eq!((down.axis, down.x, down.y), (Axis::Y, 0.0, -distance));

            let left = reveal_transform(RevealDirection::Left, distance);
            assert_eq!((left.axis, left.x, left.y), (Axis::X, distance, 0.0));

            let right = reveal_transform(RevealDirection::Right, distance);
            assert_eq!((right.axis, right.x, right.y), (Axis::X, -distance, 0.0));
        }
    }

    #[test]
    fn test_parse_falls_back_to_up() {
        assert_eq!(RevealDirection::parse("down"), RevealDirection::Down);
        assert_eq!(RevealDirection::parse("left"), RevealDirection::Left);
        assert_eq!(RevealDirection::parse("diagonal"), RevealDirection::Up);
        assert_eq!(RevealDirection::parse(""), RevealDirection::Up);
    }
}
