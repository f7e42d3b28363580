//! 2D value types for cursor and scroll math

/// 2D point (cursor positions, element centers)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector from `other` to this point
    pub fn delta_from(self, other: Point) -> Offset {
        Offset::new(self.x - other.x, self.y - other.y)
    }
}

/// 2D size (element bounding boxes)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// 2D translation produced by motion calculators
///
/// Computed fresh per invocation; carries no identity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the offset vector
    pub fn magnitude(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Scale both components by a factor
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_from() {
        let cursor = Point::new(110.0, 80.0);
        let center = Point::new(100.0, 100.0);
        let delta = cursor.delta_from(center);
        assert_eq!(delta, Offset::new(10.0, -20.0));
    }

    #[test]
    fn test_magnitude() {
        assert!((Offset::new(3.0, 4.0).magnitude() - 5.0).abs() < 1e-6);
        assert_eq!(Offset::ZERO.magnitude(), 0.0);
    }
}
