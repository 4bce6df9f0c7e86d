/// Pixel-space position of a finder pattern center
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Column, in pixels
    pub x: f32,
    /// Row, in pixels
    pub y: f32,
}

impl Point {
    /// Point at (x, y)
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance, used for the de-duplication radius
    pub fn distance(&self, other: &Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_symmetric() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }
}
