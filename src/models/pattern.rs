use std::fmt;

use super::Point;

/// A confirmed finder pattern: estimated center and module size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinderPattern {
    /// Estimated pattern center
    pub center: Point,
    /// Estimated width of one module (central dark run / 3)
    pub module_size: f32,
}

impl FinderPattern {
    /// Create a new finder pattern
    pub fn new(x: f32, y: f32, module_size: f32) -> Self {
        Self {
            center: Point::new(x, y),
            module_size,
        }
    }

    /// Center X coordinate
    pub fn x(&self) -> f32 {
        self.center.x
    }

    /// Center Y coordinate
    pub fn y(&self) -> f32 {
        self.center.y
    }
}

impl fmt::Display for FinderPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.1}, {:.1}) module≈{:.2}",
            self.center.x, self.center.y, self.module_size
        )
    }
}
