pub mod grid;
pub mod pattern;
pub mod point;

pub use grid::BinaryGrid;
pub use pattern::FinderPattern;
pub use point::Point;
