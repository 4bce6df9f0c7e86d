//! qr_finder - locate QR finder patterns in binary images
//!
//! Scans a binarized grid for the 1:1:3:1:1 dark/light run signature of the
//! three corner markers, confirms each hit vertically, merges duplicates and
//! returns up to three pattern centers with their estimated module size.
//!
//! Thresholding an image into a [`BinaryGrid`] and decoding the symbol from
//! the returned patterns are left to the caller.
//!
//! # Example
//! ```
//! use qr_finder::{BinaryGrid, find_finder_patterns};
//!
//! let mut grid = BinaryGrid::new(120, 120);
//! grid.fill_rect(30, 30, 35, 35, true);
//! grid.fill_rect(35, 35, 25, 25, false);
//! grid.fill_rect(40, 40, 15, 15, true);
//!
//! let patterns = find_finder_patterns(&grid);
//! assert_eq!(patterns.len(), 1);
//! assert_eq!(patterns[0].module_size, 5.0);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Detector settings and environment overrides
pub mod config;
/// Finder pattern detection modules (runs, scanning, confirmation, dedup)
pub mod detector;
/// Error types for malformed input
pub mod error;
/// Core data structures (BinaryGrid, Point, FinderPattern)
pub mod models;

pub use config::{CenterEstimate, FinderConfig};
pub use detector::dedup::FINDER_PATTERN_COUNT;
pub use detector::finder::{DetectionStats, FinderDetector};
pub use error::GridError;
pub use models::{BinaryGrid, FinderPattern, Point};

/// Find up to three finder patterns with the default configuration
///
/// Returns them in scan order (top to bottom, left to right). Fewer than
/// [`FINDER_PATTERN_COUNT`] results means not enough patterns were found.
pub fn find_finder_patterns(grid: &BinaryGrid) -> Vec<FinderPattern> {
    FinderDetector::default().detect(grid)
}

/// Find finder patterns in a row-major cell buffer, `true` = dark
///
/// # Errors
/// [`GridError`] if a dimension is zero or `cells.len() != width * height`.
pub fn find_in_cells(
    cells: &[bool],
    width: usize,
    height: usize,
) -> Result<Vec<FinderPattern>, GridError> {
    let grid = BinaryGrid::from_cells(width, height, cells)?;
    Ok(find_finder_patterns(&grid))
}
