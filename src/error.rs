use thiserror::Error;

/// Malformed grid input rejected at the crate boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Width or height is zero
    #[error("grid dimensions must be positive, got {width}x{height}")]
    Empty {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
    },

    /// `width * height` does not fit in `usize`
    #[error("a {width}x{height} grid has more cells than can be addressed")]
    TooLarge {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
    },

    /// Cell buffer length does not match the declared dimensions
    #[error("a {width}x{height} grid needs {expected} cells, got {actual}")]
    SizeMismatch {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
        /// `width * height`
        expected: usize,
        /// Length of the supplied buffer
        actual: usize,
    },

    /// A row passed to `BinaryGrid::from_rows` has a different length than the first
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of this row
        actual: usize,
    },
}
