//! Finder pattern detection modules
//!
//! The pipeline runs leaf-first:
//! - Run extraction along rows and columns
//! - Horizontal 1:1:3:1:1 cross-section scanning
//! - Vertical confirmation of the central block
//! - Scan-order de-duplication and selection of up to three patterns

/// Scan-order de-duplication and selection
pub mod dedup;
/// Orchestrates the full grid scan
pub mod finder;
/// Horizontal 1:1:3:1:1 ratio scanning
pub mod horizontal;
/// Run-length encoding of scan lines
pub mod runs;
/// Vertical confirmation in the candidate's column
pub mod vertical;
