//! Scan-order de-duplication and selection of finder candidates

use crate::models::FinderPattern;

/// Candidates closer than this many module widths are the same pattern
pub const DEDUP_RADIUS_MODULES: f32 = 5.0;

/// Number of finder patterns in a QR symbol
pub const FINDER_PATTERN_COUNT: usize = 3;

/// True if `candidate` lies within the dedup radius of `existing`
///
/// The radius uses the already accepted pattern's module size.
pub fn is_duplicate(candidate: &FinderPattern, existing: &FinderPattern) -> bool {
    candidate.center.distance(&existing.center) < existing.module_size * DEDUP_RADIUS_MODULES
}

/// Greedy fold in scan order: the first candidate of a cluster wins
///
/// Order-dependent; pass candidates row by row, left to right.
pub fn dedup_in_scan_order<I>(candidates: I) -> Vec<FinderPattern>
where
    I: IntoIterator<Item = FinderPattern>,
{
    candidates
        .into_iter()
        .fold(Vec::new(), |mut unique: Vec<FinderPattern>, candidate| {
            if !unique.iter().any(|existing| is_duplicate(&candidate, existing)) {
                unique.push(candidate);
            }
            unique
        })
}

/// Keep at most the first [`FINDER_PATTERN_COUNT`] unique candidates
pub fn select(mut unique: Vec<FinderPattern>) -> Vec<FinderPattern> {
    unique.truncate(FINDER_PATTERN_COUNT);
    unique
}
