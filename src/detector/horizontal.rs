//! Horizontal 1:1:3:1:1 cross-section scanning over a row's runs

use super::runs::Run;
use crate::config::CenterEstimate;

/// Lower bound for an outer run measured in modules
pub const MIN_RATIO: f32 = 0.7;
/// Upper bound for an outer run measured in modules
pub const MAX_RATIO: f32 = 1.4;
/// Lower bound for the central dark run measured in modules
pub const CENTER_MIN_RATIO: f32 = 2.5;
/// Upper bound for the central dark run measured in modules
pub const CENTER_MAX_RATIO: f32 = 3.8;

/// A run window that passed the horizontal ratio test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossSection {
    /// Index of the window's first run in the row
    pub run_index: usize,
    /// Estimated center X in pixels
    pub center_x: f32,
    /// Central dark run length / 3
    pub module_size: f32,
}

/// Ratio test on five run lengths; returns the module size on success
///
/// The module size is derived from the central run, so the central bound
/// always evaluates against exactly 3.
pub fn check_ratios(lengths: [usize; 5]) -> Option<f32> {
    let module_size = lengths[2] as f32 / 3.0;
    let outer_ok = |len: usize| (MIN_RATIO..=MAX_RATIO).contains(&(len as f32 / module_size));
    let center_ok =
        (CENTER_MIN_RATIO..=CENTER_MAX_RATIO).contains(&(lengths[2] as f32 / module_size));

    (outer_ok(lengths[0])
        && outer_ok(lengths[1])
        && center_ok
        && outer_ok(lengths[3])
        && outer_ok(lengths[4]))
    .then_some(module_size)
}

/// Center X of a window that starts at `start` with run lengths `lengths`
pub fn estimate_center_x(start: usize, lengths: [usize; 5], mode: CenterEstimate) -> f32 {
    let [s1, s2, s3, _, _] = lengths;
    match mode {
        CenterEstimate::Refined => start as f32 + s1 as f32 + s2 as f32 + s3 as f32 / 2.0,
        CenterEstimate::Coarse => {
            let offset = (s1 as f32 + s2 as f32 + s3 as f32 / 2.0) as usize;
            ((start + offset) / 2) as f32
        }
    }
}

fn is_finder_polarity(window: &[Run]) -> bool {
    window[0].is_dark
        && !window[1].is_dark
        && window[2].is_dark
        && !window[3].is_dark
        && window[4].is_dark
}

/// Test every dark-light-dark-light-dark window of `runs`, left to right
///
/// Windows overlap; each is judged on its own.
pub fn scan_runs(runs: &[Run], mode: CenterEstimate) -> Vec<CrossSection> {
    runs.windows(5)
        .enumerate()
        .filter(|(_, window)| is_finder_polarity(window))
        .filter_map(|(run_index, window)| {
            let lengths = [
                window[0].length,
                window[1].length,
                window[2].length,
                window[3].length,
                window[4].length,
            ];
            let module_size = check_ratios(lengths)?;
            Some(CrossSection {
                run_index,
                center_x: estimate_center_x(window[0].start, lengths, mode),
                module_size,
            })
        })
        .collect()
}
