//! Vertical confirmation of horizontal cross-sections
//!
//! Only the central block is checked in the column; the outer 1:1 rings
//! are not verified vertically. [`BlockPolarity::Any`] accepts a light run of
//! the right length as well, which is how the coarse estimate confirms.

use super::runs::{Run, column_runs};
use crate::models::BinaryGrid;

/// Smallest rounded module size worth confirming
pub const MIN_MODULE_SIZE: usize = 3;
/// Half-height of the column window, in modules
pub const WINDOW_MODULES: usize = 4;
/// Allowed deviation of the central run from 3 modules, in modules
pub const CENTER_TOLERANCE: f32 = 1.2;

/// Which column runs may confirm a cross-section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockPolarity {
    /// Only dark runs
    Dark,
    /// Any run of the right length
    Any,
}

impl BlockPolarity {
    fn accepts(self, run: &Run) -> bool {
        match self {
            BlockPolarity::Dark => run.is_dark,
            BlockPolarity::Any => true,
        }
    }
}

/// Look for a run of ~3 modules in column `x` that spans `center_y`
///
/// Returns the first qualifying run top to bottom, or `None` when the module
/// size rounds below [`MIN_MODULE_SIZE`], the column is outside the grid, or
/// no run qualifies.
pub fn confirm(
    grid: &BinaryGrid,
    x: usize,
    center_y: usize,
    module_size: f32,
    polarity: BlockPolarity,
) -> Option<Run> {
    if x >= grid.width() || center_y >= grid.height() {
        return None;
    }

    // round half up, module_size is positive
    let module = (module_size + 0.5) as usize;
    if module < MIN_MODULE_SIZE {
        return None;
    }

    let reach = module * WINDOW_MODULES;
    let top = center_y.saturating_sub(reach);
    let bottom = (center_y + reach).min(grid.height() - 1);

    let expected = module_size * 3.0;
    let tolerance = module_size * CENTER_TOLERANCE;

    column_runs(grid, x, top, bottom).into_iter().find(|run| {
        polarity.accepts(run)
            && (run.length as f32 - expected).abs() < tolerance
            && run.start <= center_y
            && run.end() >= center_y
    })
}
