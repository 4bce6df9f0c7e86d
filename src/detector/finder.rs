//! Finder pattern detection: row scan, vertical confirmation, de-duplication

use rayon::prelude::*;

use super::dedup::{dedup_in_scan_order, select};
use super::horizontal::scan_runs;
use super::runs::row_runs;
use super::vertical::{BlockPolarity, confirm};
use crate::config::{CenterEstimate, FinderConfig};
use crate::models::{BinaryGrid, FinderPattern};

/// Rows this close to the top or bottom edge are never scanned
pub const EDGE_MARGIN: usize = 5;

/// Counters collected during one detection call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectionStats {
    /// Rows run through the horizontal scanner
    pub rows_scanned: usize,
    /// Windows that passed the horizontal ratio test
    pub cross_sections: usize,
    /// Cross-sections confirmed vertically (raw candidates)
    pub confirmed: usize,
    /// Candidates left after de-duplication
    pub unique: usize,
    /// Patterns returned after selection
    pub returned: usize,
}

struct RowScan {
    cross_sections: usize,
    candidates: Vec<FinderPattern>,
}

/// Finder pattern detector
#[derive(Debug, Clone, Copy, Default)]
pub struct FinderDetector {
    config: FinderConfig,
}

impl FinderDetector {
    /// Create a detector with the given configuration
    pub fn new(config: FinderConfig) -> Self {
        Self { config }
    }

    /// Detector configured from `QR_FINDER_*` environment variables
    pub fn from_env() -> Self {
        Self::new(FinderConfig::from_env())
    }

    /// Active configuration
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Find up to three finder patterns, in scan order
    ///
    /// Fewer than three results is a normal outcome, not an error.
    pub fn detect(&self, grid: &BinaryGrid) -> Vec<FinderPattern> {
        self.detect_with_stats(grid).0
    }

    /// Like [`FinderDetector::detect`], also returning scan counters
    pub fn detect_with_stats(&self, grid: &BinaryGrid) -> (Vec<FinderPattern>, DetectionStats) {
        let _span =
            tracing::debug_span!("finder_scan", width = grid.width(), height = grid.height())
                .entered();

        let rows = self.scan_rows(grid);

        let mut stats = DetectionStats {
            rows_scanned: rows.len(),
            ..DetectionStats::default()
        };
        for row in &rows {
            stats.cross_sections += row.cross_sections;
            stats.confirmed += row.candidates.len();
        }

        let unique = dedup_in_scan_order(rows.into_iter().flat_map(|row| row.candidates));
        stats.unique = unique.len();

        let patterns = select(unique);
        stats.returned = patterns.len();

        tracing::debug!(
            rows = stats.rows_scanned,
            cross_sections = stats.cross_sections,
            confirmed = stats.confirmed,
            unique = stats.unique,
            returned = stats.returned,
            "finder scan complete"
        );

        (patterns, stats)
    }

    /// Every vertically confirmed candidate before de-duplication, in scan order
    pub fn raw_candidates(&self, grid: &BinaryGrid) -> Vec<FinderPattern> {
        self.scan_rows(grid)
            .into_iter()
            .flat_map(|row| row.candidates)
            .collect()
    }

    fn scan_rows(&self, grid: &BinaryGrid) -> Vec<RowScan> {
        let end = grid.height().saturating_sub(EDGE_MARGIN).max(EDGE_MARGIN);
        let rows = EDGE_MARGIN..end;

        // indexed collect keeps row order
        if self.config.parallel {
            rows.into_par_iter()
                .map(|y| self.scan_row(grid, y))
                .collect()
        } else {
            rows.map(|y| self.scan_row(grid, y)).collect()
        }
    }

    fn scan_row(&self, grid: &BinaryGrid, y: usize) -> RowScan {
        let runs = row_runs(grid, y);
        let cross_sections = scan_runs(&runs, self.config.center_estimate);
        // the coarse column often lands on light pixels and confirms there
        let polarity = match self.config.center_estimate {
            CenterEstimate::Refined => BlockPolarity::Dark,
            CenterEstimate::Coarse => BlockPolarity::Any,
        };

        let mut scan = RowScan {
            cross_sections: cross_sections.len(),
            candidates: Vec::new(),
        };

        for section in cross_sections {
            let column = section.center_x as usize;
            let Some(run) = confirm(grid, column, y, section.module_size, polarity) else {
                continue;
            };

            let center_y = match self.config.center_estimate {
                CenterEstimate::Refined => run.start as f32 + run.length as f32 / 2.0,
                CenterEstimate::Coarse => y as f32,
            };

            tracing::trace!(
                row = y,
                x = section.center_x,
                y = center_y,
                module_size = section.module_size,
                "finder candidate confirmed"
            );
            scan.candidates
                .push(FinderPattern::new(section.center_x, center_y, section.module_size));
        }

        scan
    }
}
