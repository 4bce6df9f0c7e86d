//! Run-length encoding of grid scan lines

use crate::models::BinaryGrid;

/// Maximal stretch of same-polarity cells along one scan line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Line coordinate of the first cell
    pub start: usize,
    /// Number of cells, always > 0
    pub length: usize,
    /// Polarity of every cell in the run
    pub is_dark: bool,
}

impl Run {
    /// Create a new run
    pub fn new(start: usize, length: usize, is_dark: bool) -> Self {
        Self {
            start,
            length,
            is_dark,
        }
    }

    /// One past the last cell
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Encode `samples` into alternating runs whose coordinates start at `origin`
///
/// The runs cover `[origin, origin + n)` without gaps. Empty input gives no runs.
pub fn extract_runs<I>(samples: I, origin: usize) -> Vec<Run>
where
    I: IntoIterator<Item = bool>,
{
    let mut samples = samples.into_iter();
    let Some(mut is_dark) = samples.next() else {
        return Vec::new();
    };

    let mut runs = Vec::new();
    let mut run_start = origin;
    let mut pos = origin + 1;

    for sample in samples {
        if sample != is_dark {
            runs.push(Run::new(run_start, pos - run_start, is_dark));
            run_start = pos;
            is_dark = sample;
        }
        pos += 1;
    }
    runs.push(Run::new(run_start, pos - run_start, is_dark));

    runs
}

/// Runs across the full row `y`
pub fn row_runs(grid: &BinaryGrid, y: usize) -> Vec<Run> {
    extract_runs((0..grid.width()).map(|x| grid.get(x, y)), 0)
}

/// Runs down column `x` over the inclusive window `[top, bottom]`
pub fn column_runs(grid: &BinaryGrid, x: usize, top: usize, bottom: usize) -> Vec<Run> {
    extract_runs((top..=bottom).map(|y| grid.get(x, y)), top)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lengths(runs: &[Run]) -> Vec<usize> {
        runs.iter().map(|r| r.length).collect()
    }

    #[test]
    fn test_alternating_runs_cover_line() {
        let samples = [true, true, false, true, true, true, false, false];
        let runs = extract_runs(samples, 0);

        assert_eq!(lengths(&runs), vec![2, 1, 3, 2]);
        assert_eq!(runs[0], Run::new(0, 2, true));
        assert_eq!(runs[3], Run::new(6, 2, false));

        for pair in runs.windows(2) {
            assert_ne!(pair[0].is_dark, pair[1].is_dark);
            assert_eq!(pair[0].end(), pair[1].start);
        }
        assert_eq!(runs.last().map(Run::end), Some(samples.len()));
    }

    #[test]
    fn test_uniform_line_is_single_run() {
        let runs = extract_runs([false; 12], 0);
        assert_eq!(runs, vec![Run::new(0, 12, false)]);

        let runs = extract_runs([true], 0);
        assert_eq!(runs, vec![Run::new(0, 1, true)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_runs(std::iter::empty(), 3).is_empty());
    }

    #[test]
    fn test_origin_offsets_starts() {
        let runs = extract_runs([false, true, true], 10);
        assert_eq!(runs, vec![Run::new(10, 1, false), Run::new(11, 2, true)]);
    }

    #[test]
    fn test_row_and_column_runs() {
        let mut grid = BinaryGrid::new(6, 6);
        grid.fill_rect(2, 1, 3, 4, true);

        let row = row_runs(&grid, 2);
        assert_eq!(
            row,
            vec![
                Run::new(0, 2, false),
                Run::new(2, 3, true),
                Run::new(5, 1, false)
            ]
        );

        let col = column_runs(&grid, 3, 2, 5);
        assert_eq!(col, vec![Run::new(2, 3, true), Run::new(5, 1, false)]);
    }
}
