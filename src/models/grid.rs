use crate::error::GridError;

/// Binary occupancy grid stored as packed bits, `true` = dark
///
/// Cells are laid out row-major (`y * width + x`). Detection only ever
/// borrows a grid, so it can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BinaryGrid {
    /// Create an all-light grid
    ///
    /// # Panics
    /// If either dimension is zero or `width * height` overflows. Use
    /// [`BinaryGrid::from_fn`] for a fallible constructor.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::check_dimensions(width, height) {
            Ok(cells) => Self::blank(width, height, cells),
            Err(err) => panic!("{}", err),
        }
    }

    fn blank(width: usize, height: usize, cells: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; cells.div_ceil(8)],
        }
    }

    /// Validated cell count
    fn check_dimensions(width: usize, height: usize) -> Result<usize, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty { width, height });
        }
        width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })
    }

    /// Build a grid from a row-major cell buffer of exactly `width * height` values
    pub fn from_cells(width: usize, height: usize, cells: &[bool]) -> Result<Self, GridError> {
        let expected = Self::check_dimensions(width, height)?;
        if cells.len() != expected {
            return Err(GridError::SizeMismatch {
                width,
                height,
                expected,
                actual: cells.len(),
            });
        }

        let mut grid = Self::blank(width, height, expected);
        for (index, _) in cells.iter().enumerate().filter(|(_, dark)| **dark) {
            grid.data[index / 8] |= 1 << (index % 8);
        }
        Ok(grid)
    }

    /// Build a grid from equally sized rows, top to bottom
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let cells = Self::check_dimensions(width, height)?;

        let mut grid = Self::blank(width, height, cells);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    actual: row.len(),
                });
            }
            for (x, &dark) in row.iter().enumerate() {
                grid.set(x, y, dark);
            }
        }
        Ok(grid)
    }

    /// Build a grid by evaluating `f(x, y)` for every cell
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self, GridError>
    where
        F: FnMut(usize, usize) -> bool,
    {
        let cells = Self::check_dimensions(width, height)?;
        let mut grid = Self::blank(width, height, cells);
        for y in 0..height {
            for x in 0..width {
                grid.set(x, y, f(x, y));
            }
        }
        Ok(grid)
    }

    /// Get grid width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get grid height
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn bit_index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Get cell at (x, y)
    ///
    /// # Panics
    /// If (x, y) lies outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        let index = self.bit_index(x, y);
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set cell at (x, y)
    ///
    /// # Panics
    /// If (x, y) lies outside the grid.
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        let index = self.bit_index(x, y);
        if value {
            self.data[index / 8] |= 1 << (index % 8);
        } else {
            self.data[index / 8] &= !(1 << (index % 8));
        }
    }

    /// Set every cell of the `w` x `h` rectangle at (x, y), clipped to the grid
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, value: bool) {
        let x_end = (x + w).min(self.width);
        let y_end = (y + h).min(self.height);
        for yy in y..y_end {
            for xx in x..x_end {
                self.set(xx, yy, value);
            }
        }
    }

    /// Number of dark cells
    pub fn dark_count(&self) -> usize {
        let full_bytes = (self.width * self.height) / 8;
        let tail_bits = (self.width * self.height) % 8;
        let mut count: usize = self.data[..full_bytes]
            .iter()
            .map(|b| b.count_ones() as usize)
            .sum();
        if tail_bits > 0 {
            let mask = (1u8 << tail_bits) - 1;
            count += (self.data[full_bytes] & mask).count_ones() as usize;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_grid() {
        let mut grid = BinaryGrid::new(8, 8);
        assert_eq!(grid.width(), 8);
        assert_eq!(grid.height(), 8);

        grid.set(3, 4, true);
        assert!(grid.get(3, 4));
        assert!(!grid.get(3, 3));

        grid.set(3, 4, false);
        assert!(!grid.get(3, 4));
        assert_eq!(grid.dark_count(), 0);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_bounds_get_panics() {
        let grid = BinaryGrid::new(8, 8);
        grid.get(8, 0);
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_zero_sized_new_panics() {
        BinaryGrid::new(0, 4);
    }

    #[test]
    #[should_panic(expected = "more cells than can be addressed")]
    fn test_overflowing_new_panics() {
        BinaryGrid::new(usize::MAX, 2);
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        let too_large = GridError::TooLarge {
            width: usize::MAX,
            height: 2,
        };
        assert_eq!(
            BinaryGrid::from_cells(usize::MAX, 2, &[]),
            Err(too_large.clone())
        );
        assert_eq!(
            BinaryGrid::from_fn(usize::MAX, 2, |_, _| false),
            Err(too_large)
        );
    }

    #[test]
    fn test_from_cells_row_major() {
        // 3x2, row-major
        let cells = [true, false, false, false, true, true];
        let grid = BinaryGrid::from_cells(3, 2, &cells).unwrap();
        assert!(grid.get(0, 0));
        assert!(!grid.get(1, 0));
        assert!(grid.get(1, 1));
        assert!(grid.get(2, 1));
        assert_eq!(grid.dark_count(), 3);
    }

    #[test]
    fn test_from_cells_rejects_bad_input() {
        assert_eq!(
            BinaryGrid::from_cells(3, 3, &[false; 8]),
            Err(GridError::SizeMismatch {
                width: 3,
                height: 3,
                expected: 9,
                actual: 8,
            })
        );
        assert_eq!(
            BinaryGrid::from_cells(0, 3, &[]),
            Err(GridError::Empty {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn test_from_rows() {
        let grid = BinaryGrid::from_rows(&[[true, false], [false, true]]).unwrap();
        assert!(grid.get(0, 0));
        assert!(grid.get(1, 1));
        assert!(!grid.get(1, 0));

        let ragged: Vec<Vec<bool>> = vec![vec![true, false], vec![true]];
        assert_eq!(
            BinaryGrid::from_rows(&ragged),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1,
            })
        );

        let empty: Vec<Vec<bool>> = Vec::new();
        assert!(matches!(
            BinaryGrid::from_rows(&empty),
            Err(GridError::Empty { .. })
        ));
    }

    #[test]
    fn test_from_fn_and_fill_rect() {
        let checker = BinaryGrid::from_fn(4, 4, |x, y| (x + y) % 2 == 0).unwrap();
        assert_eq!(checker.dark_count(), 8);

        let mut grid = BinaryGrid::new(10, 10);
        grid.fill_rect(8, 8, 5, 5, true); // clipped to 2x2
        assert_eq!(grid.dark_count(), 4);
        assert!(grid.get(9, 9));
    }

    #[test]
    fn test_dark_count_partial_byte() {
        let grid = BinaryGrid::from_fn(3, 3, |_, _| true).unwrap();
        assert_eq!(grid.dark_count(), 9);
    }
}
