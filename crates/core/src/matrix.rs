//! Matrix module - orientation grids and their quarter-turn rotations
//!
//! A [`Grid`] is a small rectangular 0/1 matrix stored row-major, with row 0
//! at the top. Rotation is transpose + reverse:
//!
//! - clockwise: transpose, then reverse the order of columns
//! - counter-clockwise: transpose, then reverse the order of rows
//!
//! [`occupied_local_cells`] flips the top-down row order into a bottom-up y
//! axis (`y = rows - 1 - r`) so a rotated grid lines up with the board's
//! bottom-left origin.

use tetromnom_types::Pos;

/// Rectangular 0/1 matrix, row-major, row 0 on top
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl Grid {
    /// Build a grid from row-major data
    ///
    /// Returns `None` if `data` does not hold exactly `rows * cols` values or
    /// if any value is not 0 or 1.
    pub fn new(rows: usize, cols: usize, data: Vec<u8>) -> Option<Self> {
        if data.len() != rows * cols || data.iter().any(|&v| v > 1) {
            return None;
        }
        if rows == 0 || cols == 0 {
            return Some(Self::empty());
        }
        Some(Self { rows, cols, data })
    }

    /// Build a grid from a slice of rows
    ///
    /// Returns `None` for ragged input.
    ///
    /// ```
    /// use tetromnom_core::matrix::Grid;
    ///
    /// let t = Grid::from_rows(&[&[1, 1, 1], &[0, 1, 0]]).unwrap();
    /// assert_eq!(t.dims(), (2, 3));
    /// assert!(Grid::from_rows(&[&[1, 1], &[1]]).is_none());
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let cols = rows.first().map_or(0, |r| r.len());
        if rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self::new(rows.len(), cols, data)
    }

    /// The 0×0 grid
    pub fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `(rows, cols)`
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(r, c)`, `None` when out of range
    pub fn get(&self, r: usize, c: usize) -> Option<u8> {
        if r >= self.rows || c >= self.cols {
            return None;
        }
        Some(self.data[r * self.cols + c])
    }

    #[inline(always)]
    fn at(&self, r: usize, c: usize) -> u8 {
        self.data[r * self.cols + c]
    }

    /// Number of occupied sub-cells
    pub fn occupied_count(&self) -> usize {
        self.data.iter().filter(|&&v| v == 1).count()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self.at(r, c));
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    fn reverse_cols(&mut self) {
        for row in self.data.chunks_mut(self.cols.max(1)) {
            row.reverse();
        }
    }

    fn reverse_rows(&mut self) {
        let cols = self.cols;
        for r in 0..self.rows / 2 {
            let mirror = self.rows - 1 - r;
            for c in 0..cols {
                self.data.swap(r * cols + c, mirror * cols + c);
            }
        }
    }

    /// Quarter turn clockwise
    pub fn rotate_cw(&self) -> Self {
        let mut t = self.transpose();
        t.reverse_cols();
        t
    }

    /// Quarter turn counter-clockwise
    pub fn rotate_ccw(&self) -> Self {
        let mut t = self.transpose();
        t.reverse_rows();
        t
    }

    /// Local coordinates of every occupied sub-cell
    ///
    /// Matrix cell `(r, c)` maps to `(x = c, y = rows - 1 - r)`. Cells are
    /// returned bottom row first, left to right.
    pub fn occupied_local_cells(&self) -> Vec<Pos> {
        let mut cells = Vec::with_capacity(self.occupied_count());
        for r in (0..self.rows).rev() {
            let y = (self.rows - 1 - r) as i32;
            for c in 0..self.cols {
                if self.at(r, c) == 1 {
                    cells.push(Pos::new(c as i32, y));
                }
            }
        }
        cells
    }
}

/// Rotate `grid` a quarter turn clockwise
pub fn rotate_cw(grid: &Grid) -> Grid {
    grid.rotate_cw()
}

/// Rotate `grid` a quarter turn counter-clockwise
pub fn rotate_ccw(grid: &Grid) -> Grid {
    grid.rotate_ccw()
}

/// See [`Grid::occupied_local_cells`]
pub fn occupied_local_cells(grid: &Grid) -> Vec<Pos> {
    grid.occupied_local_cells()
}
