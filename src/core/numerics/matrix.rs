//! Dense row-major matrix storage and constructors.

use std::fmt;

use rand::Rng;

use crate::core::error::NumericsError;

/// Dense real matrix. `data` holds exactly `rows` rows of `cols` entries each.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    /// Creates a zero-filled `rows` x `cols` matrix; dimensions must be at least 1x1.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, NumericsError> {
        if rows == 0 || cols == 0 {
            return Err(NumericsError::invalid_argument(
                "matrix dimensions must be at least 1x1",
            ));
        }
        Ok(Self {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        })
    }

    /// Creates an n x n identity matrix.
    pub fn identity(n: usize) -> Result<Self, NumericsError> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i][i] = 1.0;
        }
        Ok(m)
    }

    /// Builds a matrix from explicit rows; rows must be nonempty and rectangular.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, NumericsError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(|r| r.len()).unwrap_or(0);
        if n_rows == 0 || n_cols == 0 {
            return Err(NumericsError::invalid_argument(
                "matrix dimensions must be at least 1x1",
            ));
        }
        if rows.iter().any(|r| r.len() != n_cols) {
            return Err(NumericsError::invalid_argument(
                "all rows must have the same length",
            ));
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data: rows,
        })
    }

    /// Fills a fresh matrix with uniform entries from `[lo, hi)`.
    pub fn random(rows: usize, cols: usize, lo: f64, hi: f64) -> Result<Self, NumericsError> {
        if !(lo < hi) {
            return Err(NumericsError::invalid_argument("empty random range"));
        }
        let mut m = Self::zeros(rows, cols)?;
        let mut rng = rand::thread_rng();
        for row in m.data.iter_mut() {
            for v in row.iter_mut() {
                *v = rng.gen_range(lo..hi);
            }
        }
        Ok(m)
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Bounds-checked element read.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.data.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Bounds-checked element write.
    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<(), NumericsError> {
        if i >= self.rows || j >= self.cols {
            return Err(NumericsError::invalid_argument("element index out of bounds"));
        }
        self.data[i][j] = value;
        Ok(())
    }
}

impl fmt::Display for Matrix {
    /// Dimensions header, then each row with entries to 2 decimals, tab-separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix ({}x{}):", self.rows, self.cols)?;
        for row in &self.data {
            for v in row {
                write!(f, "{:.2}\t", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
