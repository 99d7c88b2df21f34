use serde::Serialize;
use thiserror::Error;

/// Sequences of unequal length cannot form a rectangle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("sequence {position} has length {found}, expected {expected}")]
pub struct ShapeError {
    pub position: usize,
    pub expected: usize,
    pub found: usize,
}

/// Dense `rows x cols` matrix of samples, stored row-major.
///
/// A matrix without elements is always `0 x 0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl DataMatrix {
    /// The `0 x 0` matrix.
    pub fn empty() -> Self {
        Self::default()
    }

    fn with_values(rows: usize, cols: usize, values: Vec<f64>) -> Self {
        if rows == 0 || cols == 0 {
            return Self::empty();
        }
        Self { rows, cols, values }
    }

    /// Build from rows of equal width.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ShapeError> {
        let cols = rows.first().map_or(0, Vec::len);
        let n_rows = rows.len();
        let mut values = Vec::with_capacity(n_rows * cols);
        for (position, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(ShapeError {
                    position,
                    expected: cols,
                    found: row.len(),
                });
            }
            values.extend(row);
        }
        Ok(Self::with_values(n_rows, cols, values))
    }

    /// Build from columns of equal length; column `j` fills matrix column `j`.
    pub fn from_columns<C: AsRef<[f64]>>(columns: &[C]) -> Result<Self, ShapeError> {
        let rows = columns.first().map_or(0, |c| c.as_ref().len());
        for (position, column) in columns.iter().enumerate() {
            let found = column.as_ref().len();
            if found != rows {
                return Err(ShapeError {
                    position,
                    expected: rows,
                    found,
                });
            }
        }
        let cols = columns.len();
        let mut values = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            values.extend(columns.iter().map(|c| c.as_ref()[r]));
        }
        Ok(Self::with_values(rows, cols, values))
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.values[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        (row < self.rows).then(|| &self.values[row * self.cols..(row + 1) * self.cols])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact(0) panics; an empty matrix has no values anyway.
        self.values.chunks_exact(self.cols.max(1))
    }

    pub fn column(&self, col: usize) -> Option<Vec<f64>> {
        (col < self.cols).then(|| self.rows().map(|r| r[col]).collect())
    }

    /// Unpack into one vector per column.
    pub fn columns(&self) -> Vec<Vec<f64>> {
        (0..self.cols)
            .map(|c| self.rows().map(|r| r[c]).collect())
            .collect()
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Columns become rows.
    pub fn transpose(&self) -> Self {
        let mut values = Vec::with_capacity(self.values.len());
        for c in 0..self.cols {
            values.extend(self.rows().map(|r| r[c]));
        }
        Self::with_values(self.cols, self.rows, values)
    }

    /// Same shape and every element within `tol`.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.shape() == other.shape()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| (a - b).abs() <= tol)
    }
}
