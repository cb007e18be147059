use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, Result};
use crate::traits::Matrix;

/// Represents a dense matrix of `f64` stored in row-major order on the CPU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDenseMatrix")]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>, // Data stored row-major: data[row * cols + col]
}

impl DenseMatrix {
    /// Allocates a zero-filled `rows x cols` matrix.
    ///
    /// Zero extents are legal and produce an empty buffer.
    ///
    /// # Errors
    /// Returns `MatrixError::AllocationError` if the element count overflows or the
    /// buffer cannot be reserved.
    pub fn create(rows: usize, cols: usize) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or(MatrixError::AllocationError { rows, cols })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatrixError::AllocationError { rows, cols })?;
        data.resize(len, 0.0);
        Ok(Self { rows, cols, data })
    }

    /// Creates a new DenseMatrix from raw data, dimensions, assuming row-major order.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MatrixError::DimensionMismatch {
                op: "new",
                left: (rows, cols),
                right: (data.len(), 1),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a new DenseMatrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Builds a matrix from a slice of rows. Every row must have the same length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(MatrixError::DimensionMismatch {
                    op: "from_rows",
                    left: (1, cols),
                    right: (1, row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns a slice view of the underlying data vector.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Returns a mutable slice view of the underlying data vector.
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consumes the matrix and hands back its row-major buffer.
    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    /// Returns row `row` as a slice.
    pub fn row(&self, row: usize) -> Result<&[f64]> {
        if row >= self.rows {
            return Err(self.range_error(row, 0));
        }
        let start = row * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    /// Gets the element at the specified row and column.
    ///
    /// # Errors
    /// Returns `MatrixError::RangeError` if the indices are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.offset(row, col).map(|idx| self.data[idx])
    }

    /// Sets the element at the specified row and column.
    ///
    /// # Errors
    /// Returns `MatrixError::RangeError` if the indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let idx = self.offset(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(self.range_error(row, col))
        }
    }

    fn range_error(&self, row: usize, col: usize) -> MatrixError {
        MatrixError::RangeError {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

// Implement the generic Matrix trait
impl Matrix for DenseMatrix {
    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

/// Wire shape used by serde; validated into a `DenseMatrix` on the way in.
#[derive(Deserialize)]
struct RawDenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<RawDenseMatrix> for DenseMatrix {
    type Error = MatrixError;

    fn try_from(raw: RawDenseMatrix) -> Result<Self> {
        DenseMatrix::new(raw.rows, raw.cols, raw.data)
    }
}
