//! Core matrix type

use std::fmt;
use densa_core::{Limits, MatrixError, MatrixResult};
use tracing::{debug, trace};

/// Dense matrix of `f64` with a single row-major buffer
///
/// Entry `(row, col)` lives at `row * width + col`. The shape never changes
/// after construction.
#[derive(Debug, PartialEq)]
pub struct Matrix {
    height: usize,
    width: usize,
    values: Vec<f64>,
}

/// Reserve and zero-fill `entries` values without aborting on exhaustion
pub(crate) fn allocate(entries: usize) -> MatrixResult<Vec<f64>> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(entries)
        .map_err(|_| MatrixError::Allocation { entries })?;
    values.resize(entries, 0.0);
    Ok(values)
}

/// Policy for plain construction: only `height * width` overflow is rejected
pub(crate) fn creation_limits() -> Limits {
    Limits::unbounded()
}

impl Matrix {
    /// Create a zero-filled `height x width` matrix
    ///
    /// Fails only if the entry count overflows or the allocation cannot be
    /// satisfied.
    pub fn zeros(height: usize, width: usize) -> MatrixResult<Self> {
        Self::zeros_with(height, width, &creation_limits())
    }

    /// Create a zero-filled matrix under an explicit allocation policy
    pub fn zeros_with(height: usize, width: usize, limits: &Limits) -> MatrixResult<Self> {
        let entries = limits.check(height, width).map_err(|e| {
            debug!(height, width, limit = limits.max_entries, "matrix: rejected by limits");
            e
        })?;
        let values = allocate(entries).map_err(|e| {
            debug!(height, width, entries, "matrix: allocation failed");
            e
        })?;
        trace!(height, width, entries, "matrix: allocated");
        Ok(Matrix { height, width, values })
    }

    /// Build from a row-major buffer of exactly `height * width` values
    pub fn from_vec(height: usize, width: usize, values: Vec<f64>) -> MatrixResult<Self> {
        match height.checked_mul(width) {
            Some(n) if n == values.len() => Ok(Matrix { height, width, values }),
            _ => Err(MatrixError::BufferLength {
                height,
                width,
                len: values.len(),
            }),
        }
    }

    /// Build from literal rows. All rows must have the same length.
    pub fn from_rows(rows: &[&[f64]]) -> MatrixResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                debug!(row = i, len = row.len(), expected = width, "from_rows: ragged input");
                return Err(MatrixError::ShapeMismatch {
                    op: "from_rows",
                    lhs: (height, width),
                    rhs: (i, row.len()),
                });
            }
        }

        let mut m = Self::zeros(height, width)?;
        for (dst, src) in m.values.chunks_exact_mut(width.max(1)).zip(rows) {
            dst.copy_from_slice(src);
        }
        Ok(m)
    }

    /// Deep copy into freshly allocated storage
    ///
    /// Unlike `Clone`, a failed allocation is reported rather than aborting.
    pub fn try_copy(&self) -> MatrixResult<Self> {
        let mut values = allocate(self.values.len())?;
        values.copy_from_slice(&self.values);
        Ok(Matrix { height: self.height, width: self.width, values })
    }

    /// Release the backing storage
    pub fn destroy(self) {
        trace!(height = self.height, width = self.width, "matrix: released");
        drop(self);
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Row-major view of every entry
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Get one row, if in bounds
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.values[start..start + self.width])
    }

    fn index(&self, row: usize, col: usize) -> MatrixResult<usize> {
        if row < self.height && col < self.width {
            Ok(row * self.width + col)
        } else {
            debug!(row, col, height = self.height, width = self.width, "matrix: index out of bounds");
            Err(MatrixError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            })
        }
    }

    /// Get entry at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> MatrixResult<f64> {
        let i = self.index(row, col)?;
        Ok(self.values[i])
    }

    /// Set entry at `(row, col)`. Out of range leaves the matrix untouched.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> MatrixResult<()> {
        let i = self.index(row, col)?;
        self.values[i] = value;
        Ok(())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.height {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for j in 0..self.width {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.values[i * self.width + j])?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
