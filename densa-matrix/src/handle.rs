//! Handle-style API over optional matrices
//!
//! Each function takes its operands as `Option`s so an absent handle is a
//! reportable failure instead of a type error. They check presence first and
//! then delegate to the methods on [`Matrix`].

use densa_core::{MatrixError, MatrixResult};
use tracing::debug;
use crate::types::Matrix;

fn present<T>(handle: Option<T>, op: &'static str) -> MatrixResult<T> {
    handle.ok_or_else(|| {
        debug!(op, "absent matrix handle");
        MatrixError::Absent { op }
    })
}

/// Allocate a zero-filled `height x width` matrix
pub fn create(height: usize, width: usize) -> MatrixResult<Matrix> {
    Matrix::zeros(height, width)
}

/// Deep copy of `source`
pub fn copy(source: Option<&Matrix>) -> MatrixResult<Matrix> {
    present(source, "copy")?.try_copy()
}

/// Release `matrix`. Absent is a no-op.
pub fn destroy(matrix: Option<Matrix>) {
    if let Some(m) = matrix {
        m.destroy();
    }
}

pub fn get_height(matrix: Option<&Matrix>) -> MatrixResult<usize> {
    Ok(present(matrix, "get_height")?.height())
}

pub fn get_width(matrix: Option<&Matrix>) -> MatrixResult<usize> {
    Ok(present(matrix, "get_width")?.width())
}

pub fn set_value(matrix: Option<&mut Matrix>, row: usize, col: usize, value: f64) -> MatrixResult<()> {
    present(matrix, "set_value")?.set(row, col, value)
}

pub fn get_value(matrix: Option<&Matrix>, row: usize, col: usize) -> MatrixResult<f64> {
    present(matrix, "get_value")?.get(row, col)
}

pub fn add(lhs: Option<&Matrix>, rhs: Option<&Matrix>) -> MatrixResult<Matrix> {
    let lhs = present(lhs, "add")?;
    let rhs = present(rhs, "add")?;
    lhs.add(rhs)
}

pub fn multiply_matrices(lhs: Option<&Matrix>, rhs: Option<&Matrix>) -> MatrixResult<Matrix> {
    let lhs = present(lhs, "multiply_matrices")?;
    let rhs = present(rhs, "multiply_matrices")?;
    lhs.matmul(rhs)
}

/// Scale `matrix` in place
pub fn multiply_with_scalar(matrix: Option<&mut Matrix>, scalar: f64) -> MatrixResult<()> {
    present(matrix, "multiply_with_scalar")?.scale_in_place(scalar);
    Ok(())
}
