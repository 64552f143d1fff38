//! Matrix arithmetic: addition, product, scalar scaling

use densa_core::{MatrixError, MatrixResult};
use tracing::debug;
use crate::types::Matrix;

impl Matrix {
    /// Elementwise sum of two matrices of identical shape
    pub fn add(&self, rhs: &Matrix) -> MatrixResult<Matrix> {
        if self.shape() != rhs.shape() {
            debug!(lhs = ?self.shape(), rhs = ?rhs.shape(), "add: shape mismatch");
            return Err(MatrixError::ShapeMismatch {
                op: "add",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        let mut result = Matrix::zeros(self.height(), self.width())?;
        for ((out, a), b) in result
            .as_mut_slice()
            .iter_mut()
            .zip(self.as_slice())
            .zip(rhs.as_slice())
        {
            *out = a + b;
        }
        Ok(result)
    }

    /// Matrix product `self × rhs`
    ///
    /// Requires `self.width() == rhs.height()`. The result is
    /// `self.height() × rhs.width()`.
    pub fn matmul(&self, rhs: &Matrix) -> MatrixResult<Matrix> {
        if self.width() != rhs.height() {
            debug!(lhs = ?self.shape(), rhs = ?rhs.shape(), "matmul: inner dimension mismatch");
            return Err(MatrixError::ShapeMismatch {
                op: "matmul",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        let (m, n) = (self.height(), rhs.width());
        let inner = self.width();
        let mut result = Matrix::zeros(m, n)?;
        let a = self.as_slice();
        let b = rhs.as_slice();
        let out = result.as_mut_slice();

        for i in 0..m {
            for j in 0..n {
                let mut sum = 0.0;
                for k in 0..inner {
                    sum += a[i * inner + k] * b[k * n + j];
                }
                out[i * n + j] = sum;
            }
        }
        Ok(result)
    }

    /// Multiply every entry by `scalar`, in place
    pub fn scale_in_place(&mut self, scalar: f64) {
        for v in self.as_mut_slice() {
            *v *= scalar;
        }
    }
}
