//! nalgebra interop

use densa_core::MatrixResult;
use nalgebra::DMatrix;
use crate::types::Matrix;

impl Matrix {
    /// Copy into a nalgebra `DMatrix` (column-major)
    pub fn to_dmatrix(&self) -> DMatrix<f64> {
        DMatrix::from_row_slice(self.height(), self.width(), self.as_slice())
    }

    /// Copy out of a nalgebra `DMatrix`
    pub fn from_dmatrix(data: &DMatrix<f64>) -> MatrixResult<Self> {
        let mut m = Matrix::zeros(data.nrows(), data.ncols())?;
        let width = m.width();
        for (idx, v) in m.as_mut_slice().iter_mut().enumerate() {
            *v = data[(idx / width, idx % width)];
        }
        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_layout() {
        let m = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
        let d = m.to_dmatrix();
        assert_eq!(d.nrows(), 2);
        assert_eq!(d.ncols(), 3);
        assert_eq!(d[(0, 2)], 3.0);
        assert_eq!(d[(1, 0)], 4.0);
        assert_eq!(Matrix::from_dmatrix(&d).unwrap(), m);
    }

    #[test]
    fn test_from_dmatrix_degenerate() {
        let d = DMatrix::<f64>::zeros(0, 4);
        let m = Matrix::from_dmatrix(&d).unwrap();
        assert_eq!(m.shape(), (0, 4));
    }
}
