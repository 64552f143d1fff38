//! Densa Matrix - Dense f64 matrices
//!
//! Provides a small, checked matrix type:
//! - Construction (zeros, from_rows, from_vec, try_copy)
//! - Access (height, width, shape, get, set, row)
//! - Arithmetic (add, matmul, scale_in_place)
//! - nalgebra interop (to_dmatrix, from_dmatrix)
//!
//! Every fallible call returns a `MatrixResult`, which collapses to a
//! Success/Failure `ErrorCode`. The [`handle`] module exposes the same
//! operations over optional handles.

mod types;
mod ops;
mod convert;
pub mod handle;

pub use types::Matrix;
pub use densa_core::{ErrorCode, MatrixError, MatrixResult, Outcome, Limits};

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
        proptest::collection::vec(-100.0f64..100.0, rows * cols)
            .prop_map(move |data| Matrix::from_vec(rows, cols, data).unwrap())
    }

    fn shaped_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
        (0usize..6, 0usize..6).prop_flat_map(|(r, c)| (matrix_strategy(r, c), matrix_strategy(r, c)))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn zeros_are_zero(h in 0usize..12, w in 0usize..12) {
            let m = Matrix::zeros(h, w).unwrap();
            prop_assert_eq!(m.shape(), (h, w));
            for i in 0..h {
                for j in 0..w {
                    prop_assert_eq!(m.get(i, j).unwrap(), 0.0);
                }
            }
        }

        #[test]
        fn copy_is_faithful_and_isolated((a, _) in shaped_pair(), v in -1.0e3f64..1.0e3) {
            let mut c = a.try_copy().unwrap();
            prop_assert_eq!(&c, &a);
            if c.height() > 0 && c.width() > 0 {
                let before = a.get(0, 0).unwrap();
                c.set(0, 0, before + 1.0 + v.abs()).unwrap();
                prop_assert_eq!(a.get(0, 0).unwrap(), before);
            }
        }

        #[test]
        fn add_commutes_and_keeps_shape((a, b) in shaped_pair()) {
            let ab = a.add(&b).unwrap();
            let ba = b.add(&a).unwrap();
            prop_assert_eq!(ab.shape(), a.shape());
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn scale_touches_every_entry(h in 0usize..8, w in 0usize..8, s in -10.0f64..10.0) {
            let mut m = Matrix::from_vec(h, w, vec![1.0; h * w]).unwrap();
            m.scale_in_place(s);
            prop_assert!(m.as_slice().iter().all(|&v| v == s));
        }

        #[test]
        fn matmul_agrees_with_nalgebra(
            a in matrix_strategy(3, 4),
            b in matrix_strategy(4, 2)
        ) {
            let ours = a.matmul(&b).unwrap();
            let theirs = a.to_dmatrix() * b.to_dmatrix();
            prop_assert_eq!(ours.shape(), (3, 2));
            for i in 0..3 {
                for j in 0..2 {
                    let diff = (ours.get(i, j).unwrap() - theirs[(i, j)]).abs();
                    prop_assert!(diff < 1e-6, "mismatch at ({}, {})", i, j);
                }
            }
        }
    }
}
