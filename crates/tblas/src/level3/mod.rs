//! Level 3 kernels: matrix-matrix operations.
//!
//! All kernels collapse to a pure β-scaling of the output when α = 0 or the
//! inner dimension is zero; with β = 0 the output is then overwritten
//! without being read, and with β = 1 it is left untouched.
//!
//! ```
//! use tblas::level3::gemm;
//! use tblas::view::{DenseView, DenseViewMut};
//! use tblas::Op;
//!
//! let a = [1.0, 3.0, 2.0, 4.0]; // [[1, 2], [3, 4]]
//! let b = [1.0, 0.0, 0.0, 1.0];
//! let mut c = [0.0; 4];
//! gemm(
//!     Op::NoTrans,
//!     Op::NoTrans,
//!     1.0,
//!     &DenseView::col_major(&a, 2, 2).unwrap(),
//!     &DenseView::col_major(&b, 2, 2).unwrap(),
//!     0.0,
//!     &mut DenseViewMut::col_major(&mut c, 2, 2).unwrap(),
//! )
//! .unwrap();
//! assert_eq!(c, a);
//! ```

mod gemm;
mod rank_k;
mod symm;
mod triangular;

pub use gemm::gemm;
pub use rank_k::{her2k, herk, syr2k, syrk};
pub use symm::{hemm, symm};
pub use triangular::{trmm, trsm};

use crate::options::{Layout, Op};
use crate::scalar::{Scalar, conj_if};
use crate::view::{Matrix, MatrixMut};

/// c(i, j) ← β·c(i, j), writing zero without reading when β = 0.
#[inline]
pub(crate) fn scale_entry<T, C>(beta: T, c: &mut C, i: usize, j: usize)
where
    T: Scalar,
    C: MatrixMut<T> + ?Sized,
{
    if beta == T::zero() {
        *c.at_mut(i, j) = T::zero();
    } else if beta != T::one() {
        *c.at_mut(i, j) *= beta;
    }
}

/// C ← β·C over the whole matrix, sweeping in storage order.
pub(crate) fn scale_matrix<T, C>(beta: T, c: &mut C)
where
    T: Scalar,
    C: MatrixMut<T> + ?Sized,
{
    if beta == T::one() {
        return;
    }
    let (m, n) = (c.nrows(), c.ncols());
    if c.layout() == Layout::RowMajor {
        for i in 0..m {
            for j in 0..n {
                scale_entry(beta, c, i, j);
            }
        }
    } else {
        for j in 0..n {
            for i in 0..m {
                scale_entry(beta, c, i, j);
            }
        }
    }
}

/// Logical element `(i, j)` of `op(A)`.
#[inline]
pub(crate) fn op_at<T, A>(trans: Op, a: &A, i: usize, j: usize) -> T
where
    T: Scalar,
    A: Matrix<T> + ?Sized,
{
    if trans == Op::NoTrans {
        a.at(i, j)
    } else {
        conj_if(trans == Op::ConjTrans, a.at(j, i))
    }
}

/// Shape of `op(A)`.
pub(crate) fn op_shape<T, A>(trans: Op, a: &A) -> (usize, usize)
where
    T: Scalar,
    A: Matrix<T> + ?Sized,
{
    if trans == Op::NoTrans {
        (a.nrows(), a.ncols())
    } else {
        (a.ncols(), a.nrows())
    }
}
