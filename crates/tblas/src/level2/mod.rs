//! Level 2 kernels: matrix-vector operations.
//!
//! General kernels (`gemv`, `ger`, `geru`) pick their sweep from the matrix
//! layout: column sweeps for column-major storage, row sweeps for row-major
//! storage. Symmetric, Hermitian and triangular kernels read only the
//! triangle named by `uplo` and pick their loop order from `uplo` and the
//! transpose.
//!
//! ```
//! use tblas::level2::gemv;
//! use tblas::view::DenseView;
//! use tblas::Op;
//!
//! let a = [1.0, 3.0, 2.0, 4.0]; // [[1, 2], [3, 4]] column-major
//! let a = DenseView::col_major(&a, 2, 2).unwrap();
//! let x = [1.0, 1.0];
//! let mut y = [0.0, 0.0];
//! gemv(Op::NoTrans, 1.0, &a, &x[..], 0.0, &mut y[..]).unwrap();
//! assert_eq!(y, [3.0, 7.0]);
//! ```

mod gemv;
mod ger;
mod symmetric;
mod triangular;

pub use gemv::gemv;
pub use ger::{ger, geru};
pub use symmetric::{hemv, her, her2, symv, syr, syr2};
pub use triangular::{trmv, trsv};

use crate::check;
use crate::error::BlasError;
use crate::scalar::Scalar;
use crate::view::{Matrix, VectorMut};

/// y ← β·y, writing zeros without reading `y` when β = 0.
pub(crate) fn scale_vector<T: Scalar, Y: VectorMut<T> + ?Sized>(beta: T, y: &mut Y) {
    if beta == T::one() {
        return;
    }
    if beta == T::zero() {
        for i in 0..y.len() {
            y.set(i, T::zero());
        }
    } else {
        for i in 0..y.len() {
            *y.at_mut(i) *= beta;
        }
    }
}

/// Order of a matrix that must be square.
pub(crate) fn square<T: Scalar, A: Matrix<T> + ?Sized>(
    param: &'static str,
    a: &A,
) -> Result<usize, BlasError> {
    check::conformant(param, a.nrows(), a.ncols())?;
    Ok(a.nrows())
}

/// Diagonal entry as read by symmetric (`hermitian = false`) or Hermitian kernels.
#[inline]
pub(crate) fn diagonal<T: Scalar>(hermitian: bool, value: T) -> T {
    if hermitian {
        T::from_real(value.real())
    } else {
        value
    }
}
