//! Reference-style entry points over plain slices.
//!
//! These take the argument lists of the reference BLAS (`n`, `incx`,
//! `layout`, `lda`, ...), validate them in reference order (options, leading
//! dimensions, increments) followed by the buffer extents, and then dispatch
//! to the view kernels. Dimensions are `usize`, so a zero dimension is the
//! only degenerate size and is always a no-op.
//!
//! ```
//! use tblas::legacy;
//! use tblas::{Layout, Op};
//!
//! // y ← A·x with A = [[1, 2], [3, 4]] stored row-major.
//! let a = [1.0, 2.0, 3.0, 4.0];
//! let x = [1.0, 1.0];
//! let mut y = [0.0; 2];
//! legacy::gemv(Layout::RowMajor, Op::NoTrans, 2, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1).unwrap();
//! assert_eq!(y, [3.0, 7.0]);
//!
//! let err = legacy::gemv(Layout::ColMajor, Op::NoTrans, 2, 2, 1.0, &a, 1, &x, 1, 0.0, &mut y, 1);
//! assert_eq!(err.unwrap_err().param(), "lda");
//! ```

mod level1;
mod level2;
mod level3;

pub use level1::{asum, axpy, copy, dot, dotu, iamax, nrm2, rot, rotm, scal, swap};
pub use level2::{gemv, ger, geru, hemv, her, her2, symv, syr, syr2, trmv, trsv};
pub use level3::{gemm, hemm, her2k, herk, larf, symm, syr2k, syrk, trmm, trsm};

use crate::check;
use crate::error::BlasError;
use crate::options::Layout;
use crate::scalar::Scalar;
use crate::view::{DenseView, DenseViewMut, StridedView, StridedViewMut};

/// Checks that `ld` covers an `nrows x ncols` operand stored in `layout`.
fn leading_dim(param: &'static str, layout: Layout, nrows: usize, ncols: usize, ld: usize) -> Result<(), BlasError> {
    check::leading_dim(param, ld, check::minor_extent(layout, nrows, ncols))
}

fn vector<'a, T: Scalar>(param: &'static str, n: usize, x: &'a [T], inc: isize) -> Result<StridedView<'a, T>, BlasError> {
    check::buffer(param, check::vector_extent(n, inc), x.len())?;
    Ok(StridedView::from_raw_parts(x, n, inc))
}

fn vector_mut<'a, T: Scalar>(
    param: &'static str,
    n: usize,
    x: &'a mut [T],
    inc: isize,
) -> Result<StridedViewMut<'a, T>, BlasError> {
    check::buffer(param, check::vector_extent(n, inc), x.len())?;
    Ok(StridedViewMut::from_raw_parts(x, n, inc))
}

fn matrix<'a, T: Scalar>(
    param: &'static str,
    layout: Layout,
    nrows: usize,
    ncols: usize,
    a: &'a [T],
    ld: usize,
) -> Result<DenseView<'a, T>, BlasError> {
    check::buffer(param, check::matrix_extent(layout, nrows, ncols, ld), a.len())?;
    Ok(DenseView::from_raw_parts(a, nrows, ncols, ld, layout))
}

fn matrix_mut<'a, T: Scalar>(
    param: &'static str,
    layout: Layout,
    nrows: usize,
    ncols: usize,
    a: &'a mut [T],
    ld: usize,
) -> Result<DenseViewMut<'a, T>, BlasError> {
    check::buffer(param, check::matrix_extent(layout, nrows, ncols, ld), a.len())?;
    Ok(DenseViewMut::from_raw_parts(a, nrows, ncols, ld, layout))
}
