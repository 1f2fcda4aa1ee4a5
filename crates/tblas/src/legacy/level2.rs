#![allow(clippy::too_many_arguments)]

use super::{leading_dim, matrix, matrix_mut, vector, vector_mut};
use crate::check;
use crate::error::BlasError;
use crate::level2;
use crate::options::{Diag, Layout, Op, Uplo};
use crate::scalar::{RealOf, Scalar};

/// y ← α·op(A)·x + β·y with `A` stored as an m×n matrix.
pub fn gemv<T: Scalar>(
    layout: Layout,
    trans: Op,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) -> Result<(), BlasError> {
    check::option("layout", layout)?;
    check::option("trans", trans)?;
    leading_dim("lda", layout, m, n, lda)?;
    check::increment("incx", incx)?;
    check::increment("incy", incy)?;
    let (lenx, leny) = if trans == Op::NoTrans { (n, m) } else { (m, n) };
    let a = matrix("A", layout, m, n, a, lda)?;
    let x = vector("x", lenx, x, incx)?;
    let mut y = vector_mut("y", leny, y, incy)?;
    level2::gemv(trans, alpha, &a, &x, beta, &mut y)
}

fn rank1<T: Scalar>(
    conj: bool,
    layout: Layout,
    m: usize,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) -> Result<(), BlasError> {
    check::option("layout", layout)?;
    leading_dim("lda", layout, m, n, lda)?;
    check::increment("incx", incx)?;
    check::increment("incy", incy)?;
    let x = vector("x", m, x, incx)?;
    let y = vector("y", n, y, incy)?;
    let mut a = matrix_mut("A", layout, m, n, a, lda)?;
    if conj {
        level2::ger(alpha, &x, &y, &mut a)
    } else {
        level2::geru(alpha, &x, &y, &mut a)
    }
}

/// A ← A + α·x·yᴴ.
pub fn ger<T: Scalar>(
    layout: Layout,
    m: usize,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) -> Result<(), BlasError> {
    rank1(true, layout, m, n, alpha, x, incx, y, incy, a, lda)
}

/// A ← A + α·x·yᵀ.
pub fn geru<T: Scalar>(
    layout: Layout,
    m: usize,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) -> Result<(), BlasError> {
    rank1(false, layout, m, n, alpha, x, incx, y, incy, a, lda)
}

fn product<T: Scalar>(
    hermitian: bool,
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) -> Result<(), BlasError> {
    check::option("layout", layout)?;
    check::option("uplo", uplo)?;
    leading_dim("lda", layout, n, n, lda)?;
    check::increment("incx", incx)?;
    check::increment("incy", incy)?;
    let a = matrix("A", layout, n, n, a, lda)?;
    let x = vector("x", n, x, incx)?;
    let mut y = vector_mut("y", n, y, incy)?;
    if hermitian {
        level2::hemv(uplo, alpha, &a, &x, beta, &mut y)
    } else {
        level2::symv(uplo, alpha, &a, &x, beta, &mut y)
    }
}

/// Hermitian y ← α·A·x + β·y.
pub fn hemv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) -> Result<(), BlasError> {
    product(true, layout, uplo, n, alpha, a, lda, x, incx, beta, y, incy)
}

/// Symmetric y ← α·A·x + β·y.
pub fn symv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) -> Result<(), BlasError> {
    product(false, layout, uplo, n, alpha, a, lda, x, incx, beta, y, incy)
}

/// Hermitian rank-1 update with real α.
pub fn her<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: RealOf<T>,
    x: &[T],
    incx: isize,
    a: &mut [T],
    lda: usize,
) -> Result<(), BlasError> {
    check::option("layout", layout)?;
    check::option("uplo", uplo)?;
    leading_dim("lda", layout, n, n, lda)?;
    check::increment("incx", incx)?;
    let x = vector("x", n, x, incx)?;
    let mut a = matrix_mut("A", layout, n, n, a, lda)?;
    level2::her(uplo, alpha, &x, &mut a)
}

/// Symmetric rank-1 update.
pub fn syr<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    a: &mut [T],
    lda: usize,
) -> Result<(), BlasError> {
    check::option("layout", layout)?;
    check::option("uplo", uplo)?;
    leading_dim("lda", layout, n, n, lda)?;
    check::increment("incx", incx)?;
    let x = vector("x", n, x, incx)?;
    let mut a = matrix_mut("A", layout, n, n, a, lda)?;
    level2::syr(uplo, alpha, &x, &mut a)
}

fn rank2<T: Scalar>(
    hermitian: bool,
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) -> Result<(), BlasError> {
    check::option("layout", layout)?;
    check::option("uplo", uplo)?;
    leading_dim("lda", layout, n, n, lda)?;
    check::increment("incx", incx)?;
    check::increment("incy", incy)?;
    let x = vector("x", n, x, incx)?;
    let y = vector("y", n, y, incy)?;
    let mut a = matrix_mut("A", layout, n, n, a, lda)?;
    if hermitian {
        level2::her2(uplo, alpha, &x, &y, &mut a)
    } else {
        level2::syr2(uplo, alpha, &x, &y, &mut a)
    }
}

/// Hermitian rank-2 update.
pub fn her2<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) -> Result<(), BlasError> {
    rank2(true, layout, uplo, n, alpha, x, incx, y, incy, a, lda)
}

/// Symmetric rank-2 update.
pub fn syr2<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) -> Result<(), BlasError> {
    rank2(false, layout, uplo, n, alpha, x, incx, y, incy, a, lda)
}

fn triangular<T: Scalar>(
    solve: bool,
    layout: Layout,
    uplo: Uplo,
    trans: Op,
    diag: Diag,
    n: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: isize,
) -> Result<(), BlasError> {
    check::option("layout", layout)?;
    check::option("uplo", uplo)?;
    check::option("trans", trans)?;
    check::option("diag", diag)?;
    leading_dim("lda", layout, n, n, lda)?;
    check::increment("incx", incx)?;
    let a = matrix("A", layout, n, n, a, lda)?;
    let mut x = vector_mut("x", n, x, incx)?;
    if solve {
        level2::trsv(uplo, trans, diag, &a, &mut x)
    } else {
        level2::trmv(uplo, trans, diag, &a, &mut x)
    }
}

/// x ← op(A)·x for triangular `A`.
pub fn trmv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Op,
    diag: Diag,
    n: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: isize,
) -> Result<(), BlasError> {
    triangular(false, layout, uplo, trans, diag, n, a, lda, x, incx)
}

/// x ← op(A)⁻¹·x for triangular `A`.
pub fn trsv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Op,
    diag: Diag,
    n: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: isize,
) -> Result<(), BlasError> {
    triangular(true, layout, uplo, trans, diag, n, a, lda, x, incx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemv_layouts_agree() {
        // [[1, 2, 3], [4, 5, 6]]
        let col = [1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
        let row = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let x = [1.0, 0.0, -1.0];
        let mut yc = [0.0; 2];
        let mut yr = [0.0; 2];
        gemv(Layout::ColMajor, Op::NoTrans, 2, 3, 1.0, &col, 2, &x, 1, 0.0, &mut yc, 1).unwrap();
        gemv(Layout::RowMajor, Op::NoTrans, 2, 3, 1.0, &row, 3, &x, 1, 0.0, &mut yr, 1).unwrap();
        assert_eq!(yc, [-2.0, -2.0]);
        assert_eq!(yc, yr);
    }

    #[test]
    fn test_trsv_strided_x() {
        // Upper [[2, 1], [0, 4]], x stored at stride 2.
        let a = [2.0, 0.0, 1.0, 4.0];
        let mut x = [5.0, f64::NAN, 8.0];
        trsv(Layout::ColMajor, Uplo::Upper, Op::NoTrans, Diag::NonUnit, 2, &a, 2, &mut x, 2).unwrap();
        assert_eq!(x[0], 1.5);
        assert!(x[1].is_nan());
        assert_eq!(x[2], 2.0);
    }

    #[cfg(not(feature = "unchecked"))]
    #[test]
    fn test_lda_follows_layout() {
        let a = [0.0; 6];
        let x = [0.0; 3];
        let mut y = [0.0; 3];
        // Column-major 2x3 needs lda >= 2, row-major needs lda >= 3.
        assert!(gemv(Layout::ColMajor, Op::NoTrans, 2, 3, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1).is_ok());
        let err = gemv(Layout::RowMajor, Op::NoTrans, 2, 3, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1).unwrap_err();
        assert_eq!(err.param(), "lda");
        let err = gemv(Layout::from_raw(0), Op::NoTrans, 2, 3, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1).unwrap_err();
        assert_eq!(err.param(), "layout");
    }
}
