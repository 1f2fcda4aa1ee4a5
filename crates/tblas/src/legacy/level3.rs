#![allow(clippy::too_many_arguments)]

use super::{leading_dim, matrix, matrix_mut, vector, vector_mut};
use crate::check;
use crate::error::BlasError;
use crate::options::{Diag, Layout, Op, Side, Uplo};
use crate::scalar::{RealOf, Scalar};
use crate::{lapack, level3};

/// Stored shape of an operand that enters as `op(X)` of shape `rows x cols`.
fn stored(trans: Op, rows: usize, cols: usize) -> (usize, usize) {
    if trans == Op::NoTrans { (rows, cols) } else { (cols, rows) }
}

/// C ← α·op(A)·op(B) + β·C with C m×n and inner dimension k.
pub fn gemm<T: Scalar>(
    layout: Layout,
    transa: Op,
    transb: Op,
    m: usize,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) -> Result<(), BlasError> {
    check::option("layout", layout)?;
    check::option("transA", transa)?;
    check::option("transB", transb)?;
    let (ar, ac) = stored(transa, m, k);
    let (br, bc) = stored(transb, k, n);
    leading_dim("lda", layout, ar, ac, lda)?;
    leading_dim("ldb", layout, br, bc, ldb)?;
    leading_dim("ldc", layout, m, n, ldc)?;
    let a = matrix("A", layout, ar, ac, a, lda)?;
    let b = matrix("B", layout, br, bc, b, ldb)?;
    let mut c = matrix_mut("C", layout, m, n, c, ldc)?;
    level3::gemm(transa, transb, alpha, &a, &b, beta, &mut c)
}

fn product<T: Scalar>(
    hermitian: bool,
    layout: Layout,
    side: Side,
    uplo: Uplo,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) -> Result<(), BlasError> {
    check::option("layout", layout)?;
    check::option("side", side)?;
    check::option("uplo", uplo)?;
    let order = if side == Side::Left { m } else { n };
    leading_dim("lda", layout, order, order, lda)?;
    leading_dim("ldb", layout, m, n, ldb)?;
    leading_dim("ldc", layout, m, n, ldc)?;
    let a = matrix("A", layout, order, order, a, lda)?;
    let b = matrix("B", layout, m, n, b, ldb)?;
    let mut c = matrix_mut("C", layout, m, n, c, ldc)?;
    if hermitian {
        level3::hemm(side, uplo, alpha, &a, &b, beta, &mut c)
    } else {
        level3::symm(side, uplo, alpha, &a, &b, beta, &mut c)
    }
}

/// Symmetric C ← α·A·B + β·C (left) or α·B·A + β·C (right).
pub fn symm<T: Scalar>(
    layout: Layout,
    side: Side,
    uplo: Uplo,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) -> Result<(), BlasError> {
    product(false, layout, side, uplo, m, n, alpha, a, lda, b, ldb, beta, c, ldc)
}

/// Hermitian C ← α·A·B + β·C (left) or α·B·A + β·C (right).
pub fn hemm<T: Scalar>(
    layout: Layout,
    side: Side,
    uplo: Uplo,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) -> Result<(), BlasError> {
    product(true, layout, side, uplo, m, n, alpha, a, lda, b, ldb, beta, c, ldc)
}

/// Symmetric rank-k update of the n×n matrix C.
pub fn syrk<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Op,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) -> Result<(), BlasError> {
    check::option("layout", layout)?;
    check::option("uplo", uplo)?;
    check::transpose_in("trans", trans, &[Op::NoTrans, Op::Trans])?;
    let (ar, ac) = stored(trans, n, k);
    leading_dim("lda", layout, ar, ac, lda)?;
    leading_dim("ldc", layout, n, n, ldc)?;
    let a = matrix("A", layout, ar, ac, a, lda)?;
    let mut c = matrix_mut("C", layout, n, n, c, ldc)?;
    level3::syrk(uplo, trans, alpha, &a, beta, &mut c)
}

/// Hermitian rank-k update of the n×n matrix C with real α and β.
pub fn herk<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Op,
    n: usize,
    k: usize,
    alpha: RealOf<T>,
    a: &[T],
    lda: usize,
    beta: RealOf<T>,
    c: &mut [T],
    ldc: usize,
) -> Result<(), BlasError> {
    check::option("layout", layout)?;
    check::option("uplo", uplo)?;
    check::transpose_in("trans", trans, &[Op::NoTrans, Op::ConjTrans])?;
    let (ar, ac) = stored(trans, n, k);
    leading_dim("lda", layout, ar, ac, lda)?;
    leading_dim("ldc", layout, n, n, ldc)?;
    let a = matrix("A", layout, ar, ac, a, lda)?;
    let mut c = matrix_mut("C", layout, n, n, c, ldc)?;
    level3::herk(uplo, trans, alpha, &a, beta, &mut c)
}

/// Symmetric rank-2k update of the n×n matrix C.
pub fn syr2k<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Op,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) -> Result<(), BlasError> {
    check::option("layout", layout)?;
    check::option("uplo", uplo)?;
    check::transpose_in("trans", trans, &[Op::NoTrans, Op::Trans])?;
    let (ar, ac) = stored(trans, n, k);
    leading_dim("lda", layout, ar, ac, lda)?;
    leading_dim("ldb", layout, ar, ac, ldb)?;
    leading_dim("ldc", layout, n, n, ldc)?;
    let a = matrix("A", layout, ar, ac, a, lda)?;
    let b = matrix("B", layout, ar, ac, b, ldb)?;
    let mut c = matrix_mut("C", layout, n, n, c, ldc)?;
    level3::syr2k(uplo, trans, alpha, &a, &b, beta, &mut c)
}

/// Hermitian rank-2k update of the n×n matrix C with real β.
pub fn her2k<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Op,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: RealOf<T>,
    c: &mut [T],
    ldc: usize,
) -> Result<(), BlasError> {
    check::option("layout", layout)?;
    check::option("uplo", uplo)?;
    check::transpose_in("trans", trans, &[Op::NoTrans, Op::ConjTrans])?;
    let (ar, ac) = stored(trans, n, k);
    leading_dim("lda", layout, ar, ac, lda)?;
    leading_dim("ldb", layout, ar, ac, ldb)?;
    leading_dim("ldc", layout, n, n, ldc)?;
    let a = matrix("A", layout, ar, ac, a, lda)?;
    let b = matrix("B", layout, ar, ac, b, ldb)?;
    let mut c = matrix_mut("C", layout, n, n, c, ldc)?;
    level3::her2k(uplo, trans, alpha, &a, &b, beta, &mut c)
}

fn triangular<T: Scalar>(
    solve: bool,
    layout: Layout,
    side: Side,
    uplo: Uplo,
    trans: Op,
    diag: Diag,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) -> Result<(), BlasError> {
    check::option("layout", layout)?;
    check::option("side", side)?;
    check::option("uplo", uplo)?;
    check::option("trans", trans)?;
    check::option("diag", diag)?;
    let order = if side == Side::Left { m } else { n };
    leading_dim("lda", layout, order, order, lda)?;
    leading_dim("ldb", layout, m, n, ldb)?;
    let a = matrix("A", layout, order, order, a, lda)?;
    let mut b = matrix_mut("B", layout, m, n, b, ldb)?;
    if solve {
        level3::trsm(side, uplo, trans, diag, alpha, &a, &mut b)
    } else {
        level3::trmm(side, uplo, trans, diag, alpha, &a, &mut b)
    }
}

/// Triangular B ← α·op(A)·B (left) or α·B·op(A) (right).
pub fn trmm<T: Scalar>(
    layout: Layout,
    side: Side,
    uplo: Uplo,
    trans: Op,
    diag: Diag,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) -> Result<(), BlasError> {
    triangular(false, layout, side, uplo, trans, diag, m, n, alpha, a, lda, b, ldb)
}

/// Triangular solve B ← α·op(A)⁻¹·B (left) or α·B·op(A)⁻¹ (right).
pub fn trsm<T: Scalar>(
    layout: Layout,
    side: Side,
    uplo: Uplo,
    trans: Op,
    diag: Diag,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) -> Result<(), BlasError> {
    triangular(true, layout, side, uplo, trans, diag, m, n, alpha, a, lda, b, ldb)
}

/// Applies H = I − τ·v·vᴴ to the m×n matrix C; see [`lapack::larf`].
///
/// `v` has m elements for `Side::Left` and n for `Side::Right`, at stride
/// `incv`; `work` holds at least the other dimension.
pub fn larf<T: Scalar>(
    layout: Layout,
    side: Side,
    m: usize,
    n: usize,
    v: &[T],
    incv: isize,
    tau: T,
    c: &mut [T],
    ldc: usize,
    work: &mut [T],
) -> Result<(), BlasError> {
    check::option("layout", layout)?;
    check::option("side", side)?;
    check::increment("incv", incv)?;
    leading_dim("ldc", layout, m, n, ldc)?;
    let (lenv, lenw) = if side == Side::Left { (m, n) } else { (n, m) };
    let v = vector("v", lenv, v, incv)?;
    let mut c = matrix_mut("C", layout, m, n, c, ldc)?;
    let mut work = vector_mut("work", lenw, work, 1)?;
    lapack::larf(side, &v, tau, &mut c, &mut work)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::c64;

    #[test]
    fn test_gemm_row_major_with_padding() {
        // A = [[1, 2], [3, 4]] and B = I, both row-major with ld 3.
        let a = [1.0, 2.0, f64::NAN, 3.0, 4.0, f64::NAN];
        let b = [1.0, 0.0, f64::NAN, 0.0, 1.0, f64::NAN];
        let mut c = [0.0, 0.0, -7.0, 0.0, 0.0];
        gemm(Layout::RowMajor, Op::NoTrans, Op::NoTrans, 2, 2, 2, 1.0, &a, 3, &b, 3, 0.0, &mut c, 3).unwrap();
        assert_eq!(c, [1.0, 2.0, -7.0, 3.0, 4.0]);
    }

    #[test]
    fn test_herk_k_zero_scales_c() {
        let mut c = [c64::new(2.0, 0.0); 4];
        herk(Layout::ColMajor, Uplo::Upper, Op::NoTrans, 2, 0, 1.0, &[], 2, 2.0, &mut c, 2).unwrap();
        assert_eq!(c[0], c64::new(4.0, 0.0));
        assert_eq!(c[1], c64::new(2.0, 0.0));
        assert_eq!(c[2], c64::new(4.0, 0.0));
    }

    #[cfg(not(feature = "unchecked"))]
    #[test]
    fn test_leading_dimension_names() {
        let a = [0.0; 8];
        let mut c = [0.0; 8];
        // Transposed A is stored k x m = 4 x 2 in column-major, so lda >= 4.
        let err = gemm(Layout::ColMajor, Op::Trans, Op::NoTrans, 2, 2, 4, 1.0, &a, 2, &a, 4, 0.0, &mut c, 2)
            .unwrap_err();
        assert_eq!(err.param(), "lda");
        let err = gemm(Layout::ColMajor, Op::NoTrans, Op::NoTrans, 2, 2, 4, 1.0, &a, 2, &a, 2, 0.0, &mut c, 2)
            .unwrap_err();
        assert_eq!(err.param(), "ldb");
        let err = trsm(Layout::RowMajor, Side::Right, Uplo::Upper, Op::NoTrans, Diag::Unit, 2, 3, 1.0, &a, 3, &mut c, 2)
            .unwrap_err();
        assert_eq!(err.param(), "ldb");
    }
}
