use crate::check;
use crate::error::BlasError;
use crate::level2::square;
use crate::options::{Diag, Op, Side, Uplo};
use crate::scalar::{Scalar, conj_if};
use crate::view::{Access, Matrix, MatrixMut};

fn validate<T, A, B>(side: Side, uplo: Uplo, trans: Op, diag: Diag, a: &A, b: &B) -> Result<(), BlasError>
where
    T: Scalar,
    A: Matrix<T> + ?Sized,
    B: MatrixMut<T> + ?Sized,
{
    check::option("side", side)?;
    check::option("uplo", uplo)?;
    check::option("trans", trans)?;
    check::option("diag", diag)?;
    let order = square("A", a)?;
    let expected = if side == Side::Left { b.nrows() } else { b.ncols() };
    check::conformant("A", expected, order)?;
    check::access("B", b.write_access(), Access::Dense)
}

/// B ← 0 without reading B.
fn zero<T: Scalar, B: MatrixMut<T> + ?Sized>(b: &mut B) {
    for j in 0..b.ncols() {
        for i in 0..b.nrows() {
            *b.at_mut(i, j) = T::zero();
        }
    }
}

/// B(:, j) ← s·B(:, j).
fn scale_col<T: Scalar, B: MatrixMut<T> + ?Sized>(s: T, b: &mut B, j: usize) {
    for i in 0..b.nrows() {
        *b.at_mut(i, j) *= s;
    }
}

/// B(:, j) ← B(:, j) + s·B(:, k).
fn axpy_col<T: Scalar, B: MatrixMut<T> + ?Sized>(s: T, b: &mut B, k: usize, j: usize) {
    for i in 0..b.nrows() {
        let bik = b.at(i, k);
        *b.at_mut(i, j) += s * bik;
    }
}

/// Triangular matrix product B ← α·op(A)·B (`Side::Left`) or
/// B ← α·B·op(A) (`Side::Right`).
///
/// With α = 0, B is set to zero without being read. With `Diag::Unit` the
/// diagonal of `A` is never read.
///
/// # Errors
///
/// Returns an error naming `side`, `uplo`, `trans` or `diag` for invalid
/// options, `A` if it is not square of the matching order, and `B` if its
/// access policy is not dense.
#[allow(clippy::too_many_arguments)]
pub fn trmm<T, A, B>(
    side: Side,
    uplo: Uplo,
    trans: Op,
    diag: Diag,
    alpha: T,
    a: &A,
    b: &mut B,
) -> Result<(), BlasError>
where
    T: Scalar,
    A: Matrix<T> + ?Sized,
    B: MatrixMut<T> + ?Sized,
{
    validate(side, uplo, trans, diag, a, &*b)?;
    let (m, n) = (b.nrows(), b.ncols());
    if m == 0 || n == 0 {
        return Ok(());
    }
    if alpha == T::zero() {
        zero(b);
        return Ok(());
    }
    let nounit = diag == Diag::NonUnit;
    let upper = uplo == Uplo::Upper;
    let conj = trans == Op::ConjTrans;
    // op(A) entry as read through the stored triangle.
    let at = |i: usize, j: usize| conj_if(conj, a.at(i, j));

    match (side, trans == Op::NoTrans) {
        (Side::Left, true) => {
            for j in 0..n {
                for step in 0..m {
                    let k = if upper { step } else { m - 1 - step };
                    let bkj = b.at(k, j);
                    if bkj == T::zero() {
                        continue;
                    }
                    let temp = alpha * bkj;
                    let others = if upper { 0..k } else { k + 1..m };
                    for i in others {
                        *b.at_mut(i, j) += temp * a.at(i, k);
                    }
                    let value = if nounit { temp * a.at(k, k) } else { temp };
                    *b.at_mut(k, j) = value;
                }
            }
        }
        (Side::Left, false) => {
            for j in 0..n {
                for step in 0..m {
                    let i = if upper { m - 1 - step } else { step };
                    let mut temp = b.at(i, j);
                    if nounit {
                        temp *= at(i, i);
                    }
                    let others = if upper { 0..i } else { i + 1..m };
                    for k in others {
                        temp += at(k, i) * b.at(k, j);
                    }
                    *b.at_mut(i, j) = alpha * temp;
                }
            }
        }
        (_, true) => {
            for step in 0..n {
                let j = if upper { n - 1 - step } else { step };
                let temp = if nounit { alpha * a.at(j, j) } else { alpha };
                scale_col(temp, b, j);
                let others = if upper { 0..j } else { j + 1..n };
                for k in others {
                    let akj = a.at(k, j);
                    if akj != T::zero() {
                        axpy_col(alpha * akj, b, k, j);
                    }
                }
            }
        }
        (_, false) => {
            for step in 0..n {
                let k = if upper { step } else { n - 1 - step };
                let others = if upper { 0..k } else { k + 1..n };
                for j in others {
                    let ajk = a.at(j, k);
                    if ajk != T::zero() {
                        axpy_col(alpha * conj_if(conj, ajk), b, k, j);
                    }
                }
                let temp = if nounit { alpha * at(k, k) } else { alpha };
                if temp != T::one() {
                    scale_col(temp, b, k);
                }
            }
        }
    }
    Ok(())
}

/// Triangular solve B ← α·op(A)⁻¹·B (`Side::Left`) or B ← α·B·op(A)⁻¹
/// (`Side::Right`).
///
/// No singularity test is performed. With α = 0, B is set to zero without
/// being read; with α = 1 no scaling pass is made.
///
/// # Errors
///
/// Same as [`trmm`].
#[allow(clippy::too_many_arguments)]
pub fn trsm<T, A, B>(
    side: Side,
    uplo: Uplo,
    trans: Op,
    diag: Diag,
    alpha: T,
    a: &A,
    b: &mut B,
) -> Result<(), BlasError>
where
    T: Scalar,
    A: Matrix<T> + ?Sized,
    B: MatrixMut<T> + ?Sized,
{
    validate(side, uplo, trans, diag, a, &*b)?;
    let (m, n) = (b.nrows(), b.ncols());
    if m == 0 || n == 0 {
        return Ok(());
    }
    if alpha == T::zero() {
        zero(b);
        return Ok(());
    }
    let nounit = diag == Diag::NonUnit;
    let upper = uplo == Uplo::Upper;
    let conj = trans == Op::ConjTrans;
    let at = |i: usize, j: usize| conj_if(conj, a.at(i, j));

    match (side, trans == Op::NoTrans) {
        (Side::Left, true) => {
            for j in 0..n {
                if alpha != T::one() {
                    scale_col(alpha, b, j);
                }
                for step in 0..m {
                    let k = if upper { m - 1 - step } else { step };
                    if b.at(k, j) == T::zero() {
                        continue;
                    }
                    if nounit {
                        *b.at_mut(k, j) /= a.at(k, k);
                    }
                    let bkj = b.at(k, j);
                    let others = if upper { 0..k } else { k + 1..m };
                    for i in others {
                        *b.at_mut(i, j) -= bkj * a.at(i, k);
                    }
                }
            }
        }
        (Side::Left, false) => {
            for j in 0..n {
                for step in 0..m {
                    let i = if upper { step } else { m - 1 - step };
                    let mut temp = alpha * b.at(i, j);
                    let others = if upper { 0..i } else { i + 1..m };
                    for k in others {
                        temp -= at(k, i) * b.at(k, j);
                    }
                    if nounit {
                        temp /= at(i, i);
                    }
                    *b.at_mut(i, j) = temp;
                }
            }
        }
        (_, true) => {
            for step in 0..n {
                let j = if upper { step } else { n - 1 - step };
                if alpha != T::one() {
                    scale_col(alpha, b, j);
                }
                let others = if upper { 0..j } else { j + 1..n };
                for k in others {
                    let akj = a.at(k, j);
                    if akj != T::zero() {
                        axpy_col(-akj, b, k, j);
                    }
                }
                if nounit {
                    scale_col(T::one() / a.at(j, j), b, j);
                }
            }
        }
        (_, false) => {
            for step in 0..n {
                let k = if upper { n - 1 - step } else { step };
                if nounit {
                    scale_col(T::one() / at(k, k), b, k);
                }
                let others = if upper { 0..k } else { k + 1..n };
                for j in others {
                    let ajk = a.at(j, k);
                    if ajk != T::zero() {
                        axpy_col(-conj_if(conj, ajk), b, k, j);
                    }
                }
                if alpha != T::one() {
                    scale_col(alpha, b, k);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level3::gemm;
    use crate::scalar::c64;
    use crate::view::{DenseView, DenseViewMut};
    use approx::assert_relative_eq;

    fn c(re: f64, im: f64) -> c64 {
        c64::new(re, im)
    }

    // Upper triangle of a 3x3 matrix, zeros below.
    fn upper_full() -> [c64; 9] {
        let z = c(0.0, 0.0);
        [c(2.0, 1.0), z, z, c(1.0, -1.0), c(3.0, 0.0), z, c(0.5, 2.0), c(-1.0, 1.0), c(1.0, 1.0)]
    }

    fn transpose(data: &[c64; 9]) -> [c64; 9] {
        let mut out = [c(0.0, 0.0); 9];
        for j in 0..3 {
            for i in 0..3 {
                out[j + 3 * i] = data[i + 3 * j];
            }
        }
        out
    }

    fn stored(uplo: Uplo) -> [c64; 9] {
        let full = if uplo == Uplo::Upper { upper_full() } else { transpose(&upper_full()) };
        let mut out = full;
        for j in 0..3 {
            for i in 0..3 {
                let outside = if uplo == Uplo::Upper { i > j } else { i < j };
                if outside {
                    out[i + 3 * j] = c(f64::NAN, f64::NAN);
                }
            }
        }
        out
    }

    fn full(uplo: Uplo) -> [c64; 9] {
        if uplo == Uplo::Upper { upper_full() } else { transpose(&upper_full()) }
    }

    const B: [c64; 6] = [
        c64::new(1.0, 0.0),
        c64::new(0.0, 2.0),
        c64::new(-1.0, 1.0),
        c64::new(3.0, 0.0),
        c64::new(0.5, -0.5),
        c64::new(2.0, 2.0),
    ];

    #[test]
    fn test_trmm_matches_gemm() {
        let alpha = c(1.5, -0.5);
        for side in [Side::Left, Side::Right] {
            let (m, n) = if side == Side::Left { (3, 2) } else { (2, 3) };
            for uplo in [Uplo::Upper, Uplo::Lower] {
                let tri = stored(uplo);
                let dense = full(uplo);
                let a = DenseView::col_major(&tri, 3, 3).unwrap();
                let af = DenseView::col_major(&dense, 3, 3).unwrap();
                for trans in [Op::NoTrans, Op::Trans, Op::ConjTrans] {
                    let bv = DenseView::col_major(&B, m, n).unwrap();
                    let mut expected = [c(0.0, 0.0); 6];
                    {
                        let mut e = DenseViewMut::col_major(&mut expected, m, n).unwrap();
                        if side == Side::Left {
                            gemm(trans, Op::NoTrans, alpha, &af, &bv, c(0.0, 0.0), &mut e).unwrap();
                        } else {
                            gemm(Op::NoTrans, trans, alpha, &bv, &af, c(0.0, 0.0), &mut e).unwrap();
                        }
                    }
                    let mut got = B;
                    trmm(
                        side,
                        uplo,
                        trans,
                        Diag::NonUnit,
                        alpha,
                        &a,
                        &mut DenseViewMut::col_major(&mut got, m, n).unwrap(),
                    )
                    .unwrap();
                    for (g, e) in got.iter().zip(expected.iter()) {
                        assert_relative_eq!(g.re, e.re, epsilon = 1e-12);
                        assert_relative_eq!(g.im, e.im, epsilon = 1e-12);
                    }
                }
            }
        }
    }

    #[test]
    fn test_trsm_inverts_trmm() {
        let alpha = c(2.0, 1.0);
        for side in [Side::Left, Side::Right] {
            let (m, n) = if side == Side::Left { (3, 2) } else { (2, 3) };
            for uplo in [Uplo::Upper, Uplo::Lower] {
                let tri = stored(uplo);
                let a = DenseView::col_major(&tri, 3, 3).unwrap();
                for trans in [Op::NoTrans, Op::Trans, Op::ConjTrans] {
                    for diag in [Diag::NonUnit, Diag::Unit] {
                        let mut data = B;
                        {
                            let mut b = DenseViewMut::col_major(&mut data, m, n).unwrap();
                            trmm(side, uplo, trans, diag, alpha, &a, &mut b).unwrap();
                            trsm(side, uplo, trans, diag, c(1.0, 0.0) / alpha, &a, &mut b).unwrap();
                        }
                        for (g, e) in data.iter().zip(B.iter()) {
                            assert_relative_eq!(g.re, e.re, epsilon = 1e-12);
                            assert_relative_eq!(g.im, e.im, epsilon = 1e-12);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_alpha_zero_overwrites_nan() {
        let a = [1.0];
        let mut data = [f64::NAN, f64::NAN];
        let av = DenseView::col_major(&a, 1, 1).unwrap();
        trsm(
            Side::Left,
            Uplo::Upper,
            Op::NoTrans,
            Diag::NonUnit,
            0.0,
            &av,
            &mut DenseViewMut::col_major(&mut data, 1, 2).unwrap(),
        )
        .unwrap();
        assert_eq!(data, [0.0, 0.0]);
    }

    #[test]
    fn test_unit_diagonal_is_not_read() {
        // [[1, 2], [0, 1]] with NaN on the stored diagonal.
        let a = [f64::NAN, 0.0, 2.0, f64::NAN];
        let av = DenseView::col_major(&a, 2, 2).unwrap();
        let mut data = [1.0, 1.0];
        trmm(
            Side::Left,
            Uplo::Upper,
            Op::NoTrans,
            Diag::Unit,
            1.0,
            &av,
            &mut DenseViewMut::col_major(&mut data, 2, 1).unwrap(),
        )
        .unwrap();
        assert_eq!(data, [3.0, 1.0]);
    }

    #[cfg(not(feature = "unchecked"))]
    #[test]
    fn test_side_order_mismatch() {
        let a = [1.0; 4];
        let mut data = [0.0; 6];
        let err = trmm(
            Side::Left,
            Uplo::Upper,
            Op::NoTrans,
            Diag::Unit,
            1.0,
            &DenseView::col_major(&a, 2, 2).unwrap(),
            &mut DenseViewMut::col_major(&mut data, 3, 2).unwrap(),
        )
        .unwrap_err();
        assert_eq!(err.param(), "A");
    }
}
