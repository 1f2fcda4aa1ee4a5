use super::square;
use crate::check;
use crate::error::BlasError;
use crate::options::{Diag, Op, Uplo};
use crate::scalar::{Scalar, conj_if};
use crate::view::{Matrix, VectorMut};

fn validate<T, A, X>(uplo: Uplo, trans: Op, diag: Diag, a: &A, x: &X) -> Result<usize, BlasError>
where
    T: Scalar,
    A: Matrix<T> + ?Sized,
    X: VectorMut<T> + ?Sized,
{
    check::option("uplo", uplo)?;
    check::option("trans", trans)?;
    check::option("diag", diag)?;
    let n = square("A", a)?;
    check::conformant("x", n, x.len())?;
    Ok(n)
}

/// Triangular matrix-vector product x ← op(A)·x.
///
/// With `Diag::Unit` the diagonal of `A` is taken as one and never read.
///
/// # Errors
///
/// Returns an error naming `uplo`, `trans` or `diag` for invalid options,
/// `A` if it is not square, or `x` for a mismatched length.
pub fn trmv<T, A, X>(uplo: Uplo, trans: Op, diag: Diag, a: &A, x: &mut X) -> Result<(), BlasError>
where
    T: Scalar,
    A: Matrix<T> + ?Sized,
    X: VectorMut<T> + ?Sized,
{
    let n = validate(uplo, trans, diag, a, x)?;
    if n == 0 {
        return Ok(());
    }
    let nounit = diag == Diag::NonUnit;
    let conj = trans == Op::ConjTrans;
    let upper = uplo == Uplo::Upper;

    if trans == Op::NoTrans {
        if upper {
            for j in 0..n {
                let temp = x.at(j);
                for i in 0..j {
                    *x.at_mut(i) += temp * a.at(i, j);
                }
                if nounit {
                    *x.at_mut(j) *= a.at(j, j);
                }
            }
        } else {
            for j in (0..n).rev() {
                let temp = x.at(j);
                for i in (j + 1..n).rev() {
                    *x.at_mut(i) += temp * a.at(i, j);
                }
                if nounit {
                    *x.at_mut(j) *= a.at(j, j);
                }
            }
        }
    } else if upper {
        for j in (0..n).rev() {
            let mut temp = x.at(j);
            if nounit {
                temp *= conj_if(conj, a.at(j, j));
            }
            for i in (0..j).rev() {
                temp += conj_if(conj, a.at(i, j)) * x.at(i);
            }
            x.set(j, temp);
        }
    } else {
        for j in 0..n {
            let mut temp = x.at(j);
            if nounit {
                temp *= conj_if(conj, a.at(j, j));
            }
            for i in j + 1..n {
                temp += conj_if(conj, a.at(i, j)) * x.at(i);
            }
            x.set(j, temp);
        }
    }
    Ok(())
}

/// Triangular solve x ← op(A)⁻¹·x.
///
/// No singularity test is performed; a zero diagonal produces infinities or
/// NaN as the arithmetic dictates.
///
/// # Errors
///
/// Same as [`trmv`].
pub fn trsv<T, A, X>(uplo: Uplo, trans: Op, diag: Diag, a: &A, x: &mut X) -> Result<(), BlasError>
where
    T: Scalar,
    A: Matrix<T> + ?Sized,
    X: VectorMut<T> + ?Sized,
{
    let n = validate(uplo, trans, diag, a, x)?;
    if n == 0 {
        return Ok(());
    }
    let nounit = diag == Diag::NonUnit;
    let conj = trans == Op::ConjTrans;
    let upper = uplo == Uplo::Upper;

    if trans == Op::NoTrans {
        if upper {
            for j in (0..n).rev() {
                if nounit {
                    *x.at_mut(j) /= a.at(j, j);
                }
                let temp = x.at(j);
                for i in (0..j).rev() {
                    *x.at_mut(i) -= temp * a.at(i, j);
                }
            }
        } else {
            for j in 0..n {
                if nounit {
                    *x.at_mut(j) /= a.at(j, j);
                }
                let temp = x.at(j);
                for i in j + 1..n {
                    *x.at_mut(i) -= temp * a.at(i, j);
                }
            }
        }
    } else if upper {
        for j in 0..n {
            let mut temp = x.at(j);
            for i in 0..j {
                temp -= conj_if(conj, a.at(i, j)) * x.at(i);
            }
            if nounit {
                temp /= conj_if(conj, a.at(j, j));
            }
            x.set(j, temp);
        }
    } else {
        for j in (0..n).rev() {
            let mut temp = x.at(j);
            for i in (j + 1..n).rev() {
                temp -= conj_if(conj, a.at(i, j)) * x.at(i);
            }
            if nounit {
                temp /= conj_if(conj, a.at(j, j));
            }
            x.set(j, temp);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::c64;
    use crate::view::DenseView;
    use approx::assert_relative_eq;

    // Upper [[2, 1], [., 4]] with NaN below the diagonal.
    const UPPER: [f64; 4] = [2.0, f64::NAN, 1.0, 4.0];
    // Lower [[2, .], [1, 4]].
    const LOWER: [f64; 4] = [2.0, 1.0, f64::NAN, 4.0];

    #[test]
    fn test_trmv_all_shapes() {
        let up = DenseView::col_major(&UPPER, 2, 2).unwrap();
        let lo = DenseView::col_major(&LOWER, 2, 2).unwrap();
        let cases = [
            (Uplo::Upper, Op::NoTrans, &up, [6.0, 8.0]),
            (Uplo::Upper, Op::Trans, &up, [4.0, 10.0]),
            (Uplo::Lower, Op::NoTrans, &lo, [4.0, 10.0]),
            (Uplo::Lower, Op::Trans, &lo, [6.0, 8.0]),
        ];
        for (uplo, trans, a, expected) in cases {
            let mut x = [2.0, 2.0];
            trmv(uplo, trans, Diag::NonUnit, a, &mut x[..]).unwrap();
            assert_eq!(x, expected, "{uplo:?} {trans:?}");
        }
    }

    #[test]
    fn test_trsv_inverts_trmv() {
        let up = DenseView::col_major(&UPPER, 2, 2).unwrap();
        let lo = DenseView::col_major(&LOWER, 2, 2).unwrap();
        for (uplo, a) in [(Uplo::Upper, &up), (Uplo::Lower, &lo)] {
            for trans in [Op::NoTrans, Op::Trans, Op::ConjTrans] {
                for diag in [Diag::NonUnit, Diag::Unit] {
                    let mut x = [3.0, -1.0];
                    trmv(uplo, trans, diag, a, &mut x[..]).unwrap();
                    trsv(uplo, trans, diag, a, &mut x[..]).unwrap();
                    assert_relative_eq!(x[0], 3.0, epsilon = 1e-14);
                    assert_relative_eq!(x[1], -1.0, epsilon = 1e-14);
                }
            }
        }
    }

    #[test]
    fn test_unit_diagonal_is_not_read() {
        let data = [f64::NAN, f64::NAN, 3.0, f64::NAN];
        let a = DenseView::col_major(&data, 2, 2).unwrap();
        let mut x = [1.0, 1.0];
        trmv(Uplo::Upper, Op::NoTrans, Diag::Unit, &a, &mut x[..]).unwrap();
        assert_eq!(x, [4.0, 1.0]);
        trsv(Uplo::Upper, Op::NoTrans, Diag::Unit, &a, &mut x[..]).unwrap();
        assert_eq!(x, [1.0, 1.0]);
    }

    #[test]
    fn test_trsv_conj_trans() {
        // A = [[i, 1], [., 1]] upper; Aᴴ = [[-i, 0], [1, 1]].
        let data = [
            c64::new(0.0, 1.0),
            c64::new(f64::NAN, 0.0),
            c64::new(1.0, 0.0),
            c64::new(1.0, 0.0),
        ];
        let a = DenseView::col_major(&data, 2, 2).unwrap();
        // Aᴴ · [i, 0] = [1, i]
        let mut x = [c64::new(1.0, 0.0), c64::new(0.0, 1.0)];
        trsv(Uplo::Upper, Op::ConjTrans, Diag::NonUnit, &a, &mut x[..]).unwrap();
        assert_relative_eq!(x[0].re, 0.0, epsilon = 1e-15);
        assert_relative_eq!(x[0].im, 1.0, epsilon = 1e-15);
        assert_relative_eq!(x[1].norm(), 0.0, epsilon = 1e-15);
    }
}
