use super::{scale_entry, scale_matrix};
use crate::check;
use crate::error::BlasError;
use crate::level2::{diagonal, square};
use crate::options::{Side, Uplo};
use crate::scalar::{Scalar, conj_if};
use crate::view::{Access, Matrix, MatrixMut};

/// Symmetric matrix product C ← α·A·B + β·C (`Side::Left`) or
/// C ← α·B·A + β·C (`Side::Right`), reading one triangle of `A`.
///
/// # Errors
///
/// Returns an error naming `side` or `uplo` for invalid options, `A` if it
/// is not square of order m (left) or n (right), `B` if it is not m×n, and
/// `C` if its access policy is not dense.
pub fn symm<T, A, B, C>(
    side: Side,
    uplo: Uplo,
    alpha: T,
    a: &A,
    b: &B,
    beta: T,
    c: &mut C,
) -> Result<(), BlasError>
where
    T: Scalar,
    A: Matrix<T> + ?Sized,
    B: Matrix<T> + ?Sized,
    C: MatrixMut<T> + ?Sized,
{
    product(false, side, uplo, alpha, a, b, beta, c)
}

/// Hermitian matrix product; the imaginary part of the diagonal of `A` is
/// never read.
///
/// # Errors
///
/// Same as [`symm`].
pub fn hemm<T, A, B, C>(
    side: Side,
    uplo: Uplo,
    alpha: T,
    a: &A,
    b: &B,
    beta: T,
    c: &mut C,
) -> Result<(), BlasError>
where
    T: Scalar,
    A: Matrix<T> + ?Sized,
    B: Matrix<T> + ?Sized,
    C: MatrixMut<T> + ?Sized,
{
    product(true, side, uplo, alpha, a, b, beta, c)
}

#[allow(clippy::too_many_arguments)]
fn product<T, A, B, C>(
    hermitian: bool,
    side: Side,
    uplo: Uplo,
    alpha: T,
    a: &A,
    b: &B,
    beta: T,
    c: &mut C,
) -> Result<(), BlasError>
where
    T: Scalar,
    A: Matrix<T> + ?Sized,
    B: Matrix<T> + ?Sized,
    C: MatrixMut<T> + ?Sized,
{
    check::option("side", side)?;
    check::option("uplo", uplo)?;
    let (m, n) = (c.nrows(), c.ncols());
    let order = square("A", a)?;
    check::conformant("A", if side == Side::Left { m } else { n }, order)?;
    check::conformant("B", m, b.nrows())?;
    check::conformant("B", n, b.ncols())?;
    check::access("C", c.write_access(), Access::Dense)?;

    if m == 0 || n == 0 || (alpha == T::zero() && beta == T::one()) {
        return Ok(());
    }
    if alpha == T::zero() {
        scale_matrix(beta, c);
        return Ok(());
    }

    let upper = uplo == Uplo::Upper;
    if side == Side::Left {
        for j in 0..n {
            for step in 0..m {
                // Rows already finished in this column lie inside the stored triangle.
                let i = if upper { step } else { m - 1 - step };
                let temp1 = alpha * b.at(i, j);
                let mut temp2 = T::zero();
                let others = if upper { 0..i } else { i + 1..m };
                for k in others {
                    let aki = a.at(k, i);
                    *c.at_mut(k, j) += temp1 * aki;
                    temp2 += b.at(k, j) * conj_if(hermitian, aki);
                }
                scale_entry(beta, c, i, j);
                *c.at_mut(i, j) += temp1 * diagonal(hermitian, a.at(i, i)) + alpha * temp2;
            }
        }
    } else {
        for j in 0..n {
            let temp = alpha * diagonal(hermitian, a.at(j, j));
            for i in 0..m {
                scale_entry(beta, c, i, j);
                *c.at_mut(i, j) += temp * b.at(i, j);
            }
            for k in (0..n).filter(|&k| k != j) {
                // A(k, j) read from the stored triangle.
                let akj = if (k < j) == upper {
                    a.at(k, j)
                } else {
                    conj_if(hermitian, a.at(j, k))
                };
                let temp = alpha * akj;
                for i in 0..m {
                    *c.at_mut(i, j) += temp * b.at(i, k);
                }
            }
        }
    }
    Ok(())
}
