//! Symmetric and Hermitian matrix-vector kernels.
//!
//! Each public kernel is a thin wrapper over one loop body shared by the
//! symmetric and Hermitian variants; the Hermitian flag switches on
//! conjugation of off-diagonal reads and a real diagonal.

use super::{diagonal, scale_vector, square};
use crate::check;
use crate::error::BlasError;
use crate::options::Uplo;
use crate::scalar::{RealOf, Scalar, conj_if};
use crate::view::{Access, Matrix, MatrixMut, Vector, VectorMut};

/// Symmetric matrix-vector product y ← α·A·x + β·y, reading one triangle of `A`.
///
/// # Errors
///
/// Returns an error naming `uplo` for an invalid triangle, `A` if it is not
/// square, or `x`/`y` for mismatched lengths.
pub fn symv<T, A, X, Y>(uplo: Uplo, alpha: T, a: &A, x: &X, beta: T, y: &mut Y) -> Result<(), BlasError>
where
    T: Scalar,
    A: Matrix<T> + ?Sized,
    X: Vector<T> + ?Sized,
    Y: VectorMut<T> + ?Sized,
{
    product(false, uplo, alpha, a, x, beta, y)
}

/// Hermitian matrix-vector product y ← α·A·x + β·y.
///
/// The imaginary parts of the diagonal of `A` are never read.
///
/// # Errors
///
/// Same as [`symv`].
pub fn hemv<T, A, X, Y>(uplo: Uplo, alpha: T, a: &A, x: &X, beta: T, y: &mut Y) -> Result<(), BlasError>
where
    T: Scalar,
    A: Matrix<T> + ?Sized,
    X: Vector<T> + ?Sized,
    Y: VectorMut<T> + ?Sized,
{
    product(true, uplo, alpha, a, x, beta, y)
}

fn product<T, A, X, Y>(
    hermitian: bool,
    uplo: Uplo,
    alpha: T,
    a: &A,
    x: &X,
    beta: T,
    y: &mut Y,
) -> Result<(), BlasError>
where
    T: Scalar,
    A: Matrix<T> + ?Sized,
    X: Vector<T> + ?Sized,
    Y: VectorMut<T> + ?Sized,
{
    check::option("uplo", uplo)?;
    let n = square("A", a)?;
    check::conformant("x", n, x.len())?;
    check::conformant("y", n, y.len())?;

    if n == 0 || (alpha == T::zero() && beta == T::one()) {
        return Ok(());
    }
    scale_vector(beta, y);
    if alpha == T::zero() {
        return Ok(());
    }

    for j in 0..n {
        let temp1 = alpha * x.at(j);
        let mut temp2 = T::zero();
        let rows = if uplo == Uplo::Upper { 0..j } else { j + 1..n };
        for i in rows {
            let aij = a.at(i, j);
            *y.at_mut(i) += temp1 * aij;
            temp2 += conj_if(hermitian, aij) * x.at(i);
        }
        *y.at_mut(j) += temp1 * diagonal(hermitian, a.at(j, j)) + alpha * temp2;
    }
    Ok(())
}

/// Symmetric rank-1 update A ← A + α·x·xᵀ on one triangle.
///
/// # Errors
///
/// Returns an error naming `uplo`, `A` (not square, or a view that may not
/// write the triangle) or `x`.
pub fn syr<T, X, A>(uplo: Uplo, alpha: T, x: &X, a: &mut A) -> Result<(), BlasError>
where
    T: Scalar,
    X: Vector<T> + ?Sized,
    A: MatrixMut<T> + ?Sized,
{
    rank1(false, uplo, alpha, x, a)
}

/// Hermitian rank-1 update A ← A + α·x·xᴴ on one triangle, with real α.
///
/// The diagonal is written with a zero imaginary part; only the real part
/// of the old diagonal is read.
///
/// # Errors
///
/// Same as [`syr`].
pub fn her<T, X, A>(uplo: Uplo, alpha: RealOf<T>, x: &X, a: &mut A) -> Result<(), BlasError>
where
    T: Scalar,
    X: Vector<T> + ?Sized,
    A: MatrixMut<T> + ?Sized,
{
    rank1(true, uplo, T::from_real(alpha), x, a)
}

fn rank1<T, X, A>(hermitian: bool, uplo: Uplo, alpha: T, x: &X, a: &mut A) -> Result<(), BlasError>
where
    T: Scalar,
    X: Vector<T> + ?Sized,
    A: MatrixMut<T> + ?Sized,
{
    check::option("uplo", uplo)?;
    let n = square("A", &*a)?;
    check::conformant("x", n, x.len())?;
    check::access("A", a.write_access(), Access::from(uplo))?;

    if n == 0 || alpha == T::zero() {
        return Ok(());
    }
    for j in 0..n {
        let xj = x.at(j);
        let temp = alpha * conj_if(hermitian, xj);
        let rows = if uplo == Uplo::Upper { 0..j } else { j + 1..n };
        for i in rows {
            *a.at_mut(i, j) += x.at(i) * temp;
        }
        let ajj = diagonal(hermitian, a.at(j, j)) + diagonal(hermitian, xj * temp);
        *a.at_mut(j, j) = ajj;
    }
    Ok(())
}

/// Symmetric rank-2 update A ← A + α·x·yᵀ + α·y·xᵀ on one triangle.
///
/// # Errors
///
/// Returns an error naming `uplo`, `A`, `x` or `y`.
pub fn syr2<T, X, Y, A>(uplo: Uplo, alpha: T, x: &X, y: &Y, a: &mut A) -> Result<(), BlasError>
where
    T: Scalar,
    X: Vector<T> + ?Sized,
    Y: Vector<T> + ?Sized,
    A: MatrixMut<T> + ?Sized,
{
    rank2(false, uplo, alpha, x, y, a)
}

/// Hermitian rank-2 update A ← A + α·x·yᴴ + conj(α)·y·xᴴ on one triangle.
///
/// The diagonal is written with a zero imaginary part.
///
/// # Errors
///
/// Same as [`syr2`].
pub fn her2<T, X, Y, A>(uplo: Uplo, alpha: T, x: &X, y: &Y, a: &mut A) -> Result<(), BlasError>
where
    T: Scalar,
    X: Vector<T> + ?Sized,
    Y: Vector<T> + ?Sized,
    A: MatrixMut<T> + ?Sized,
{
    rank2(true, uplo, alpha, x, y, a)
}

fn rank2<T, X, Y, A>(
    hermitian: bool,
    uplo: Uplo,
    alpha: T,
    x: &X,
    y: &Y,
    a: &mut A,
) -> Result<(), BlasError>
where
    T: Scalar,
    X: Vector<T> + ?Sized,
    Y: Vector<T> + ?Sized,
    A: MatrixMut<T> + ?Sized,
{
    check::option("uplo", uplo)?;
    let n = square("A", &*a)?;
    check::conformant("x", n, x.len())?;
    check::conformant("y", n, y.len())?;
    check::access("A", a.write_access(), Access::from(uplo))?;

    if n == 0 || alpha == T::zero() {
        return Ok(());
    }
    for j in 0..n {
        let (xj, yj) = (x.at(j), y.at(j));
        let temp1 = alpha * conj_if(hermitian, yj);
        let temp2 = conj_if(hermitian, alpha * xj);
        let rows = if uplo == Uplo::Upper { 0..j } else { j + 1..n };
        for i in rows {
            *a.at_mut(i, j) += x.at(i) * temp1 + y.at(i) * temp2;
        }
        let ajj = diagonal(hermitian, a.at(j, j)) + diagonal(hermitian, xj * temp1 + yj * temp2);
        *a.at_mut(j, j) = ajj;
    }
    Ok(())
}
