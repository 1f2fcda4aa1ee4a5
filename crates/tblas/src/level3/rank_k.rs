//! Symmetric and Hermitian rank-k and rank-2k updates.
//!
//! Only the `uplo` triangle of `C` is read or written. The Hermitian
//! variants take real β (and real α for `herk`), always leave a real
//! diagonal behind, and never read the imaginary part of the old diagonal.

use std::ops::Range;

use super::scale_entry;
use crate::check;
use crate::error::BlasError;
use crate::level2::{diagonal, square};
use crate::options::{Op, Uplo};
use crate::scalar::{RealOf, Scalar, conj_if};
use crate::view::{Access, Matrix, MatrixMut};

/// Symmetric rank-k update C ← α·A·Aᵀ + β·C (`NoTrans`, A is n×k) or
/// C ← α·Aᵀ·A + β·C (`Trans`, A is k×n).
///
/// # Errors
///
/// Returns an error naming `uplo`, `trans` (anything but `NoTrans`/`Trans`),
/// `C` if it is not square or may not write the triangle, and `A` for a
/// mismatched shape.
pub fn syrk<T, A, C>(uplo: Uplo, trans: Op, alpha: T, a: &A, beta: T, c: &mut C) -> Result<(), BlasError>
where
    T: Scalar,
    A: Matrix<T> + ?Sized,
    C: MatrixMut<T> + ?Sized,
{
    check::option("uplo", uplo)?;
    check::transpose_in("trans", trans, &[Op::NoTrans, Op::Trans])?;
    rank_k(false, uplo, trans, alpha, a, beta, c)
}

/// Hermitian rank-k update C ← α·A·Aᴴ + β·C (`NoTrans`) or
/// C ← α·Aᴴ·A + β·C (`ConjTrans`), with real α and β.
///
/// # Errors
///
/// As [`syrk`], with `trans` restricted to `NoTrans`/`ConjTrans`.
pub fn herk<T, A, C>(
    uplo: Uplo,
    trans: Op,
    alpha: RealOf<T>,
    a: &A,
    beta: RealOf<T>,
    c: &mut C,
) -> Result<(), BlasError>
where
    T: Scalar,
    A: Matrix<T> + ?Sized,
    C: MatrixMut<T> + ?Sized,
{
    check::option("uplo", uplo)?;
    check::transpose_in("trans", trans, &[Op::NoTrans, Op::ConjTrans])?;
    rank_k(true, uplo, trans, T::from_real(alpha), a, T::from_real(beta), c)
}

/// Symmetric rank-2k update C ← α·A·Bᵀ + α·B·Aᵀ + β·C (`NoTrans`) or
/// C ← α·Aᵀ·B + α·Bᵀ·A + β·C (`Trans`).
///
/// # Errors
///
/// As [`syrk`], plus `B` when its shape differs from that of `A`.
#[allow(clippy::too_many_arguments)]
pub fn syr2k<T, A, B, C>(
    uplo: Uplo,
    trans: Op,
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
    check::option("uplo", uplo)?;
    check::transpose_in("trans", trans, &[Op::NoTrans, Op::Trans])?;
    rank_2k(false, uplo, trans, alpha, a, b, beta, c)
}

/// Hermitian rank-2k update C ← α·A·Bᴴ + conj(α)·B·Aᴴ + β·C (`NoTrans`) or
/// C ← α·Aᴴ·B + conj(α)·Bᴴ·A + β·C (`ConjTrans`), with real β.
///
/// # Errors
///
/// As [`syr2k`], with `trans` restricted to `NoTrans`/`ConjTrans`.
#[allow(clippy::too_many_arguments)]
pub fn her2k<T, A, B, C>(
    uplo: Uplo,
    trans: Op,
    alpha: T,
    a: &A,
    b: &B,
    beta: RealOf<T>,
    c: &mut C,
) -> Result<(), BlasError>
where
    T: Scalar,
    A: Matrix<T> + ?Sized,
    B: Matrix<T> + ?Sized,
    C: MatrixMut<T> + ?Sized,
{
    check::option("uplo", uplo)?;
    check::transpose_in("trans", trans, &[Op::NoTrans, Op::ConjTrans])?;
    rank_2k(true, uplo, trans, alpha, a, b, T::from_real(beta), c)
}

/// Order n of `C` and inner dimension k, validating `param` against them.
fn shapes<T, A, C>(trans: Op, param: &'static str, a: &A, c: &C) -> Result<(usize, usize), BlasError>
where
    T: Scalar,
    A: Matrix<T> + ?Sized,
    C: MatrixMut<T> + ?Sized,
{
    let n = square("C", c)?;
    let (rows, k) = if trans == Op::NoTrans {
        (a.nrows(), a.ncols())
    } else {
        (a.ncols(), a.nrows())
    };
    check::conformant(param, n, rows)?;
    Ok((n, k))
}

fn triangle(uplo: Uplo, j: usize, n: usize) -> Range<usize> {
    if uplo == Uplo::Upper { 0..j + 1 } else { j..n }
}

/// Scales column `j` of the stored triangle by β.
fn scale_column<T, C>(hermitian: bool, uplo: Uplo, beta: T, c: &mut C, j: usize, n: usize)
where
    T: Scalar,
    C: MatrixMut<T> + ?Sized,
{
    for i in triangle(uplo, j, n) {
        if i == j && hermitian {
            let value = if beta == T::zero() {
                T::zero()
            } else {
                beta * diagonal(true, c.at(j, j))
            };
            *c.at_mut(j, j) = value;
        } else {
            scale_entry(beta, c, i, j);
        }
    }
}

/// β·C(i, j) as a summand, zero without reading when β = 0.
fn scaled<T, C>(hermitian: bool, beta: T, c: &C, i: usize, j: usize) -> T
where
    T: Scalar,
    C: MatrixMut<T> + ?Sized,
{
    if beta == T::zero() {
        T::zero()
    } else {
        beta * diagonal(hermitian && i == j, c.at(i, j))
    }
}

fn rank_k<T, A, C>(
    hermitian: bool,
    uplo: Uplo,
    trans: Op,
    alpha: T,
    a: &A,
    beta: T,
    c: &mut C,
) -> Result<(), BlasError>
where
    T: Scalar,
    A: Matrix<T> + ?Sized,
    C: MatrixMut<T> + ?Sized,
{
    let (n, k) = shapes(trans, "A", a, &*c)?;
    check::access("C", c.write_access(), Access::from(uplo))?;

    if n == 0 || ((alpha == T::zero() || k == 0) && beta == T::one()) {
        return Ok(());
    }
    if alpha == T::zero() || k == 0 {
        for j in 0..n {
            scale_column(hermitian, uplo, beta, c, j, n);
        }
        return Ok(());
    }

    if trans == Op::NoTrans {
        for j in 0..n {
            scale_column(hermitian, uplo, beta, c, j, n);
            for l in 0..k {
                let ajl = a.at(j, l);
                if ajl == T::zero() {
                    continue;
                }
                let temp = alpha * conj_if(hermitian, ajl);
                for i in triangle(uplo, j, n) {
                    *c.at_mut(i, j) += temp * a.at(i, l);
                }
            }
            if hermitian {
                let cjj = diagonal(true, c.at(j, j));
                *c.at_mut(j, j) = cjj;
            }
        }
    } else {
        for j in 0..n {
            for i in triangle(uplo, j, n) {
                let mut temp = T::zero();
                for l in 0..k {
                    temp += conj_if(hermitian, a.at(l, i)) * a.at(l, j);
                }
                let value = diagonal(hermitian && i == j, alpha * temp) + scaled(hermitian, beta, c, i, j);
                *c.at_mut(i, j) = value;
            }
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn rank_2k<T, A, B, C>(
    hermitian: bool,
    uplo: Uplo,
    trans: Op,
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
    let (n, k) = shapes(trans, "A", a, &*c)?;
    check::conformant("B", a.nrows(), b.nrows())?;
    check::conformant("B", a.ncols(), b.ncols())?;
    check::access("C", c.write_access(), Access::from(uplo))?;

    if n == 0 || ((alpha == T::zero() || k == 0) && beta == T::one()) {
        return Ok(());
    }
    if alpha == T::zero() || k == 0 {
        for j in 0..n {
            scale_column(hermitian, uplo, beta, c, j, n);
        }
        return Ok(());
    }

    let alpha2 = conj_if(hermitian, alpha);
    if trans == Op::NoTrans {
        for j in 0..n {
            scale_column(hermitian, uplo, beta, c, j, n);
            for l in 0..k {
                let (ajl, bjl) = (a.at(j, l), b.at(j, l));
                if ajl == T::zero() && bjl == T::zero() {
                    continue;
                }
                let temp1 = alpha * conj_if(hermitian, bjl);
                let temp2 = alpha2 * conj_if(hermitian, ajl);
                for i in triangle(uplo, j, n) {
                    *c.at_mut(i, j) += a.at(i, l) * temp1 + b.at(i, l) * temp2;
                }
            }
            if hermitian {
                let cjj = diagonal(true, c.at(j, j));
                *c.at_mut(j, j) = cjj;
            }
        }
    } else {
        for j in 0..n {
            for i in triangle(uplo, j, n) {
                let mut temp1 = T::zero();
                let mut temp2 = T::zero();
                for l in 0..k {
                    temp1 += conj_if(hermitian, a.at(l, i)) * b.at(l, j);
                    temp2 += conj_if(hermitian, b.at(l, i)) * a.at(l, j);
                }
                let sum = alpha * temp1 + alpha2 * temp2;
                let value = diagonal(hermitian && i == j, sum) + scaled(hermitian, beta, c, i, j);
                *c.at_mut(i, j) = value;
            }
        }
    }
    Ok(())
}
