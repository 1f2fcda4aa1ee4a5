use crate::check;
use crate::error::BlasError;
use crate::options::Layout;
use crate::scalar::{Scalar, conj_if};
use crate::view::{Access, MatrixMut, Vector};

/// Conjugated rank-1 update A ← A + α·x·yᴴ.
///
/// # Errors
///
/// Returns an error naming `x` or `y` if their lengths do not match the
/// shape of `A`, or `A` if its access policy is not dense.
pub fn ger<T, X, Y, A>(alpha: T, x: &X, y: &Y, a: &mut A) -> Result<(), BlasError>
where
    T: Scalar,
    X: Vector<T> + ?Sized,
    Y: Vector<T> + ?Sized,
    A: MatrixMut<T> + ?Sized,
{
    rank1(true, alpha, x, y, a)
}

/// Unconjugated rank-1 update A ← A + α·x·yᵀ.
///
/// # Errors
///
/// Same as [`ger`].
pub fn geru<T, X, Y, A>(alpha: T, x: &X, y: &Y, a: &mut A) -> Result<(), BlasError>
where
    T: Scalar,
    X: Vector<T> + ?Sized,
    Y: Vector<T> + ?Sized,
    A: MatrixMut<T> + ?Sized,
{
    rank1(false, alpha, x, y, a)
}

fn rank1<T, X, Y, A>(conj: bool, alpha: T, x: &X, y: &Y, a: &mut A) -> Result<(), BlasError>
where
    T: Scalar,
    X: Vector<T> + ?Sized,
    Y: Vector<T> + ?Sized,
    A: MatrixMut<T> + ?Sized,
{
    let (m, n) = (a.nrows(), a.ncols());
    check::conformant("x", m, x.len())?;
    check::conformant("y", n, y.len())?;
    check::access("A", a.write_access(), Access::Dense)?;

    if m == 0 || n == 0 || alpha == T::zero() {
        return Ok(());
    }
    if a.layout() == Layout::RowMajor {
        for i in 0..m {
            let temp = alpha * x.at(i);
            for j in 0..n {
                *a.at_mut(i, j) += temp * conj_if(conj, y.at(j));
            }
        }
    } else {
        for j in 0..n {
            let temp = alpha * conj_if(conj, y.at(j));
            for i in 0..m {
                *a.at_mut(i, j) += x.at(i) * temp;
            }
        }
    }
    Ok(())
}
