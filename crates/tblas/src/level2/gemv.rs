use super::scale_vector;
use crate::check;
use crate::error::BlasError;
use crate::options::{Layout, Op};
use crate::scalar::{Scalar, conj_if};
use crate::view::{Matrix, Vector, VectorMut};

/// General matrix-vector product y ← α·op(A)·x + β·y.
///
/// An empty `A` leaves `y` untouched. With β = 0, `y` is overwritten without
/// being read; with α = 0 and β = 1 nothing is touched.
///
/// # Errors
///
/// Returns an error naming `trans` for an invalid transpose, or `x`/`y` when
/// their lengths do not match `op(A)`.
pub fn gemv<T, A, X, Y>(trans: Op, alpha: T, a: &A, x: &X, beta: T, y: &mut Y) -> Result<(), BlasError>
where
    T: Scalar,
    A: Matrix<T> + ?Sized,
    X: Vector<T> + ?Sized,
    Y: VectorMut<T> + ?Sized,
{
    check::option("trans", trans)?;
    let (m, n) = (a.nrows(), a.ncols());
    let (lenx, leny) = if trans == Op::NoTrans { (n, m) } else { (m, n) };
    check::conformant("x", lenx, x.len())?;
    check::conformant("y", leny, y.len())?;

    if m == 0 || n == 0 || (alpha == T::zero() && beta == T::one()) {
        return Ok(());
    }
    scale_vector(beta, y);
    if alpha == T::zero() {
        return Ok(());
    }

    let conj = trans == Op::ConjTrans;
    match (trans == Op::NoTrans, a.layout() == Layout::RowMajor) {
        // y += α·A·x, one column of A at a time.
        (true, false) => {
            for j in 0..n {
                let temp = alpha * x.at(j);
                for i in 0..m {
                    *y.at_mut(i) += temp * a.at(i, j);
                }
            }
        }
        // y += α·A·x, one row of A at a time.
        (true, true) => {
            for i in 0..m {
                let mut temp = T::zero();
                for j in 0..n {
                    temp += a.at(i, j) * x.at(j);
                }
                *y.at_mut(i) += alpha * temp;
            }
        }
        // y += α·op(A)·x as dot products down the columns of A.
        (false, false) => {
            for j in 0..n {
                let mut temp = T::zero();
                for i in 0..m {
                    temp += conj_if(conj, a.at(i, j)) * x.at(i);
                }
                *y.at_mut(j) += alpha * temp;
            }
        }
        // y += α·op(A)·x as updates along the rows of A.
        (false, true) => {
            for i in 0..m {
                let temp = alpha * x.at(i);
                for j in 0..n {
                    *y.at_mut(j) += temp * conj_if(conj, a.at(i, j));
                }
            }
        }
    }
    Ok(())
}
