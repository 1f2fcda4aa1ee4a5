//! In-place updates: `axpy`, `copy`, `scal`, `swap`.

use crate::check;
use crate::error::BlasError;
use crate::scalar::Scalar;
use crate::view::{Vector, VectorMut};

/// y ← α·x + y.
///
/// With α = 0, `y` is neither read nor written.
///
/// # Errors
///
/// Returns an error naming `y` if the lengths differ.
pub fn axpy<T, X, Y>(alpha: T, x: &X, y: &mut Y) -> Result<(), BlasError>
where
    T: Scalar,
    X: Vector<T> + ?Sized,
    Y: VectorMut<T> + ?Sized,
{
    check::conformant("y", x.len(), y.len())?;
    if alpha == T::zero() {
        return Ok(());
    }
    for i in 0..x.len() {
        *y.at_mut(i) += alpha * x.at(i);
    }
    Ok(())
}

/// y ← x.
///
/// # Errors
///
/// Returns an error naming `y` if the lengths differ.
pub fn copy<T, X, Y>(x: &X, y: &mut Y) -> Result<(), BlasError>
where
    T: Scalar,
    X: Vector<T> + ?Sized,
    Y: VectorMut<T> + ?Sized,
{
    check::conformant("y", x.len(), y.len())?;
    for i in 0..x.len() {
        y.set(i, x.at(i));
    }
    Ok(())
}

/// x ← α·x.
///
/// Every element is multiplied, so α = 0 maps NaN entries to NaN.
pub fn scal<T: Scalar, X: VectorMut<T> + ?Sized>(alpha: T, x: &mut X) {
    for i in 0..x.len() {
        *x.at_mut(i) *= alpha;
    }
}

/// x ↔ y.
///
/// # Errors
///
/// Returns an error naming `y` if the lengths differ.
pub fn swap<T, X, Y>(x: &mut X, y: &mut Y) -> Result<(), BlasError>
where
    T: Scalar,
    X: VectorMut<T> + ?Sized,
    Y: VectorMut<T> + ?Sized,
{
    check::conformant("y", x.len(), y.len())?;
    for i in 0..x.len() {
        let tmp = x.at(i);
        x.set(i, y.at(i));
        y.set(i, tmp);
    }
    Ok(())
}
