//! Reductions: `asum`, `dot`, `dotu`, `iamax`, `nrm2`.

use crate::check;
use crate::error::BlasError;
use crate::lapack::lassq;
use crate::scalar::{RealOf, RealScalar, Scalar};
use crate::view::Vector;

/// Index returned by [`iamax`] for an empty vector.
pub const INVALID_INDEX: usize = usize::MAX;

/// Sum of |re(xᵢ)| + |im(xᵢ)| (Σ|xᵢ| for real types).
pub fn asum<T: Scalar, X: Vector<T> + ?Sized>(x: &X) -> RealOf<T> {
    let mut sum = RealOf::<T>::zero();
    for i in 0..x.len() {
        sum += x.at(i).abs1();
    }
    sum
}

/// Conjugated dot product Σ conj(xᵢ)·yᵢ.
///
/// # Errors
///
/// Returns an error naming `y` if the lengths differ.
pub fn dot<T, X, Y>(x: &X, y: &Y) -> Result<T, BlasError>
where
    T: Scalar,
    X: Vector<T> + ?Sized,
    Y: Vector<T> + ?Sized,
{
    check::conformant("y", x.len(), y.len())?;
    let mut sum = T::zero();
    for i in 0..x.len() {
        sum += x.at(i).conj() * y.at(i);
    }
    Ok(sum)
}

/// Unconjugated dot product Σ xᵢ·yᵢ.
///
/// # Errors
///
/// Returns an error naming `y` if the lengths differ.
pub fn dotu<T, X, Y>(x: &X, y: &Y) -> Result<T, BlasError>
where
    T: Scalar,
    X: Vector<T> + ?Sized,
    Y: Vector<T> + ?Sized,
{
    check::conformant("y", x.len(), y.len())?;
    let mut sum = T::zero();
    for i in 0..x.len() {
        sum += x.at(i) * y.at(i);
    }
    Ok(sum)
}

/// Index of the first element of maximal |re| + |im|.
///
/// Returns [`INVALID_INDEX`] for an empty vector. NaN entries after the first
/// position are never selected.
pub fn iamax<T: Scalar, X: Vector<T> + ?Sized>(x: &X) -> usize {
    if x.is_empty() {
        return INVALID_INDEX;
    }
    let mut index = 0;
    let mut max = x.at(0).abs1();
    for i in 1..x.len() {
        let value = x.at(i).abs1();
        if value > max {
            index = i;
            max = value;
        }
    }
    index
}

/// Euclidean norm, accumulated with scaling to avoid overflow and underflow.
pub fn nrm2<T: Scalar, X: Vector<T> + ?Sized>(x: &X) -> RealOf<T> {
    if x.is_empty() {
        return RealOf::<T>::zero();
    }
    let (scale, sumsq) = lassq(x, RealOf::<T>::zero(), RealOf::<T>::one());
    scale * RealScalar::sqrt(sumsq)
}
