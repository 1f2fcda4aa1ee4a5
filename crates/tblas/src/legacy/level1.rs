use super::{vector, vector_mut};
use crate::check;
use crate::error::BlasError;
use crate::level1;
use crate::scalar::{RealOf, RealScalar, Scalar};

/// Σ|re(xᵢ)| + |im(xᵢ)| over `n` elements of `x` at stride `incx > 0`.
pub fn asum<T: Scalar>(n: usize, x: &[T], incx: isize) -> Result<RealOf<T>, BlasError> {
    check::positive_increment("incx", incx)?;
    let x = vector("x", n, x, incx)?;
    Ok(level1::asum(&x))
}

/// y ← α·x + y.
pub fn axpy<T: Scalar>(n: usize, alpha: T, x: &[T], incx: isize, y: &mut [T], incy: isize) -> Result<(), BlasError> {
    check::increment("incx", incx)?;
    check::increment("incy", incy)?;
    let x = vector("x", n, x, incx)?;
    let mut y = vector_mut("y", n, y, incy)?;
    level1::axpy(alpha, &x, &mut y)
}

/// y ← x.
pub fn copy<T: Scalar>(n: usize, x: &[T], incx: isize, y: &mut [T], incy: isize) -> Result<(), BlasError> {
    check::increment("incx", incx)?;
    check::increment("incy", incy)?;
    let x = vector("x", n, x, incx)?;
    let mut y = vector_mut("y", n, y, incy)?;
    level1::copy(&x, &mut y)
}

/// Σ conj(xᵢ)·yᵢ.
pub fn dot<T: Scalar>(n: usize, x: &[T], incx: isize, y: &[T], incy: isize) -> Result<T, BlasError> {
    check::increment("incx", incx)?;
    check::increment("incy", incy)?;
    level1::dot(&vector("x", n, x, incx)?, &vector("y", n, y, incy)?)
}

/// Σ xᵢ·yᵢ.
pub fn dotu<T: Scalar>(n: usize, x: &[T], incx: isize, y: &[T], incy: isize) -> Result<T, BlasError> {
    check::increment("incx", incx)?;
    check::increment("incy", incy)?;
    level1::dotu(&vector("x", n, x, incx)?, &vector("y", n, y, incy)?)
}

/// 0-based index of the first element of maximal |re| + |im|, or
/// [`INVALID_INDEX`](crate::level1::INVALID_INDEX) when `n = 0`.
pub fn iamax<T: Scalar>(n: usize, x: &[T], incx: isize) -> Result<usize, BlasError> {
    check::positive_increment("incx", incx)?;
    let x = vector("x", n, x, incx)?;
    Ok(level1::iamax(&x))
}

/// Euclidean norm.
pub fn nrm2<T: Scalar>(n: usize, x: &[T], incx: isize) -> Result<RealOf<T>, BlasError> {
    check::positive_increment("incx", incx)?;
    let x = vector("x", n, x, incx)?;
    Ok(level1::nrm2(&x))
}

/// Plane rotation of the pairs (xᵢ, yᵢ).
#[allow(clippy::too_many_arguments)]
pub fn rot<T: Scalar>(
    n: usize,
    x: &mut [T],
    incx: isize,
    y: &mut [T],
    incy: isize,
    c: RealOf<T>,
    s: T,
) -> Result<(), BlasError> {
    check::increment("incx", incx)?;
    check::increment("incy", incy)?;
    let mut x = vector_mut("x", n, x, incx)?;
    let mut y = vector_mut("y", n, y, incy)?;
    level1::rot(&mut x, &mut y, c, s)
}

/// Modified Givens rotation described by `param`.
pub fn rotm<R: RealScalar>(
    n: usize,
    x: &mut [R],
    incx: isize,
    y: &mut [R],
    incy: isize,
    param: &[R; 5],
) -> Result<(), BlasError> {
    check::increment("incx", incx)?;
    check::increment("incy", incy)?;
    let mut x = vector_mut("x", n, x, incx)?;
    let mut y = vector_mut("y", n, y, incy)?;
    level1::rotm(&mut x, &mut y, param)
}

/// x ← α·x with `incx > 0`.
pub fn scal<T: Scalar>(n: usize, alpha: T, x: &mut [T], incx: isize) -> Result<(), BlasError> {
    check::positive_increment("incx", incx)?;
    let mut x = vector_mut("x", n, x, incx)?;
    level1::scal(alpha, &mut x);
    Ok(())
}

/// x ↔ y.
pub fn swap<T: Scalar>(n: usize, x: &mut [T], incx: isize, y: &mut [T], incy: isize) -> Result<(), BlasError> {
    check::increment("incx", incx)?;
    check::increment("incy", incy)?;
    let mut x = vector_mut("x", n, x, incx)?;
    let mut y = vector_mut("y", n, y, incy)?;
    level1::swap(&mut x, &mut y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level1::INVALID_INDEX;

    #[test]
    fn test_negative_stride_reverses() {
        let x = [1.0, 2.0, 3.0];
        let mut y = [0.0; 3];
        copy(3, &x, 1, &mut y, -1).unwrap();
        assert_eq!(y, [3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_strided_reductions() {
        let x = [3.0, 99.0, -4.0, 99.0];
        assert_eq!(asum(2, &x, 2).unwrap(), 7.0);
        assert_eq!(nrm2(2, &x, 2).unwrap(), 5.0);
        assert_eq!(iamax(2, &x, 2).unwrap(), 1);
        assert_eq!(iamax::<f64>(0, &[], 1).unwrap(), INVALID_INDEX);
    }

    #[cfg(not(feature = "unchecked"))]
    #[test]
    fn test_increment_errors() {
        let mut x = [1.0; 4];
        assert_eq!(scal(2, 2.0, &mut x, 0).unwrap_err().param(), "incx");
        assert_eq!(scal(2, 2.0, &mut x, -1).unwrap_err().param(), "incx");
        assert_eq!(asum(2, &x, -1).unwrap_err().param(), "incx");
        let mut y = [0.0; 4];
        assert_eq!(axpy(2, 1.0, &x, 1, &mut y, 0).unwrap_err().param(), "incy");
        assert_eq!(copy(3, &x, 2, &mut y, 1).unwrap_err().param(), "x");
    }
}
