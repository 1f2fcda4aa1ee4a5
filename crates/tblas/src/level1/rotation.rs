//! Plane rotations: `rot`, `rotg`, and the modified Givens pair `rotm`/`rotmg`.

use crate::check;
use crate::error::BlasError;
use crate::scalar::{RealOf, RealScalar, Scalar};
use crate::view::VectorMut;

/// Applies a plane rotation: x ← c·x + s·y, y ← c·y − conj(s)·x.
///
/// Nothing is touched when the vectors are empty or when (c, s) = (1, 0).
///
/// # Errors
///
/// Returns an error naming `y` if the lengths differ.
pub fn rot<T, X, Y>(x: &mut X, y: &mut Y, c: RealOf<T>, s: T) -> Result<(), BlasError>
where
    T: Scalar,
    X: VectorMut<T> + ?Sized,
    Y: VectorMut<T> + ?Sized,
{
    check::conformant("y", x.len(), y.len())?;
    if x.is_empty() || (c == RealOf::<T>::one() && s == T::zero()) {
        return Ok(());
    }
    let sc = s.conj();
    for i in 0..x.len() {
        let (xi, yi) = (x.at(i), y.at(i));
        x.set(i, xi.scale(c) + s * yi);
        y.set(i, yi.scale(c) - sc * xi);
    }
    Ok(())
}

/// Constructs a plane rotation that annihilates `b`.
///
/// Returns `(c, s, r)` such that
/// `[c s; -conj(s) c] · [a; b] = [r; 0]` with real `c`.
/// For real types `r` carries the sign of whichever of `a`, `b` is larger in
/// magnitude; for complex types `r` has the phase of `a`.
///
/// ```
/// use tblas::level1::rotg;
///
/// let (c, s, r) = rotg(3.0_f64, 4.0);
/// assert!((c - 0.6).abs() < 1e-15 && (s - 0.8).abs() < 1e-15 && (r - 5.0).abs() < 1e-15);
/// ```
pub fn rotg<T: Scalar>(a: T, b: T) -> (RealOf<T>, T, T) {
    let zero = RealOf::<T>::zero();
    let one = RealOf::<T>::one();
    let anorm = a.modulus();
    let bnorm = b.modulus();

    if T::is_complex() {
        if anorm == zero {
            return (zero, T::one(), b);
        }
        let scale = anorm + bnorm;
        let norm = scale * RealScalar::sqrt(sq(anorm / scale) + sq(bnorm / scale));
        let phase = a.scale(one / anorm);
        let c = anorm / norm;
        let s = (phase * b.conj()).scale(one / norm);
        return (c, s, phase.scale(norm));
    }

    if bnorm == zero {
        return (one, T::zero(), a);
    }
    if anorm == zero {
        return (zero, T::one(), b);
    }
    let safmin = RealOf::<T>::safe_min();
    let safmax = one / safmin;
    let scl = smaller(larger(safmin, larger(anorm, bnorm)), safmax);
    let sign_source = if anorm > bnorm { a.real() } else { b.real() };
    let sigma = RealScalar::copysign(one, sign_source);
    let r = sigma * scl * RealScalar::sqrt(sq(anorm / scl) + sq(bnorm / scl));
    (a.real() / r, T::from_real(b.real() / r), T::from_real(r))
}

fn sq<R: RealScalar>(x: R) -> R {
    x * x
}

fn larger<R: RealScalar>(a: R, b: R) -> R {
    if b > a { b } else { a }
}

fn smaller<R: RealScalar>(a: R, b: R) -> R {
    if b < a { b } else { a }
}

/// Applies the modified Givens transformation described by `param`.
///
/// `param` is `[flag, h11, h21, h12, h22]`:
///
/// | flag | H |
/// |------|---|
/// | −1   | `[h11 h12; h21 h22]` |
/// | 0    | `[1 h12; h21 1]` |
/// | 1    | `[h11 1; −1 h22]` |
/// | −2   | identity (no-op) |
///
/// # Errors
///
/// Returns an error naming `y` if the lengths differ.
pub fn rotm<R, X, Y>(x: &mut X, y: &mut Y, param: &[R; 5]) -> Result<(), BlasError>
where
    R: RealScalar,
    X: VectorMut<R> + ?Sized,
    Y: VectorMut<R> + ?Sized,
{
    check::conformant("y", x.len(), y.len())?;
    let flag = param[0];
    let one = R::one();
    if x.is_empty() || flag == -(one + one) {
        return Ok(());
    }
    let (h11, h21, h12, h22) = if flag < R::zero() {
        (param[1], param[2], param[3], param[4])
    } else if flag == R::zero() {
        (one, param[2], param[3], one)
    } else {
        (param[1], -one, one, param[4])
    };
    for i in 0..x.len() {
        let (w, z) = (x.at(i), y.at(i));
        x.set(i, w * h11 + z * h12);
        y.set(i, w * h21 + z * h22);
    }
    Ok(())
}

/// Constructs the modified Givens transformation that zeros the second
/// component of `(sqrt(d1)·x1, sqrt(d2)·y1)`.
///
/// `d1`, `d2` and `x1` are updated in place; the returned array is the
/// `param` consumed by [`rotm`]. Entries not implied by the flag are zero.
///
/// # Errors
///
/// Returns an error naming `d1` if `d1` is negative.
pub fn rotmg<R: RealScalar>(
    d1: &mut R,
    d2: &mut R,
    x1: &mut R,
    y1: R,
) -> Result<[R; 5], BlasError> {
    check::value("d1", !(*d1 < R::zero()), "must be non-negative")?;
    if *d1 < R::zero() {
        return Ok(zero_transform(d1, d2, x1));
    }

    let zero = R::zero();
    let one = R::one();
    let gam = R::from_f64(4096.0);
    let gamsq = gam * gam;
    let rgamsq = one / gamsq;

    let mut flag;
    let (mut h11, mut h21, mut h12, mut h22) = (zero, zero, zero, zero);

    let p2 = *d2 * y1;
    if p2 == zero {
        return Ok([-(one + one), zero, zero, zero, zero]);
    }
    let p1 = *d1 * *x1;
    let q2 = p2 * y1;
    let q1 = p1 * *x1;

    if q1.abs() > q2.abs() {
        h21 = -y1 / *x1;
        h12 = p2 / p1;
        let u = one - h12 * h21;
        if u > zero {
            flag = zero;
            *d1 /= u;
            *d2 /= u;
            *x1 *= u;
        } else {
            return Ok(zero_transform(d1, d2, x1));
        }
    } else if q2 < zero {
        return Ok(zero_transform(d1, d2, x1));
    } else {
        flag = one;
        h11 = p1 / p2;
        h22 = *x1 / y1;
        let u = one + h11 * h22;
        let temp = *d2 / u;
        *d2 = *d1 / u;
        *d1 = temp;
        *x1 = y1 * u;
    }

    let full = -one;
    if *d1 != zero {
        while *d1 <= rgamsq || *d1 >= gamsq {
            expand_flag(&mut flag, &mut h11, &mut h21, &mut h12, &mut h22);
            if *d1 <= rgamsq {
                *d1 *= gamsq;
                *x1 /= gam;
                h11 /= gam;
                h12 /= gam;
            } else {
                *d1 /= gamsq;
                *x1 *= gam;
                h11 *= gam;
                h12 *= gam;
            }
        }
    }
    if *d2 != zero {
        while d2.abs() <= rgamsq || d2.abs() >= gamsq {
            expand_flag(&mut flag, &mut h11, &mut h21, &mut h12, &mut h22);
            if d2.abs() <= rgamsq {
                *d2 *= gamsq;
                h21 /= gam;
                h22 /= gam;
            } else {
                *d2 /= gamsq;
                h21 *= gam;
                h22 *= gam;
            }
        }
    }

    Ok(if flag == full {
        [flag, h11, h21, h12, h22]
    } else if flag == zero {
        [flag, zero, h21, h12, zero]
    } else {
        [flag, h11, zero, zero, h22]
    })
}

/// Rescaling needs the explicit form of H; fill in the implied entries.
fn expand_flag<R: RealScalar>(flag: &mut R, h11: &mut R, h21: &mut R, h12: &mut R, h22: &mut R) {
    let one = R::one();
    if *flag == R::zero() {
        *h11 = one;
        *h22 = one;
        *flag = -one;
    } else if *flag == one {
        *h21 = -one;
        *h12 = one;
        *flag = -one;
    }
}

fn zero_transform<R: RealScalar>(d1: &mut R, d2: &mut R, x1: &mut R) -> [R; 5] {
    let zero = R::zero();
    *d1 = zero;
    *d2 = zero;
    *x1 = zero;
    [-R::one(), zero, zero, zero, zero]
}
