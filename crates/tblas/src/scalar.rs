//! Scalar traits for kernel element types.
//!
//! Every kernel is generic over [`Scalar`]. The trait maps a type to its real
//! counterpart and provides the handful of operations the reference routines
//! need (conjugation, real/imaginary parts, |re|+|im|). Real-only routines
//! (`rotm`, `rotmg`, norms) additionally use [`RealScalar`].

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use faer_traits::ComplexField;
use num_complex::Complex;

/// Single-precision complex scalar.
#[allow(non_camel_case_types)]
pub type c32 = Complex<f32>;

/// Double-precision complex scalar.
#[allow(non_camel_case_types)]
pub type c64 = Complex<f64>;

/// The real type associated with a scalar.
pub type RealOf<T> = <T as Scalar>::Real;

/// Trait for scalar types supported by the kernels.
///
/// This wraps faer's `ComplexField` with the arithmetic bounds and the
/// real/complex helpers the BLAS routines are written against.
pub trait Scalar:
    ComplexField
    + Copy
    + Debug
    + Default
    + PartialEq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    /// The real type associated with this scalar (itself for real types).
    type Real: RealScalar;

    /// Returns the additive identity (zero).
    fn zero() -> Self {
        Self::default()
    }

    /// Returns the multiplicative identity (one).
    fn one() -> Self;

    /// Whether this type carries an imaginary part.
    fn is_complex() -> bool {
        !<Self as ComplexField>::IS_REAL
    }

    /// Embeds a real value.
    fn from_real(re: <Self as Scalar>::Real) -> Self;

    /// Builds a value from real and imaginary parts; real types drop `im`.
    fn from_parts(re: <Self as Scalar>::Real, im: <Self as Scalar>::Real) -> Self;

    /// Real part.
    fn real(self) -> <Self as Scalar>::Real;

    /// Imaginary part (zero for real types).
    fn imag(self) -> <Self as Scalar>::Real;

    /// Complex conjugate (identity for real types).
    fn conj(self) -> Self;

    /// |re| + |im|, the magnitude used by `asum` and `iamax`.
    fn abs1(self) -> <Self as Scalar>::Real {
        self.real().abs() + self.imag().abs()
    }

    /// Euclidean modulus |x|.
    fn modulus(self) -> <Self as Scalar>::Real;

    /// Multiplies by a real factor.
    fn scale(self, factor: <Self as Scalar>::Real) -> Self;
}

/// Real scalar types.
pub trait RealScalar: Scalar<Real = Self> + PartialOrd {
    /// Absolute value.
    fn abs(self) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Magnitude of `self` with the sign of `sign`.
    fn copysign(self, sign: Self) -> Self;

    /// Machine epsilon.
    fn epsilon() -> Self;

    /// Smallest positive normal number.
    fn safe_min() -> Self;

    /// Largest finite number.
    fn huge() -> Self;

    /// Conversion from an `f64` constant.
    fn from_f64(value: f64) -> Self;

    /// Whether the value is NaN.
    fn is_nan(self) -> bool;

    /// Whether the value is positive or negative infinity.
    fn is_infinite(self) -> bool;
}

/// Returns whether `T` is a complex type.
pub fn is_complex<T: Scalar>() -> bool {
    T::is_complex()
}

#[inline]
pub(crate) fn conj_if<T: Scalar>(conj: bool, value: T) -> T {
    if conj { value.conj() } else { value }
}

macro_rules! impl_scalars {
    ($($real:ty),*) => {$(
        impl Scalar for $real {
            type Real = $real;

            fn one() -> Self {
                1.0
            }

            fn from_real(re: $real) -> Self {
                re
            }

            fn from_parts(re: $real, _im: $real) -> Self {
                re
            }

            fn real(self) -> $real {
                self
            }

            fn imag(self) -> $real {
                0.0
            }

            fn conj(self) -> Self {
                self
            }

            fn abs1(self) -> $real {
                <$real>::abs(self)
            }

            fn modulus(self) -> $real {
                <$real>::abs(self)
            }

            fn scale(self, factor: $real) -> Self {
                self * factor
            }
        }

        impl RealScalar for $real {
            fn abs(self) -> Self {
                <$real>::abs(self)
            }

            fn sqrt(self) -> Self {
                <$real>::sqrt(self)
            }

            fn copysign(self, sign: Self) -> Self {
                <$real>::copysign(self, sign)
            }

            fn epsilon() -> Self {
                <$real>::EPSILON
            }

            fn safe_min() -> Self {
                <$real>::MIN_POSITIVE
            }

            fn huge() -> Self {
                <$real>::MAX
            }

            fn from_f64(value: f64) -> Self {
                value as $real
            }

            fn is_nan(self) -> bool {
                <$real>::is_nan(self)
            }

            fn is_infinite(self) -> bool {
                <$real>::is_infinite(self)
            }
        }

        impl Scalar for Complex<$real> {
            type Real = $real;

            fn one() -> Self {
                Complex::new(1.0, 0.0)
            }

            fn from_real(re: $real) -> Self {
                Complex::new(re, 0.0)
            }

            fn from_parts(re: $real, im: $real) -> Self {
                Complex::new(re, im)
            }

            fn real(self) -> $real {
                self.re
            }

            fn imag(self) -> $real {
                self.im
            }

            fn conj(self) -> Self {
                Complex::new(self.re, -self.im)
            }

            fn modulus(self) -> $real {
                self.re.hypot(self.im)
            }

            fn scale(self, factor: $real) -> Self {
                Complex::new(self.re * factor, self.im * factor)
            }
        }
    )*};
}

impl_scalars!(f32, f64);
