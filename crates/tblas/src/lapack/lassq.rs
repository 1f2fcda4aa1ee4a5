use crate::scalar::{RealOf, RealScalar, Scalar};
use crate::view::Vector;

/// Scaled sum of squares.
///
/// Returns `(scale, sumsq)` with
/// `scale² · sumsq = scale₀² · sumsq₀ + Σ |xᵢ|²`, where `scale` is the largest
/// magnitude seen so far. Real and imaginary parts are accumulated separately.
/// A NaN entry makes both outputs NaN. Otherwise an infinite entry yields
/// `(inf, 1)`, and no later entry changes that.
///
/// ```
/// use tblas::lapack::lassq;
///
/// let (scale, sumsq) = lassq(&[3.0_f64, 4.0][..], 1.0, 0.0);
/// assert_eq!(scale, 4.0);
/// assert!((scale * scale * sumsq - 25.0).abs() < 1e-12);
/// ```
pub fn lassq<T, X>(x: &X, scale: RealOf<T>, sumsq: RealOf<T>) -> (RealOf<T>, RealOf<T>)
where
    T: Scalar,
    X: Vector<T> + ?Sized,
{
    let mut acc = Accumulator { scale, sumsq };
    for i in 0..x.len() {
        let xi = x.at(i);
        acc.add(xi.real());
        if T::is_complex() {
            acc.add(xi.imag());
        }
    }
    (acc.scale, acc.sumsq)
}

struct Accumulator<R> {
    scale: R,
    sumsq: R,
}

impl<R: RealScalar> Accumulator<R> {
    fn add(&mut self, value: R) {
        let absxi = value.abs();
        if absxi == R::zero() {
            return;
        }
        if absxi.is_nan() || self.scale.is_nan() || self.sumsq.is_nan() {
            let nan = absxi + self.scale + self.sumsq;
            self.scale = nan;
            self.sumsq = nan;
            return;
        }
        if absxi.is_infinite() {
            self.scale = absxi;
            self.sumsq = R::one();
            return;
        }
        if self.scale.is_infinite() {
            return;
        }
        if self.scale < absxi {
            let ratio = self.scale / absxi;
            self.sumsq = R::one() + self.sumsq * ratio * ratio;
            self.scale = absxi;
        } else {
            let ratio = absxi / self.scale;
            self.sumsq += ratio * ratio;
        }
    }
}
