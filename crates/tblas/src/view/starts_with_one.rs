use std::ops::Range;

use super::{SubVector, Vector};
use crate::scalar::Scalar;

/// Read-only adapter whose element 0 is one, whatever the storage holds.
///
/// Householder vectors are stored with their implicit leading one
/// overwritten by other data; this adapter restores it on read. Slicing keeps
/// the substitution only for sub-ranges that start at index 0.
///
/// ```
/// use tblas::view::{StartsWithOne, SubVector, Vector};
///
/// let stored = [9.0, 2.0, 3.0];
/// let v = StartsWithOne::new(&stored[..]);
/// assert_eq!(v.at(0), 1.0);
/// assert_eq!(v.at(1), 2.0);
/// assert_eq!(v.subvector(0..2).at(0), 1.0);
/// assert_eq!(v.subvector(1..3).at(0), 2.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StartsWithOne<V> {
    inner: V,
    active: bool,
}

impl<V> StartsWithOne<V> {
    /// Wraps `inner`.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            active: true,
        }
    }

    /// Whether logical index 0 reads as one.
    pub fn substitutes_first(&self) -> bool {
        self.active
    }

    /// Returns the wrapped vector.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<T: Scalar, V: Vector<T>> Vector<T> for StartsWithOne<V> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    fn at(&self, i: usize) -> T {
        if self.active && i == 0 {
            T::one()
        } else {
            self.inner.at(i)
        }
    }
}

impl<T: Scalar, V: SubVector<T>> SubVector<T> for StartsWithOne<V> {
    type Sub<'s>
        = StartsWithOne<V::Sub<'s>>
    where
        Self: 's;

    fn subvector(&self, range: Range<usize>) -> Self::Sub<'_> {
        let active = self.active && range.start == 0;
        StartsWithOne {
            inner: self.inner.subvector(range),
            active,
        }
    }
}
