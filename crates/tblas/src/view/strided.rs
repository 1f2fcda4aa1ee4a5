use std::ops::Range;

use super::{SubVector, Vector, VectorMut, strided_offset, strided_sub_offset};
use crate::check;
use crate::error::BlasError;
use crate::scalar::Scalar;

/// Read-only vector view with a fixed non-zero stride.
///
/// With a negative stride the vector runs backwards through the buffer:
/// logical element `i` lives at offset `(len - 1 - i) * |inc|`.
#[derive(Debug, Clone, Copy)]
pub struct StridedView<'a, T> {
    data: &'a [T],
    len: usize,
    inc: isize,
}

impl<'a, T: Scalar> StridedView<'a, T> {
    /// Creates a view of `len` elements at stride `inc`.
    ///
    /// # Errors
    ///
    /// Returns an error if `inc` is zero or `data` is too short.
    pub fn new(data: &'a [T], len: usize, inc: isize) -> Result<Self, BlasError> {
        check::increment("inc", inc)?;
        check::buffer("data", check::vector_extent(len, inc), data.len())?;
        Ok(Self::from_raw_parts(data, len, inc))
    }

    /// Unit-stride view of the whole slice.
    pub fn contiguous(data: &'a [T]) -> Self {
        Self::from_raw_parts(data, data.len(), 1)
    }

    /// Builds a view whose stride and extent were validated by the caller.
    pub(crate) fn from_raw_parts(data: &'a [T], len: usize, inc: isize) -> Self {
        Self { data, len, inc }
    }

    /// Element stride.
    pub fn inc(&self) -> isize {
        self.inc
    }
}

impl<T: Scalar> Vector<T> for StridedView<'_, T> {
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn at(&self, i: usize) -> T {
        debug_assert!(i < self.len);
        self.data[strided_offset(i, self.len, self.inc)]
    }
}

impl<'a, T: Scalar> SubVector<T> for StridedView<'a, T> {
    type Sub<'s>
        = StridedView<'a, T>
    where
        Self: 's;

    fn subvector(&self, range: Range<usize>) -> StridedView<'a, T> {
        let base = strided_sub_offset(&range, self.len, self.inc);
        let data: &'a [T] = self.data;
        let data = if range.is_empty() {
            &data[..0]
        } else {
            &data[base..]
        };
        StridedView::from_raw_parts(data, range.len(), self.inc)
    }
}

/// Mutable vector view with a fixed non-zero stride.
#[derive(Debug)]
pub struct StridedViewMut<'a, T> {
    data: &'a mut [T],
    len: usize,
    inc: isize,
}

impl<'a, T: Scalar> StridedViewMut<'a, T> {
    /// Creates a mutable view of `len` elements at stride `inc`.
    ///
    /// # Errors
    ///
    /// Returns an error if `inc` is zero or `data` is too short.
    pub fn new(data: &'a mut [T], len: usize, inc: isize) -> Result<Self, BlasError> {
        check::increment("inc", inc)?;
        check::buffer("data", check::vector_extent(len, inc), data.len())?;
        Ok(Self::from_raw_parts(data, len, inc))
    }

    /// Unit-stride view of the whole slice.
    pub fn contiguous(data: &'a mut [T]) -> Self {
        let len = data.len();
        Self::from_raw_parts(data, len, 1)
    }

    pub(crate) fn from_raw_parts(data: &'a mut [T], len: usize, inc: isize) -> Self {
        Self { data, len, inc }
    }

    /// Element stride.
    pub fn inc(&self) -> isize {
        self.inc
    }

    /// Reborrows as a read-only view.
    pub fn as_view(&self) -> StridedView<'_, T> {
        StridedView::from_raw_parts(self.data, self.len, self.inc)
    }

    /// Mutable view of the logical sub-range `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is not contained in `0..self.len()`.
    pub fn subvector_mut(&mut self, range: Range<usize>) -> StridedViewMut<'_, T> {
        let base = strided_sub_offset(&range, self.len, self.inc);
        let data = if range.is_empty() {
            &mut self.data[..0]
        } else {
            &mut self.data[base..]
        };
        StridedViewMut::from_raw_parts(data, range.len(), self.inc)
    }
}

impl<T: Scalar> Vector<T> for StridedViewMut<'_, T> {
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn at(&self, i: usize) -> T {
        debug_assert!(i < self.len);
        self.data[strided_offset(i, self.len, self.inc)]
    }
}

impl<T: Scalar> VectorMut<T> for StridedViewMut<'_, T> {
    #[inline]
    fn at_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < self.len);
        &mut self.data[strided_offset(i, self.len, self.inc)]
    }
}

impl<T: Scalar> SubVector<T> for StridedViewMut<'_, T> {
    type Sub<'s>
        = StridedView<'s, T>
    where
        Self: 's;

    fn subvector(&self, range: Range<usize>) -> StridedView<'_, T> {
        self.as_view().subvector(range)
    }
}
