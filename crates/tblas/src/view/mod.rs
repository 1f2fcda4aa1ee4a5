//! Abstract container views.
//!
//! Kernels never see storage directly. They read and write through the
//! [`Vector`] and [`Matrix`] families, which any container can implement.
//! The crate ships strided vector views, dense row/column-major matrix views,
//! a logical transpose ([`OpView`]) and the [`StartsWithOne`] adapter used by
//! reflector routines.
//!
//! ```
//! use tblas::view::{DenseView, Matrix, StridedView, Vector};
//! use tblas::Layout;
//!
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let a = DenseView::new(&data, 2, 3, 2, Layout::ColMajor).unwrap();
//! assert_eq!(a.at(1, 2), 6.0);
//!
//! // Negative stride: logical element 0 is the last addressed slot.
//! let x = StridedView::new(&data, 3, -2).unwrap();
//! assert_eq!(x.at(0), 5.0);
//! assert_eq!(x.at(2), 1.0);
//! ```

mod dense;
mod op;
mod starts_with_one;
mod strided;

use std::ops::Range;

pub use dense::{DenseView, DenseViewMut};
pub use op::OpView;
pub use starts_with_one::StartsWithOne;
pub use strided::{StridedView, StridedViewMut};

use crate::options::{Layout, Uplo};
use crate::scalar::Scalar;

/// Read access to a logical vector.
pub trait Vector<T: Scalar> {
    /// Logical length.
    fn len(&self) -> usize;

    /// Whether the vector has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at logical index `i`.
    fn at(&self, i: usize) -> T;
}

/// Write access to a logical vector.
pub trait VectorMut<T: Scalar>: Vector<T> {
    /// Mutable reference to the element at logical index `i`.
    fn at_mut(&mut self, i: usize) -> &mut T;

    /// Overwrites the element at logical index `i`.
    fn set(&mut self, i: usize, value: T) {
        *self.at_mut(i) = value;
    }
}

/// Vectors that can be sliced into a contiguous logical sub-range.
pub trait SubVector<T: Scalar>: Vector<T> {
    /// View type of a sub-range.
    type Sub<'s>: Vector<T>
    where
        Self: 's;

    /// Logical elements `range` of this vector.
    ///
    /// # Panics
    ///
    /// Panics if `range` is not contained in `0..self.len()`.
    fn subvector(&self, range: Range<usize>) -> Self::Sub<'_>;
}

/// Read access to a logical matrix.
pub trait Matrix<T: Scalar> {
    /// Number of logical rows.
    fn nrows(&self) -> usize;

    /// Number of logical columns.
    fn ncols(&self) -> usize;

    /// Element at logical position `(i, j)`.
    fn at(&self, i: usize, j: usize) -> T;

    /// Storage order, used by kernels to pick a cache-friendly loop shape.
    fn layout(&self) -> Layout {
        Layout::ColMajor
    }
}

/// Write access to a logical matrix.
pub trait MatrixMut<T: Scalar>: Matrix<T> {
    /// Mutable reference to the element at logical position `(i, j)`.
    fn at_mut(&mut self, i: usize, j: usize) -> &mut T;

    /// Region this view may write.
    fn write_access(&self) -> Access {
        Access::Dense
    }
}

/// Region of a matrix a mutable view is allowed to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Access {
    /// Every element.
    #[default]
    Dense,
    /// The upper triangle including the diagonal.
    Upper,
    /// The lower triangle including the diagonal.
    Lower,
}

impl Access {
    /// Whether writes to `required` are covered by this policy.
    pub fn allows(self, required: Access) -> bool {
        self == Access::Dense || self == required
    }
}

impl From<Uplo> for Access {
    fn from(uplo: Uplo) -> Self {
        if uplo == Uplo::Lower {
            Access::Lower
        } else {
            Access::Upper
        }
    }
}

/// Storage offset of logical element `i` in a strided vector of length `len`.
#[inline]
pub(crate) fn strided_offset(i: usize, len: usize, inc: isize) -> usize {
    if inc >= 0 {
        i * inc as usize
    } else {
        (len - 1 - i) * inc.unsigned_abs()
    }
}

/// Slice of `data` that backs a logical sub-range of a strided vector.
pub(crate) fn strided_sub_offset(range: &Range<usize>, len: usize, inc: isize) -> usize {
    assert!(
        range.start <= range.end && range.end <= len,
        "subvector range {range:?} out of bounds for length {len}"
    );
    if range.is_empty() {
        0
    } else if inc >= 0 {
        range.start * inc as usize
    } else {
        (len - range.end) * inc.unsigned_abs()
    }
}

impl<T: Scalar, V: Vector<T> + ?Sized> Vector<T> for &V {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn at(&self, i: usize) -> T {
        (**self).at(i)
    }
}

impl<T: Scalar, V: Vector<T> + ?Sized> Vector<T> for &mut V {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn at(&self, i: usize) -> T {
        (**self).at(i)
    }
}

impl<T: Scalar, V: VectorMut<T> + ?Sized> VectorMut<T> for &mut V {
    fn at_mut(&mut self, i: usize) -> &mut T {
        (**self).at_mut(i)
    }
}

impl<T: Scalar> Vector<T> for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, i: usize) -> T {
        self[i]
    }
}

impl<T: Scalar> VectorMut<T> for [T] {
    fn at_mut(&mut self, i: usize) -> &mut T {
        &mut self[i]
    }
}

impl<T: Scalar> SubVector<T> for [T] {
    type Sub<'s> = &'s [T];

    fn subvector(&self, range: Range<usize>) -> &[T] {
        &self[range]
    }
}

impl<'a, T: Scalar> SubVector<T> for &'a [T] {
    type Sub<'s>
        = &'a [T]
    where
        Self: 's;

    fn subvector(&self, range: Range<usize>) -> &'a [T] {
        let data: &'a [T] = self;
        &data[range]
    }
}

impl<T: Scalar> Vector<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn at(&self, i: usize) -> T {
        self[i]
    }
}

impl<T: Scalar> VectorMut<T> for Vec<T> {
    fn at_mut(&mut self, i: usize) -> &mut T {
        &mut self[i]
    }
}

impl<T: Scalar, const N: usize> Vector<T> for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn at(&self, i: usize) -> T {
        self[i]
    }
}

impl<T: Scalar, const N: usize> VectorMut<T> for [T; N] {
    fn at_mut(&mut self, i: usize) -> &mut T {
        &mut self[i]
    }
}

impl<T: Scalar, M: Matrix<T> + ?Sized> Matrix<T> for &M {
    fn nrows(&self) -> usize {
        (**self).nrows()
    }

    fn ncols(&self) -> usize {
        (**self).ncols()
    }

    fn at(&self, i: usize, j: usize) -> T {
        (**self).at(i, j)
    }

    fn layout(&self) -> Layout {
        (**self).layout()
    }
}

impl<T: Scalar, M: Matrix<T> + ?Sized> Matrix<T> for &mut M {
    fn nrows(&self) -> usize {
        (**self).nrows()
    }

    fn ncols(&self) -> usize {
        (**self).ncols()
    }

    fn at(&self, i: usize, j: usize) -> T {
        (**self).at(i, j)
    }

    fn layout(&self) -> Layout {
        (**self).layout()
    }
}

impl<T: Scalar, M: MatrixMut<T> + ?Sized> MatrixMut<T> for &mut M {
    fn at_mut(&mut self, i: usize, j: usize) -> &mut T {
        (**self).at_mut(i, j)
    }

    fn write_access(&self) -> Access {
        (**self).write_access()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strided_offset() {
        assert_eq!(strided_offset(0, 3, 2), 0);
        assert_eq!(strided_offset(2, 3, 2), 4);
        assert_eq!(strided_offset(0, 3, -2), 4);
        assert_eq!(strided_offset(2, 3, -2), 0);
    }

    #[test]
    fn test_strided_sub_offset() {
        assert_eq!(strided_sub_offset(&(1..3), 4, 2), 2);
        // Logical 1..3 of a length-4 reversed vector lives at slots 2 and 4.
        assert_eq!(strided_sub_offset(&(1..3), 4, -2), 2);
        assert_eq!(strided_sub_offset(&(4..4), 4, -2), 0);
    }

    #[test]
    #[should_panic]
    fn test_strided_sub_offset_out_of_bounds() {
        strided_sub_offset(&(2..5), 4, 1);
    }

    #[test]
    fn test_slice_vector() {
        let x = [1.0, 2.0, 3.0];
        let s: &[f64] = &x;
        assert_eq!(Vector::len(s), 3);
        assert_eq!(Vector::at(s, 1), 2.0);
        let sub = s.subvector(1..3);
        assert_eq!(sub, &[2.0, 3.0][..]);
    }

    #[test]
    fn test_access_allows() {
        assert!(Access::Dense.allows(Access::Lower));
        assert!(Access::Lower.allows(Access::Lower));
        assert!(!Access::Upper.allows(Access::Lower));
        assert_eq!(Access::from(Uplo::Lower), Access::Lower);
    }
}
