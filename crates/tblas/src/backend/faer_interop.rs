//! Zero-copy borrowing of dense views as faer matrices.
//!
//! Both layouts map onto faer's general strides: column-major views have
//! unit row stride and a column stride of `ld`, row-major views the reverse.

use faer::{MatMut, MatRef};

use crate::options::Layout;
use crate::scalar::Scalar;
use crate::view::{DenseView, DenseViewMut, Matrix};

fn mat_ref<T>(data: &[T], layout: Layout, nrows: usize, ncols: usize, ld: usize) -> MatRef<'_, T> {
    if layout == Layout::RowMajor {
        MatRef::from_row_major_slice_with_stride(data, nrows, ncols, ld)
    } else {
        MatRef::from_column_major_slice_with_stride(data, nrows, ncols, ld)
    }
}

/// Extension trait for viewing dense matrix views as faer matrices.
pub trait AsFaerMat<T: Scalar> {
    /// Borrow as an immutable faer matrix (zero-copy).
    ///
    /// ```
    /// use tblas::backend::AsFaerMat;
    /// use tblas::view::DenseView;
    ///
    /// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let a = DenseView::row_major(&data, 2, 3).unwrap();
    /// let mat = a.as_faer_mat();
    /// assert_eq!(mat.nrows(), 2);
    /// assert_eq!(mat[(1, 0)], 4.0);
    /// ```
    fn as_faer_mat(&self) -> MatRef<'_, T>;
}

impl<T: Scalar> AsFaerMat<T> for DenseView<'_, T> {
    fn as_faer_mat(&self) -> MatRef<'_, T> {
        mat_ref(self.as_slice(), self.layout(), self.nrows(), self.ncols(), self.ld())
    }
}

impl<T: Scalar> AsFaerMat<T> for DenseViewMut<'_, T> {
    fn as_faer_mat(&self) -> MatRef<'_, T> {
        let (nrows, ncols, ld, layout) = (self.nrows(), self.ncols(), self.ld(), self.layout());
        mat_ref(self.as_view().as_slice(), layout, nrows, ncols, ld)
    }
}

impl<T: Scalar> DenseViewMut<'_, T> {
    /// Borrow as a mutable faer matrix (zero-copy).
    pub fn as_faer_mat_mut(&mut self) -> MatMut<'_, T> {
        let (nrows, ncols, ld, layout) = (self.nrows(), self.ncols(), self.ld(), self.layout());
        let data = self.as_mut_slice();
        if layout == Layout::RowMajor {
            // built as the column-major transpose: faer's
            // `from_row_major_slice_with_stride_mut` lays the slice out by columns
            MatMut::from_column_major_slice_with_stride_mut(data, ncols, nrows, ld).transpose_mut()
        } else {
            MatMut::from_column_major_slice_with_stride_mut(data, nrows, ncols, ld)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_col_major_with_padding() {
        let data = [1.0, 2.0, -1.0, 3.0, 4.0];
        let a = DenseView::new(&data, 2, 2, 3, Layout::ColMajor).unwrap();
        let mat = a.as_faer_mat();
        assert_eq!(mat[(0, 1)], 3.0);
        assert_eq!(mat[(1, 1)], 4.0);
    }

    #[test]
    fn test_mutable_row_major() {
        let mut data = [0.0; 6];
        {
            let mut a = DenseViewMut::row_major(&mut data, 2, 3).unwrap();
            let mut mat = a.as_faer_mat_mut();
            mat[(1, 2)] = 7.0;
        }
        assert_eq!(data[5], 7.0);
    }

    #[test]
    fn test_mutable_row_major_with_padding() {
        let mut data = [0.0; 8];
        {
            let mut a = DenseViewMut::new(&mut data, 2, 3, 4, Layout::RowMajor).unwrap();
            let mut mat = a.as_faer_mat_mut();
            assert_eq!((mat.nrows(), mat.ncols()), (2, 3));
            mat[(0, 2)] = 5.0;
            mat[(1, 0)] = 7.0;
        }
        assert_eq!(data, [0.0, 0.0, 5.0, 0.0, 7.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_row_major_with_padding() {
        let data = [1.0, 2.0, f64::NAN, 3.0, 4.0];
        let a = DenseView::new(&data, 2, 2, 3, Layout::RowMajor).unwrap();
        let mat = a.as_faer_mat();
        assert_eq!(mat[(0, 1)], 2.0);
        assert_eq!(mat[(1, 0)], 3.0);
    }

    #[test]
    fn test_empty_view() {
        let data: [f64; 0] = [];
        let a = DenseView::col_major(&data, 0, 3).unwrap();
        assert_eq!(a.as_faer_mat().ncols(), 3);
    }
}
