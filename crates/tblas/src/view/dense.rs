use std::ops::Range;

use super::{Access, Matrix, MatrixMut, StridedView, StridedViewMut};
use crate::check;
use crate::error::BlasError;
use crate::options::Layout;
use crate::scalar::Scalar;

#[inline]
fn dense_index(layout: Layout, ld: usize, i: usize, j: usize) -> usize {
    if layout == Layout::RowMajor {
        i * ld + j
    } else {
        i + j * ld
    }
}

fn validate(
    layout: Layout,
    nrows: usize,
    ncols: usize,
    ld: usize,
    len: usize,
) -> Result<(), BlasError> {
    check::option("layout", layout)?;
    check::leading_dim("ld", ld, check::minor_extent(layout, nrows, ncols))?;
    check::buffer("data", check::matrix_extent(layout, nrows, ncols, ld), len)
}

fn check_block(rows: &Range<usize>, cols: &Range<usize>, nrows: usize, ncols: usize) {
    assert!(
        rows.start <= rows.end && rows.end <= nrows && cols.start <= cols.end && cols.end <= ncols,
        "submatrix {rows:?} x {cols:?} out of bounds for {nrows} x {ncols}"
    );
}

/// Read-only dense matrix view in row- or column-major order.
#[derive(Debug, Clone, Copy)]
pub struct DenseView<'a, T> {
    data: &'a [T],
    nrows: usize,
    ncols: usize,
    ld: usize,
    layout: Layout,
}

impl<'a, T: Scalar> DenseView<'a, T> {
    /// Creates an `nrows x ncols` view with leading dimension `ld`.
    ///
    /// # Errors
    ///
    /// Returns an error if `layout` is invalid, `ld` is below the minor
    /// extent, or `data` is shorter than the addressed extent.
    pub fn new(
        data: &'a [T],
        nrows: usize,
        ncols: usize,
        ld: usize,
        layout: Layout,
    ) -> Result<Self, BlasError> {
        validate(layout, nrows, ncols, ld, data.len())?;
        Ok(Self::from_raw_parts(data, nrows, ncols, ld, layout))
    }

    /// Packed column-major view.
    pub fn col_major(data: &'a [T], nrows: usize, ncols: usize) -> Result<Self, BlasError> {
        Self::new(data, nrows, ncols, nrows.max(1), Layout::ColMajor)
    }

    /// Packed row-major view.
    pub fn row_major(data: &'a [T], nrows: usize, ncols: usize) -> Result<Self, BlasError> {
        Self::new(data, nrows, ncols, ncols.max(1), Layout::RowMajor)
    }

    pub(crate) fn from_raw_parts(
        data: &'a [T],
        nrows: usize,
        ncols: usize,
        ld: usize,
        layout: Layout,
    ) -> Self {
        Self {
            data,
            nrows,
            ncols,
            ld,
            layout,
        }
    }

    /// Leading dimension.
    pub fn ld(&self) -> usize {
        self.ld
    }

    /// Underlying buffer.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// View of the block `rows x cols`.
    ///
    /// # Panics
    ///
    /// Panics if the block exceeds the matrix.
    pub fn submatrix(&self, rows: Range<usize>, cols: Range<usize>) -> DenseView<'a, T> {
        check_block(&rows, &cols, self.nrows, self.ncols);
        let data: &'a [T] = self.data;
        let data = if rows.is_empty() || cols.is_empty() {
            &data[..0]
        } else {
            &data[dense_index(self.layout, self.ld, rows.start, cols.start)..]
        };
        DenseView::from_raw_parts(data, rows.len(), cols.len(), self.ld, self.layout)
    }

    /// Column `j` as a strided vector.
    pub fn col(&self, j: usize) -> StridedView<'a, T> {
        let block = self.submatrix(0..self.nrows, j..j + 1);
        let inc = if self.layout == Layout::RowMajor { self.ld } else { 1 };
        StridedView::from_raw_parts(block.data, self.nrows, inc as isize)
    }

    /// Row `i` as a strided vector.
    pub fn row(&self, i: usize) -> StridedView<'a, T> {
        let block = self.submatrix(i..i + 1, 0..self.ncols);
        let inc = if self.layout == Layout::RowMajor { 1 } else { self.ld };
        StridedView::from_raw_parts(block.data, self.ncols, inc as isize)
    }
}

impl<T: Scalar> Matrix<T> for DenseView<'_, T> {
    fn nrows(&self) -> usize {
        self.nrows
    }

    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> T {
        debug_assert!(i < self.nrows && j < self.ncols);
        self.data[dense_index(self.layout, self.ld, i, j)]
    }

    fn layout(&self) -> Layout {
        self.layout
    }
}

/// Mutable dense matrix view with a write-access policy.
///
/// A view restricted to one triangle (see [`DenseViewMut::restrict`]) is
/// accepted only by kernels that write that triangle alone.
#[derive(Debug)]
pub struct DenseViewMut<'a, T> {
    data: &'a mut [T],
    nrows: usize,
    ncols: usize,
    ld: usize,
    layout: Layout,
    access: Access,
}

impl<'a, T: Scalar> DenseViewMut<'a, T> {
    /// Creates a mutable `nrows x ncols` view with leading dimension `ld`.
    ///
    /// # Errors
    ///
    /// Returns an error if `layout` is invalid, `ld` is below the minor
    /// extent, or `data` is shorter than the addressed extent.
    pub fn new(
        data: &'a mut [T],
        nrows: usize,
        ncols: usize,
        ld: usize,
        layout: Layout,
    ) -> Result<Self, BlasError> {
        validate(layout, nrows, ncols, ld, data.len())?;
        Ok(Self::from_raw_parts(data, nrows, ncols, ld, layout))
    }

    /// Packed column-major view.
    pub fn col_major(data: &'a mut [T], nrows: usize, ncols: usize) -> Result<Self, BlasError> {
        Self::new(data, nrows, ncols, nrows.max(1), Layout::ColMajor)
    }

    /// Packed row-major view.
    pub fn row_major(data: &'a mut [T], nrows: usize, ncols: usize) -> Result<Self, BlasError> {
        Self::new(data, nrows, ncols, ncols.max(1), Layout::RowMajor)
    }

    pub(crate) fn from_raw_parts(
        data: &'a mut [T],
        nrows: usize,
        ncols: usize,
        ld: usize,
        layout: Layout,
    ) -> Self {
        Self {
            data,
            nrows,
            ncols,
            ld,
            layout,
            access: Access::Dense,
        }
    }

    /// Limits the region this view may write.
    pub fn restrict(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    /// Leading dimension.
    pub fn ld(&self) -> usize {
        self.ld
    }

    /// Underlying buffer.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        self.data
    }

    /// Reborrows as a read-only view.
    pub fn as_view(&self) -> DenseView<'_, T> {
        DenseView::from_raw_parts(self.data, self.nrows, self.ncols, self.ld, self.layout)
    }

    /// Mutable view of the block `rows x cols`, inheriting the access policy.
    ///
    /// # Panics
    ///
    /// Panics if the block exceeds the matrix.
    pub fn submatrix_mut(&mut self, rows: Range<usize>, cols: Range<usize>) -> DenseViewMut<'_, T> {
        check_block(&rows, &cols, self.nrows, self.ncols);
        let data = if rows.is_empty() || cols.is_empty() {
            &mut self.data[..0]
        } else {
            &mut self.data[dense_index(self.layout, self.ld, rows.start, cols.start)..]
        };
        DenseViewMut {
            data,
            nrows: rows.len(),
            ncols: cols.len(),
            ld: self.ld,
            layout: self.layout,
            access: self.access,
        }
    }

    /// Column `j` as a mutable strided vector.
    pub fn col_mut(&mut self, j: usize) -> StridedViewMut<'_, T> {
        let (nrows, layout, ld) = (self.nrows, self.layout, self.ld);
        let block = self.submatrix_mut(0..nrows, j..j + 1);
        let inc = if layout == Layout::RowMajor { ld } else { 1 };
        StridedViewMut::from_raw_parts(block.data, nrows, inc as isize)
    }

    /// Row `i` as a mutable strided vector.
    pub fn row_mut(&mut self, i: usize) -> StridedViewMut<'_, T> {
        let (ncols, layout, ld) = (self.ncols, self.layout, self.ld);
        let block = self.submatrix_mut(i..i + 1, 0..ncols);
        let inc = if layout == Layout::RowMajor { 1 } else { ld };
        StridedViewMut::from_raw_parts(block.data, ncols, inc as isize)
    }
}

impl<T: Scalar> Matrix<T> for DenseViewMut<'_, T> {
    fn nrows(&self) -> usize {
        self.nrows
    }

    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> T {
        debug_assert!(i < self.nrows && j < self.ncols);
        self.data[dense_index(self.layout, self.ld, i, j)]
    }

    fn layout(&self) -> Layout {
        self.layout
    }
}

impl<T: Scalar> MatrixMut<T> for DenseViewMut<'_, T> {
    #[inline]
    fn at_mut(&mut self, i: usize, j: usize) -> &mut T {
        debug_assert!(i < self.nrows && j < self.ncols);
        &mut self.data[dense_index(self.layout, self.ld, i, j)]
    }

    fn write_access(&self) -> Access {
        self.access
    }
}
