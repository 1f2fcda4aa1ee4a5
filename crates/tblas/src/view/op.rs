use super::Matrix;
use crate::check;
use crate::error::BlasError;
use crate::options::{Layout, Op};
use crate::scalar::Scalar;

/// The logical matrix `op(A)` of a borrowed matrix `A`.
///
/// ```
/// use tblas::view::{DenseView, Matrix, OpView};
/// use tblas::{c64, Op};
///
/// let data = [c64::new(1.0, 2.0), c64::new(3.0, 4.0)];
/// let a = DenseView::col_major(&data, 2, 1).unwrap();
/// let ah = OpView::new(&a, Op::ConjTrans).unwrap();
/// assert_eq!((ah.nrows(), ah.ncols()), (1, 2));
/// assert_eq!(ah.at(0, 1), c64::new(3.0, -4.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OpView<'a, M: ?Sized> {
    inner: &'a M,
    op: Op,
}

impl<'a, M: ?Sized> OpView<'a, M> {
    /// Wraps `inner` with transpose `op`.
    ///
    /// # Errors
    ///
    /// Returns an error naming `trans` if `op` is not a valid transpose.
    pub fn new(inner: &'a M, op: Op) -> Result<Self, BlasError> {
        check::option("trans", op)?;
        Ok(Self { inner, op })
    }

    /// The applied transpose.
    pub fn op(&self) -> Op {
        self.op
    }
}

impl<T: Scalar, M: Matrix<T> + ?Sized> Matrix<T> for OpView<'_, M> {
    fn nrows(&self) -> usize {
        if self.op.is_transposed() {
            self.inner.ncols()
        } else {
            self.inner.nrows()
        }
    }

    fn ncols(&self) -> usize {
        if self.op.is_transposed() {
            self.inner.nrows()
        } else {
            self.inner.ncols()
        }
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> T {
        if self.op == Op::ConjTrans {
            self.inner.at(j, i).conj()
        } else if self.op == Op::Trans {
            self.inner.at(j, i)
        } else {
            self.inner.at(i, j)
        }
    }

    fn layout(&self) -> Layout {
        if self.op.is_transposed() {
            self.inner.layout().flip()
        } else {
            self.inner.layout()
        }
    }
}
