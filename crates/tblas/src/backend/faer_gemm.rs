//! Matrix product delegating to faer.

use faer::linalg::matmul::matmul;
use faer::{Accum, MatRef, Par};
use tracing::trace;

use super::faer_interop::AsFaerMat;
use super::{GemmBackend, GenericBackend};
use crate::check;
use crate::error::BlasError;
use crate::level3::scale_matrix;
use crate::options::Op;
use crate::scalar::Scalar;
use crate::view::{Access, DenseView, DenseViewMut, Matrix, MatrixMut};

/// Backend computing the product with `faer::linalg::matmul::matmul`.
///
/// Runs sequentially (`Par::Seq`). The wrapper borrows the views without
/// copying, but faer may allocate packing buffers inside `matmul`. Conjugate
/// transposes are handed to [`GenericBackend`].
pub struct FaerBackend;

fn op_mat<T: Scalar>(trans: Op, mat: MatRef<'_, T>) -> MatRef<'_, T> {
    if trans == Op::NoTrans { mat } else { mat.transpose() }
}

impl GemmBackend for FaerBackend {
    fn gemm<T: Scalar>(
        transa: Op,
        transb: Op,
        alpha: T,
        a: &DenseView<'_, T>,
        b: &DenseView<'_, T>,
        beta: T,
        c: &mut DenseViewMut<'_, T>,
    ) -> Result<(), BlasError> {
        if transa == Op::ConjTrans || transb == Op::ConjTrans {
            trace!(?transa, ?transb, "conjugate transpose, using reference loops");
            return GenericBackend::gemm(transa, transb, alpha, a, b, beta, c);
        }

        check::option("transA", transa)?;
        check::option("transB", transb)?;
        let (m, n) = (c.nrows(), c.ncols());
        let (am, k) = if transa == Op::NoTrans { (a.nrows(), a.ncols()) } else { (a.ncols(), a.nrows()) };
        let (bk, bn) = if transb == Op::NoTrans { (b.nrows(), b.ncols()) } else { (b.ncols(), b.nrows()) };
        check::conformant("A", m, am)?;
        check::conformant("B", k, bk)?;
        check::conformant("B", n, bn)?;
        check::access("C", c.write_access(), Access::Dense)?;

        if m == 0 || n == 0 {
            return Ok(());
        }
        if alpha == T::zero() || k == 0 {
            scale_matrix(beta, c);
            return Ok(());
        }

        let accum = if beta == T::zero() {
            Accum::Replace
        } else {
            scale_matrix(beta, c);
            Accum::Add
        };
        trace!(m, n, k, accumulate = beta != T::zero(), "faer matmul");
        let lhs = op_mat(transa, a.as_faer_mat());
        let rhs = op_mat(transb, b.as_faer_mat());
        matmul(c.as_faer_mat_mut(), accum, lhs, rhs, alpha, Par::Seq);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Layout;
    use crate::scalar::c64;
    use approx::assert_relative_eq;

    #[test]
    fn test_matches_reference_for_mixed_layouts() {
        let adata: Vec<f64> = (0..12).map(|v| v as f64 * 0.5 - 2.0).collect();
        let bdata: Vec<f64> = (0..12).map(|v| 1.0 / (v as f64 + 1.0)).collect();
        for transa in [Op::NoTrans, Op::Trans] {
            for transb in [Op::NoTrans, Op::Trans] {
                for layout in [Layout::ColMajor, Layout::RowMajor] {
                    let (ar, ac) = if transa == Op::NoTrans { (3, 4) } else { (4, 3) };
                    let (br, bc) = if transb == Op::NoTrans { (4, 2) } else { (2, 4) };
                    let ald = if layout == Layout::ColMajor { ar } else { ac };
                    let b_layout = layout.flip();
                    let bld = if b_layout == Layout::ColMajor { br } else { bc };
                    let a = DenseView::new(&adata, ar, ac, ald, layout).unwrap();
                    let b = DenseView::new(&bdata, br, bc, bld, b_layout).unwrap();
                    let mut want = [1.0; 6];
                    let mut got = [1.0; 6];
                    GenericBackend::gemm(
                        transa,
                        transb,
                        1.5,
                        &a,
                        &b,
                        -0.5,
                        &mut DenseViewMut::col_major(&mut want, 3, 2).unwrap(),
                    )
                    .unwrap();
                    FaerBackend::gemm(
                        transa,
                        transb,
                        1.5,
                        &a,
                        &b,
                        -0.5,
                        &mut DenseViewMut::col_major(&mut got, 3, 2).unwrap(),
                    )
                    .unwrap();
                    for (g, w) in got.iter().zip(want.iter()) {
                        assert_relative_eq!(*g, *w, epsilon = 1e-12);
                    }
                }
            }
        }
    }

    #[test]
    fn test_beta_zero_ignores_nan() {
        let a = [c64::new(1.0, 1.0)];
        let b = [c64::new(2.0, 0.0)];
        let mut out = [c64::new(f64::NAN, f64::NAN)];
        FaerBackend::gemm(
            Op::NoTrans,
            Op::Trans,
            c64::new(1.0, 0.0),
            &DenseView::col_major(&a, 1, 1).unwrap(),
            &DenseView::col_major(&b, 1, 1).unwrap(),
            c64::new(0.0, 0.0),
            &mut DenseViewMut::col_major(&mut out, 1, 1).unwrap(),
        )
        .unwrap();
        assert_eq!(out[0], c64::new(2.0, 2.0));
    }

    #[test]
    fn test_conj_trans_falls_back() {
        let a = [c64::new(0.0, 1.0)];
        let b = [c64::new(1.0, 0.0)];
        let mut out = [c64::new(0.0, 0.0)];
        FaerBackend::gemm(
            Op::ConjTrans,
            Op::NoTrans,
            c64::new(1.0, 0.0),
            &DenseView::col_major(&a, 1, 1).unwrap(),
            &DenseView::col_major(&b, 1, 1).unwrap(),
            c64::new(0.0, 0.0),
            &mut DenseViewMut::col_major(&mut out, 1, 1).unwrap(),
        )
        .unwrap();
        assert_eq!(out[0], c64::new(0.0, -1.0));
    }
}
