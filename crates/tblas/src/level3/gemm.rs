use super::{op_at, op_shape, scale_entry, scale_matrix};
use crate::check;
use crate::error::BlasError;
use crate::options::{Layout, Op};
use crate::scalar::Scalar;
use crate::view::{Access, Matrix, MatrixMut};

/// General matrix product C ← α·op(A)·op(B) + β·C.
///
/// With k = 0 or α = 0, `A` and `B` are not read and C ← β·C.
///
/// # Errors
///
/// Returns an error naming `transA`/`transB` for invalid transposes, `A` or
/// `B` if `op(A)` is not m×k or `op(B)` is not k×n, and `C` if its access
/// policy is not dense.
pub fn gemm<T, A, B, C>(
    transa: Op,
    transb: Op,
    alpha: T,
    a: &A,
    b: &B,
    beta: T,
    c: &mut C,
) -> Result<(), BlasError>
where
    T: Scalar,
    A: Matrix<T> + ?Sized,
    B: Matrix<T> + ?Sized,
    C: MatrixMut<T> + ?Sized,
{
    check::option("transA", transa)?;
    check::option("transB", transb)?;
    let (m, n) = (c.nrows(), c.ncols());
    let (am, k) = op_shape(transa, a);
    let (bk, bn) = op_shape(transb, b);
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

    let row_major = c.layout() == Layout::RowMajor;
    let axpy_form = if row_major {
        transb == Op::NoTrans
    } else {
        transa == Op::NoTrans
    };

    if axpy_form && !row_major {
        // C(:, j) += α·op(B)(l, j)·A(:, l)
        for j in 0..n {
            for i in 0..m {
                scale_entry(beta, c, i, j);
            }
            for l in 0..k {
                let temp = alpha * op_at(transb, b, l, j);
                for i in 0..m {
                    *c.at_mut(i, j) += temp * a.at(i, l);
                }
            }
        }
    } else if axpy_form {
        // C(i, :) += α·op(A)(i, l)·B(l, :)
        for i in 0..m {
            for j in 0..n {
                scale_entry(beta, c, i, j);
            }
            for l in 0..k {
                let temp = alpha * op_at(transa, a, i, l);
                for j in 0..n {
                    *c.at_mut(i, j) += temp * b.at(l, j);
                }
            }
        }
    } else {
        let (outer, inner) = if row_major { (m, n) } else { (n, m) };
        for p in 0..outer {
            for q in 0..inner {
                let (i, j) = if row_major { (p, q) } else { (q, p) };
                let mut temp = T::zero();
                for l in 0..k {
                    temp += op_at(transa, a, i, l) * op_at(transb, b, l, j);
                }
                let value = if beta == T::zero() {
                    alpha * temp
                } else {
                    alpha * temp + beta * c.at(i, j)
                };
                *c.at_mut(i, j) = value;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::c64;
    use crate::view::{DenseView, DenseViewMut, OpView};
    use approx::assert_relative_eq;

    fn naive(ta: Op, tb: Op, a: &DenseView<'_, c64>, b: &DenseView<'_, c64>) -> Vec<c64> {
        let oa = OpView::new(a, ta).unwrap();
        let ob = OpView::new(b, tb).unwrap();
        let (m, k, n) = (oa.nrows(), oa.ncols(), ob.ncols());
        let mut out = vec![c64::new(0.0, 0.0); m * n];
        for j in 0..n {
            for i in 0..m {
                for l in 0..k {
                    out[i + j * m] += oa.at(i, l) * ob.at(l, j);
                }
            }
        }
        out
    }

    #[test]
    fn test_gemm_all_transposes_and_layouts() {
        let adata: Vec<c64> = (0..6).map(|v| c64::new(v as f64, 1.0 - v as f64)).collect();
        let bdata: Vec<c64> = (0..6).map(|v| c64::new(0.5 * v as f64, v as f64)).collect();
        let ops = [Op::NoTrans, Op::Trans, Op::ConjTrans];
        for ta in ops {
            for tb in ops {
                // op(A) is 2x3, op(B) is 3x2.
                let a_shape = if ta == Op::NoTrans { (2, 3) } else { (3, 2) };
                let b_shape = if tb == Op::NoTrans { (3, 2) } else { (2, 3) };
                let a = DenseView::col_major(&adata, a_shape.0, a_shape.1).unwrap();
                let b = DenseView::col_major(&bdata, b_shape.0, b_shape.1).unwrap();
                let expected = naive(ta, tb, &a, &b);
                for layout in [Layout::ColMajor, Layout::RowMajor] {
                    let mut cdata = vec![c64::new(f64::NAN, 0.0); 4];
                    let mut c = DenseViewMut::new(&mut cdata, 2, 2, 2, layout).unwrap();
                    gemm(ta, tb, c64::new(1.0, 0.0), &a, &b, c64::new(0.0, 0.0), &mut c).unwrap();
                    for j in 0..2 {
                        for i in 0..2 {
                            let got = c.at(i, j);
                            let want = expected[i + j * 2];
                            assert_relative_eq!(got.re, want.re, epsilon = 1e-12);
                            assert_relative_eq!(got.im, want.im, epsilon = 1e-12);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_gemm_beta_accumulates() {
        let a = [1.0, 2.0];
        let b = [3.0];
        let mut cdata = [1.0, 1.0];
        let a = DenseView::col_major(&a, 2, 1).unwrap();
        let b = DenseView::col_major(&b, 1, 1).unwrap();
        gemm(Op::NoTrans, Op::NoTrans, 2.0, &a, &b, 3.0, &mut DenseViewMut::col_major(&mut cdata, 2, 1).unwrap())
            .unwrap();
        assert_eq!(cdata, [9.0, 15.0]);
    }

    #[test]
    fn test_gemm_k_zero_scales_without_reading_operands() {
        let empty: [f64; 0] = [];
        let a = DenseView::col_major(&empty, 2, 0).unwrap();
        let b = DenseView::col_major(&empty, 0, 2).unwrap();
        let mut cdata = [1.0, 2.0, 3.0, 4.0];
        gemm(Op::NoTrans, Op::NoTrans, 1.0, &a, &b, 2.0, &mut DenseViewMut::col_major(&mut cdata, 2, 2).unwrap())
            .unwrap();
        assert_eq!(cdata, [2.0, 4.0, 6.0, 8.0]);
    }

    #[cfg(not(feature = "unchecked"))]
    #[test]
    fn test_gemm_shape_errors() {
        let data = [0.0; 6];
        let a = DenseView::col_major(&data, 2, 3).unwrap();
        let b = DenseView::col_major(&data, 2, 2).unwrap();
        let mut cdata = [0.0; 4];
        let mut c = DenseViewMut::col_major(&mut cdata, 2, 2).unwrap();
        let err = gemm(Op::NoTrans, Op::NoTrans, 1.0, &a, &b, 0.0, &mut c).unwrap_err();
        assert_eq!(err.param(), "B");
        let err = gemm(Op::from_raw(1), Op::NoTrans, 1.0, &a, &b, 0.0, &mut c).unwrap_err();
        assert_eq!(err.param(), "transA");
        let err = gemm(Op::NoTrans, Op::from_raw(1), 1.0, &a, &b, 0.0, &mut c).unwrap_err();
        assert_eq!(err.param(), "transB");
    }
}
