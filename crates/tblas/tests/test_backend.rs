//! Both `gemm` backends run the same cases and must agree.

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tblas::backend::{FaerBackend, GemmBackend, GenericBackend};
use tblas::random::randn_matrix_with_rng;
use tblas::view::{DenseView, DenseViewMut};
use tblas::{Layout, Op, c64};

fn stored_shape(trans: Op, rows: usize, cols: usize) -> (usize, usize) {
    if trans == Op::NoTrans { (rows, cols) } else { (cols, rows) }
}

fn packed<'a>(data: &'a [c64], layout: Layout, rows: usize, cols: usize) -> DenseView<'a, c64> {
    let ld = if layout == Layout::RowMajor { cols } else { rows };
    DenseView::new(data, rows, cols, ld.max(1), layout).unwrap()
}

/// Runs one product through backend `B` on fresh copies of the operands.
#[allow(clippy::too_many_arguments)]
fn run<B: GemmBackend>(
    transa: Op,
    transb: Op,
    layouts: [Layout; 3],
    (m, n, k): (usize, usize, usize),
    alpha: c64,
    beta: c64,
    seed: u64,
) -> Vec<c64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (ar, ac) = stored_shape(transa, m, k);
    let (br, bc) = stored_shape(transb, k, n);
    let lda = if layouts[0] == Layout::RowMajor { ac } else { ar };
    let ldb = if layouts[1] == Layout::RowMajor { bc } else { br };
    let ldc = if layouts[2] == Layout::RowMajor { n } else { m };
    let adata: Vec<c64> = randn_matrix_with_rng(layouts[0], ar, ac, lda.max(1), &mut rng);
    let bdata: Vec<c64> = randn_matrix_with_rng(layouts[1], br, bc, ldb.max(1), &mut rng);
    let mut cdata: Vec<c64> = randn_matrix_with_rng(layouts[2], m, n, ldc.max(1), &mut rng);
    let a = packed(&adata, layouts[0], ar, ac);
    let b = packed(&bdata, layouts[1], br, bc);
    let mut c = DenseViewMut::new(&mut cdata, m, n, ldc.max(1), layouts[2]).unwrap();
    B::gemm(transa, transb, alpha, &a, &b, beta, &mut c).unwrap();
    cdata
}

fn assert_close(actual: &[c64], expected: &[c64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_relative_eq!(a.re, e.re, epsilon = 1e-11);
        assert_relative_eq!(a.im, e.im, epsilon = 1e-11);
    }
}

#[test]
fn test_backends_agree_on_every_transpose_and_layout() {
    let ops = [Op::NoTrans, Op::Trans, Op::ConjTrans];
    let orders = [Layout::ColMajor, Layout::RowMajor];
    let mut seed = 0;
    for transa in ops {
        for transb in ops {
            for la in orders {
                for lc in orders {
                    seed += 1;
                    let layouts = [la, la.flip(), lc];
                    let dims = (5, 3, 4);
                    let (alpha, beta) = (c64::new(0.5, 1.0), c64::new(-1.0, 0.5));
                    let generic = run::<GenericBackend>(transa, transb, layouts, dims, alpha, beta, seed);
                    let faer = run::<FaerBackend>(transa, transb, layouts, dims, alpha, beta, seed);
                    assert_close(&faer, &generic);
                }
            }
        }
    }
}

#[test]
fn test_backends_agree_on_degenerate_scalars() {
    let layouts = [Layout::ColMajor; 3];
    for (alpha, beta) in [
        (c64::new(0.0, 0.0), c64::new(2.0, 0.0)),
        (c64::new(0.0, 0.0), c64::new(1.0, 0.0)),
        (c64::new(1.0, 0.0), c64::new(0.0, 0.0)),
        (c64::new(1.0, 0.0), c64::new(1.0, 0.0)),
    ] {
        let generic = run::<GenericBackend>(Op::Trans, Op::NoTrans, layouts, (4, 4, 4), alpha, beta, 99);
        let faer = run::<FaerBackend>(Op::Trans, Op::NoTrans, layouts, (4, 4, 4), alpha, beta, 99);
        assert_close(&faer, &generic);
    }
    // empty inner dimension reduces to scaling
    let generic = run::<GenericBackend>(Op::NoTrans, Op::NoTrans, layouts, (3, 2, 0), c64::new(1.0, 0.0), c64::new(3.0, 0.0), 5);
    let faer = run::<FaerBackend>(Op::NoTrans, Op::NoTrans, layouts, (3, 2, 0), c64::new(1.0, 0.0), c64::new(3.0, 0.0), 5);
    assert_close(&faer, &generic);
}

fn nan_cases<B: GemmBackend>() {
    let nan = f64::NAN;
    let a = [1.0, 2.0, 3.0, 4.0];
    let a = DenseView::col_major(&a, 2, 2).unwrap();

    // β = 0 overwrites a NaN output
    let mut c = [nan; 4];
    let mut cv = DenseViewMut::row_major(&mut c, 2, 2).unwrap();
    B::gemm(Op::NoTrans, Op::Trans, 1.0, &a, &a, 0.0, &mut cv).unwrap();
    // A·Aᵀ = [[10, 14], [14, 20]]
    assert_eq!(c, [10.0, 14.0, 14.0, 20.0]);

    // α = 0 never reads NaN operands
    let poisoned = [nan; 4];
    let p = DenseView::col_major(&poisoned, 2, 2).unwrap();
    let mut c = [1.0, 2.0, 3.0, 4.0];
    let mut cv = DenseViewMut::col_major(&mut c, 2, 2).unwrap();
    B::gemm(Op::NoTrans, Op::NoTrans, 0.0, &p, &p, 0.5, &mut cv).unwrap();
    assert_eq!(c, [0.5, 1.0, 1.5, 2.0]);
}

#[test]
fn test_nan_contract_generic() {
    nan_cases::<GenericBackend>();
}

#[test]
fn test_nan_contract_faer() {
    nan_cases::<FaerBackend>();
}

#[cfg(not(feature = "unchecked"))]
#[test]
fn test_backends_report_same_errors() {
    let a = [0.0; 6];
    let a = DenseView::col_major(&a, 2, 3).unwrap();
    let mut c = [0.0; 4];
    let mut cv = DenseViewMut::col_major(&mut c, 2, 2).unwrap();
    let generic = GenericBackend::gemm(Op::NoTrans, Op::NoTrans, 1.0, &a, &a, 0.0, &mut cv).unwrap_err();
    let faer = FaerBackend::gemm(Op::NoTrans, Op::NoTrans, 1.0, &a, &a, 0.0, &mut cv).unwrap_err();
    assert_eq!(generic, faer);
    assert_eq!(faer.param(), "B");
}
