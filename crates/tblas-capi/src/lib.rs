//! C API for tblas
//!
//! This crate exposes the double-precision kernels to C, Julia, Python and
//! other languages over caller-owned buffers.
//!
//! Option arguments take the numeric codes of the reference C interface
//! (layout 101/102, transpose 111/112/113, uplo 121/122, diag 131/132,
//! side 141/142). Dimensions and leading dimensions are `size_t`, increments
//! are signed. Every function returns a status code; after a failure the
//! name of the offending parameter is available from
//! [`tblas_last_error_param`].
//!
//! All extern "C" functions dereference raw pointers from foreign code. The
//! caller guarantees that every buffer spans the extent its arguments
//! address and that output buffers do not overlap inputs.

#![allow(clippy::not_unsafe_ptr_arg_deref)]
#![allow(clippy::too_many_arguments)]

use std::cell::RefCell;
use std::ffi::{CString, c_char};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::{ptr, slice};

use libc::{c_double, c_int, c_long, size_t};
use tblas::level1::INVALID_INDEX;
use tblas::{BlasError, Diag, Layout, Op, Side, Uplo, check, legacy};
use tracing::debug;

// Status codes
pub type StatusCode = c_int;

pub const TBLAS_SUCCESS: StatusCode = 0;
pub const TBLAS_NULL_POINTER: StatusCode = -1;
pub const TBLAS_INVALID_OPTION: StatusCode = -2;
pub const TBLAS_INVALID_INCREMENT: StatusCode = -3;
pub const TBLAS_INVALID_LEADING_DIM: StatusCode = -4;
pub const TBLAS_SHAPE_MISMATCH: StatusCode = -5;
pub const TBLAS_INVALID_VALUE: StatusCode = -6;
pub const TBLAS_INTERNAL_ERROR: StatusCode = -7;

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

enum Failure {
    Null(&'static str),
    Blas(BlasError),
}

impl From<BlasError> for Failure {
    fn from(err: BlasError) -> Self {
        Failure::Blas(err)
    }
}

impl Failure {
    fn code(&self) -> StatusCode {
        match self {
            Failure::Null(_) => TBLAS_NULL_POINTER,
            Failure::Blas(err) => match err {
                BlasError::InvalidOption { .. } | BlasError::IllegalTranspose { .. } => TBLAS_INVALID_OPTION,
                BlasError::InvalidIncrement { .. } => TBLAS_INVALID_INCREMENT,
                BlasError::LeadingDimension { .. } => TBLAS_INVALID_LEADING_DIM,
                BlasError::BufferTooSmall { .. }
                | BlasError::DimensionMismatch { .. }
                | BlasError::AccessDenied { .. } => TBLAS_SHAPE_MISMATCH,
                BlasError::InvalidValue { .. } => TBLAS_INVALID_VALUE,
            },
        }
    }

    fn param(&self) -> &'static str {
        match self {
            Failure::Null(param) => param,
            Failure::Blas(err) => err.param(),
        }
    }
}

fn set_last_error(param: Option<&'static str>) {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = param.and_then(|p| CString::new(p).ok()));
}

/// Runs `body`, converting its outcome (or a panic) into a status code.
fn guard(function: &'static str, body: impl FnOnce() -> Result<(), Failure>) -> StatusCode {
    let (code, param) = match catch_unwind(AssertUnwindSafe(body)) {
        Ok(Ok(())) => (TBLAS_SUCCESS, None),
        Ok(Err(failure)) => (failure.code(), Some(failure.param())),
        Err(_) => (TBLAS_INTERNAL_ERROR, None),
    };
    if code != TBLAS_SUCCESS {
        debug!(function, code, param = param.unwrap_or("<panic>"), "call failed");
    }
    set_last_error(param);
    code
}

fn raw(code: c_int) -> u32 {
    u32::try_from(code).unwrap_or(0)
}

fn vector_len(n: usize, inc: c_long) -> usize {
    check::vector_extent(n, inc as isize)
}

/// Elements addressed by a `rows x cols` operand, or zero when `layout` or
/// `ld` is invalid (the kernel reports those before touching the buffer).
fn matrix_len(layout: Layout, rows: usize, cols: usize, ld: usize) -> usize {
    let minor = check::minor_extent(layout, rows, cols);
    if !layout.is_valid() || ld < minor.max(1) {
        0
    } else {
        check::matrix_extent(layout, rows, cols, ld)
    }
}

fn stored(trans: Op, rows: usize, cols: usize) -> (usize, usize) {
    if trans == Op::NoTrans { (rows, cols) } else { (cols, rows) }
}

/// # Safety
///
/// `data` must be null or point to `len` readable elements.
unsafe fn input<'a>(param: &'static str, data: *const c_double, len: usize) -> Result<&'a [f64], Failure> {
    if len == 0 {
        return Ok(&[]);
    }
    if data.is_null() {
        return Err(Failure::Null(param));
    }
    Ok(unsafe { slice::from_raw_parts(data, len) })
}

/// # Safety
///
/// `data` must be null or point to `len` writable elements not aliased by
/// any other argument.
unsafe fn output<'a>(param: &'static str, data: *mut c_double, len: usize) -> Result<&'a mut [f64], Failure> {
    if len == 0 {
        return Ok(&mut []);
    }
    if data.is_null() {
        return Err(Failure::Null(param));
    }
    Ok(unsafe { slice::from_raw_parts_mut(data, len) })
}

/// Name of the parameter that made the last call on this thread fail.
///
/// Returns null after a successful call or a caught panic. The string stays
/// valid until the next tblas call on the same thread.
#[unsafe(no_mangle)]
pub extern "C" fn tblas_last_error_param() -> *const c_char {
    LAST_ERROR.with(|slot| slot.borrow().as_ref().map_or(ptr::null(), |s| s.as_ptr()))
}

// ============================================================================
// Level 1
// ============================================================================

/// y ← α·x + y.
#[unsafe(no_mangle)]
pub extern "C" fn tblas_daxpy(
    n: size_t,
    alpha: c_double,
    x: *const c_double,
    incx: c_long,
    y: *mut c_double,
    incy: c_long,
) -> StatusCode {
    guard("tblas_daxpy", || {
        let x = unsafe { input("x", x, vector_len(n, incx)) }?;
        let y = unsafe { output("y", y, vector_len(n, incy)) }?;
        legacy::axpy(n, alpha, x, incx as isize, y, incy as isize)?;
        Ok(())
    })
}

/// Σ xᵢ·yᵢ, written to `out`.
#[unsafe(no_mangle)]
pub extern "C" fn tblas_ddot(
    n: size_t,
    x: *const c_double,
    incx: c_long,
    y: *const c_double,
    incy: c_long,
    out: *mut c_double,
) -> StatusCode {
    guard("tblas_ddot", || {
        if out.is_null() {
            return Err(Failure::Null("out"));
        }
        let x = unsafe { input("x", x, vector_len(n, incx)) }?;
        let y = unsafe { input("y", y, vector_len(n, incy)) }?;
        let value = legacy::dot(n, x, incx as isize, y, incy as isize)?;
        unsafe {
            *out = value;
        }
        Ok(())
    })
}

/// Euclidean norm of x, written to `out`.
#[unsafe(no_mangle)]
pub extern "C" fn tblas_dnrm2(n: size_t, x: *const c_double, incx: c_long, out: *mut c_double) -> StatusCode {
    guard("tblas_dnrm2", || {
        if out.is_null() {
            return Err(Failure::Null("out"));
        }
        let x = unsafe { input("x", x, vector_len(n, incx)) }?;
        let value = legacy::nrm2(n, x, incx as isize)?;
        unsafe {
            *out = value;
        }
        Ok(())
    })
}

/// x ← α·x.
#[unsafe(no_mangle)]
pub extern "C" fn tblas_dscal(n: size_t, alpha: c_double, x: *mut c_double, incx: c_long) -> StatusCode {
    guard("tblas_dscal", || {
        let x = unsafe { output("x", x, vector_len(n, incx)) }?;
        legacy::scal(n, alpha, x, incx as isize)?;
        Ok(())
    })
}

/// 0-based index of the first element of largest magnitude, written to
/// `out`; −1 when `n` is zero.
#[unsafe(no_mangle)]
pub extern "C" fn tblas_idamax(n: size_t, x: *const c_double, incx: c_long, out: *mut c_long) -> StatusCode {
    guard("tblas_idamax", || {
        if out.is_null() {
            return Err(Failure::Null("out"));
        }
        let x = unsafe { input("x", x, vector_len(n, incx)) }?;
        let index = legacy::iamax(n, x, incx as isize)?;
        let value = if index == INVALID_INDEX { -1 } else { index as c_long };
        unsafe {
            *out = value;
        }
        Ok(())
    })
}

// ============================================================================
// Level 2
// ============================================================================

/// y ← α·op(A)·x + β·y.
#[unsafe(no_mangle)]
pub extern "C" fn tblas_dgemv(
    layout: c_int,
    trans: c_int,
    m: size_t,
    n: size_t,
    alpha: c_double,
    a: *const c_double,
    lda: size_t,
    x: *const c_double,
    incx: c_long,
    beta: c_double,
    y: *mut c_double,
    incy: c_long,
) -> StatusCode {
    guard("tblas_dgemv", || {
        let layout = Layout::from_raw(raw(layout));
        let trans = Op::from_raw(raw(trans));
        let (lenx, leny) = if trans == Op::NoTrans { (n, m) } else { (m, n) };
        let a = unsafe { input("A", a, matrix_len(layout, m, n, lda)) }?;
        let x = unsafe { input("x", x, vector_len(lenx, incx)) }?;
        let y = unsafe { output("y", y, vector_len(leny, incy)) }?;
        legacy::gemv(layout, trans, m, n, alpha, a, lda, x, incx as isize, beta, y, incy as isize)?;
        Ok(())
    })
}

/// A ← α·x·yᵀ + A.
#[unsafe(no_mangle)]
pub extern "C" fn tblas_dger(
    layout: c_int,
    m: size_t,
    n: size_t,
    alpha: c_double,
    x: *const c_double,
    incx: c_long,
    y: *const c_double,
    incy: c_long,
    a: *mut c_double,
    lda: size_t,
) -> StatusCode {
    guard("tblas_dger", || {
        let layout = Layout::from_raw(raw(layout));
        let x = unsafe { input("x", x, vector_len(m, incx)) }?;
        let y = unsafe { input("y", y, vector_len(n, incy)) }?;
        let a = unsafe { output("A", a, matrix_len(layout, m, n, lda)) }?;
        legacy::ger(layout, m, n, alpha, x, incx as isize, y, incy as isize, a, lda)?;
        Ok(())
    })
}

/// x ← op(A)⁻¹·x for triangular A.
#[unsafe(no_mangle)]
pub extern "C" fn tblas_dtrsv(
    layout: c_int,
    uplo: c_int,
    trans: c_int,
    diag: c_int,
    n: size_t,
    a: *const c_double,
    lda: size_t,
    x: *mut c_double,
    incx: c_long,
) -> StatusCode {
    guard("tblas_dtrsv", || {
        let layout = Layout::from_raw(raw(layout));
        let a = unsafe { input("A", a, matrix_len(layout, n, n, lda)) }?;
        let x = unsafe { output("x", x, vector_len(n, incx)) }?;
        legacy::trsv(
            layout,
            Uplo::from_raw(raw(uplo)),
            Op::from_raw(raw(trans)),
            Diag::from_raw(raw(diag)),
            n,
            a,
            lda,
            x,
            incx as isize,
        )?;
        Ok(())
    })
}

// ============================================================================
// Level 3
// ============================================================================

/// C ← α·op(A)·op(B) + β·C.
#[unsafe(no_mangle)]
pub extern "C" fn tblas_dgemm(
    layout: c_int,
    transa: c_int,
    transb: c_int,
    m: size_t,
    n: size_t,
    k: size_t,
    alpha: c_double,
    a: *const c_double,
    lda: size_t,
    b: *const c_double,
    ldb: size_t,
    beta: c_double,
    c: *mut c_double,
    ldc: size_t,
) -> StatusCode {
    guard("tblas_dgemm", || {
        let layout = Layout::from_raw(raw(layout));
        let transa = Op::from_raw(raw(transa));
        let transb = Op::from_raw(raw(transb));
        let (ar, ac) = stored(transa, m, k);
        let (br, bc) = stored(transb, k, n);
        let a = unsafe { input("A", a, matrix_len(layout, ar, ac, lda)) }?;
        let b = unsafe { input("B", b, matrix_len(layout, br, bc, ldb)) }?;
        let c = unsafe { output("C", c, matrix_len(layout, m, n, ldc)) }?;
        legacy::gemm(layout, transa, transb, m, n, k, alpha, a, lda, b, ldb, beta, c, ldc)?;
        Ok(())
    })
}

/// C ← α·op(A)·op(A)ᵀ + β·C on one triangle.
#[unsafe(no_mangle)]
pub extern "C" fn tblas_dsyrk(
    layout: c_int,
    uplo: c_int,
    trans: c_int,
    n: size_t,
    k: size_t,
    alpha: c_double,
    a: *const c_double,
    lda: size_t,
    beta: c_double,
    c: *mut c_double,
    ldc: size_t,
) -> StatusCode {
    guard("tblas_dsyrk", || {
        let layout = Layout::from_raw(raw(layout));
        let trans = Op::from_raw(raw(trans));
        let (ar, ac) = stored(trans, n, k);
        let a = unsafe { input("A", a, matrix_len(layout, ar, ac, lda)) }?;
        let c = unsafe { output("C", c, matrix_len(layout, n, n, ldc)) }?;
        legacy::syrk(layout, Uplo::from_raw(raw(uplo)), trans, n, k, alpha, a, lda, beta, c, ldc)?;
        Ok(())
    })
}

/// B ← α·op(A)⁻¹·B (left) or α·B·op(A)⁻¹ (right).
#[unsafe(no_mangle)]
pub extern "C" fn tblas_dtrsm(
    layout: c_int,
    side: c_int,
    uplo: c_int,
    trans: c_int,
    diag: c_int,
    m: size_t,
    n: size_t,
    alpha: c_double,
    a: *const c_double,
    lda: size_t,
    b: *mut c_double,
    ldb: size_t,
) -> StatusCode {
    guard("tblas_dtrsm", || {
        let layout = Layout::from_raw(raw(layout));
        let side = Side::from_raw(raw(side));
        let order = if side == Side::Right { n } else { m };
        let a = unsafe { input("A", a, matrix_len(layout, order, order, lda)) }?;
        let b = unsafe { output("B", b, matrix_len(layout, m, n, ldb)) }?;
        legacy::trsm(
            layout,
            side,
            Uplo::from_raw(raw(uplo)),
            Op::from_raw(raw(trans)),
            Diag::from_raw(raw(diag)),
            m,
            n,
            alpha,
            a,
            lda,
            b,
            ldb,
        )?;
        Ok(())
    })
}

// ============================================================================
// Reflectors
// ============================================================================

/// Applies H = I − τ·v·vᵀ to C from the left or the right.
///
/// `v[0]` is taken to be one. `work` holds n elements for the left side and
/// m for the right side.
#[unsafe(no_mangle)]
pub extern "C" fn tblas_dlarf(
    layout: c_int,
    side: c_int,
    m: size_t,
    n: size_t,
    v: *const c_double,
    incv: c_long,
    tau: c_double,
    c: *mut c_double,
    ldc: size_t,
    work: *mut c_double,
) -> StatusCode {
    guard("tblas_dlarf", || {
        let layout = Layout::from_raw(raw(layout));
        let side = Side::from_raw(raw(side));
        let (lenv, lenw) = if side == Side::Right { (n, m) } else { (m, n) };
        let v = unsafe { input("v", v, vector_len(lenv, incv)) }?;
        let c = unsafe { output("C", c, matrix_len(layout, m, n, ldc)) }?;
        let work = unsafe { output("work", work, lenw) }?;
        legacy::larf(layout, side, m, n, v, incv as isize, tau, c, ldc, work)?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::ffi::CStr;

    const COL_MAJOR: c_int = 102;
    const ROW_MAJOR: c_int = 101;
    const NO_TRANS: c_int = 111;
    const TRANS: c_int = 112;
    const UPPER: c_int = 121;
    const LOWER: c_int = 122;
    const NON_UNIT: c_int = 131;
    const LEFT: c_int = 141;

    fn last_param() -> Option<String> {
        let p = tblas_last_error_param();
        if p.is_null() {
            None
        } else {
            Some(unsafe { CStr::from_ptr(p) }.to_string_lossy().into_owned())
        }
    }

    #[test]
    fn test_daxpy_and_ddot() {
        let x = [1.0, 2.0, 3.0];
        let mut y = [1.0, 1.0, 1.0];
        assert_eq!(tblas_daxpy(3, 2.0, x.as_ptr(), 1, y.as_mut_ptr(), 1), TBLAS_SUCCESS);
        assert_eq!(y, [3.0, 5.0, 7.0]);
        assert!(last_param().is_none());

        let mut out = 0.0;
        assert_eq!(tblas_ddot(3, x.as_ptr(), 1, y.as_ptr(), 1, &mut out), TBLAS_SUCCESS);
        assert_relative_eq!(out, 34.0);
    }

    #[test]
    fn test_dnrm2_dscal_idamax() {
        let mut x = [3.0, -4.0];
        let mut norm = 0.0;
        assert_eq!(tblas_dnrm2(2, x.as_ptr(), 1, &mut norm), TBLAS_SUCCESS);
        assert_relative_eq!(norm, 5.0, epsilon = 1e-15);

        assert_eq!(tblas_dscal(2, -0.5, x.as_mut_ptr(), 1), TBLAS_SUCCESS);
        assert_eq!(x, [-1.5, 2.0]);

        let mut index: c_long = 0;
        assert_eq!(tblas_idamax(2, x.as_ptr(), 1, &mut index), TBLAS_SUCCESS);
        assert_eq!(index, 1);
        assert_eq!(tblas_idamax(0, ptr::null(), 1, &mut index), TBLAS_SUCCESS);
        assert_eq!(index, -1);
    }

    #[test]
    fn test_dgemv_dger() {
        // A = [[1, 2], [3, 4]] row-major
        let mut a = [1.0, 2.0, 3.0, 4.0];
        let x = [1.0, 1.0];
        let mut y = [0.0, 0.0];
        let status = tblas_dgemv(ROW_MAJOR, TRANS, 2, 2, 1.0, a.as_ptr(), 2, x.as_ptr(), 1, 0.0, y.as_mut_ptr(), 1);
        assert_eq!(status, TBLAS_SUCCESS);
        assert_eq!(y, [4.0, 6.0]);

        let status = tblas_dger(COL_MAJOR, 2, 2, 1.0, x.as_ptr(), 1, y.as_ptr(), 1, a.as_mut_ptr(), 2);
        assert_eq!(status, TBLAS_SUCCESS);
        assert_eq!(a, [5.0, 6.0, 9.0, 10.0]);
    }

    #[test]
    fn test_dtrsv_dtrsm() {
        // upper [[2, 1], [0, 4]] column-major
        let a = [2.0, f64::NAN, 1.0, 4.0];
        let mut x = [4.0, 8.0];
        let status = tblas_dtrsv(COL_MAJOR, UPPER, NO_TRANS, NON_UNIT, 2, a.as_ptr(), 2, x.as_mut_ptr(), 1);
        assert_eq!(status, TBLAS_SUCCESS);
        assert_eq!(x, [1.0, 2.0]);

        let mut b = [4.0, 8.0, 2.0, 4.0];
        let status = tblas_dtrsm(COL_MAJOR, LEFT, UPPER, NO_TRANS, NON_UNIT, 2, 2, 1.0, a.as_ptr(), 2, b.as_mut_ptr(), 2);
        assert_eq!(status, TBLAS_SUCCESS);
        assert_eq!(b, [1.0, 2.0, 0.5, 1.0]);
    }

    #[test]
    fn test_dgemm_dsyrk() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let mut c = [f64::NAN; 4];
        let status = tblas_dgemm(
            COL_MAJOR,
            NO_TRANS,
            TRANS,
            2,
            2,
            2,
            1.0,
            a.as_ptr(),
            2,
            a.as_ptr(),
            2,
            0.0,
            c.as_mut_ptr(),
            2,
        );
        assert_eq!(status, TBLAS_SUCCESS);
        assert_eq!(c, [10.0, 14.0, 14.0, 20.0]);

        let mut s = [0.0, -1.0, 0.0, 0.0];
        let status = tblas_dsyrk(COL_MAJOR, LOWER, NO_TRANS, 2, 2, 1.0, a.as_ptr(), 2, 0.0, s.as_mut_ptr(), 2);
        assert_eq!(status, TBLAS_SUCCESS);
        assert_eq!(s, [10.0, 14.0, 0.0, 20.0]);
    }

    #[test]
    fn test_dlarf() {
        // v = [1, 0.5], τ = 1.6 maps (3, 4) to (-5, 0)
        let v = [0.0, 0.5];
        let mut c = [3.0, 4.0];
        let mut work = [0.0];
        let status = tblas_dlarf(COL_MAJOR, LEFT, 2, 1, v.as_ptr(), 1, 1.6, c.as_mut_ptr(), 2, work.as_mut_ptr());
        assert_eq!(status, TBLAS_SUCCESS);
        assert_relative_eq!(c[0], -5.0, epsilon = 1e-12);
        assert_relative_eq!(c[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_null_pointer() {
        let x = [1.0];
        assert_eq!(tblas_daxpy(1, 1.0, x.as_ptr(), 1, ptr::null_mut(), 1), TBLAS_NULL_POINTER);
        assert_eq!(last_param().as_deref(), Some("y"));
        assert_eq!(tblas_dnrm2(1, x.as_ptr(), 1, ptr::null_mut()), TBLAS_NULL_POINTER);
        assert_eq!(last_param().as_deref(), Some("out"));
        // empty operands may be null
        assert_eq!(tblas_daxpy(0, 1.0, ptr::null(), 1, ptr::null_mut(), 1), TBLAS_SUCCESS);
        assert!(last_param().is_none());
    }

    #[test]
    fn test_validation_codes() {
        let a = [0.0; 4];
        let mut y = [0.0; 2];
        let status = tblas_dgemv(7, NO_TRANS, 2, 2, 1.0, a.as_ptr(), 2, a.as_ptr(), 1, 0.0, y.as_mut_ptr(), 1);
        assert_eq!(status, TBLAS_INVALID_OPTION);
        assert_eq!(last_param().as_deref(), Some("layout"));

        let status = tblas_dgemv(COL_MAJOR, -3, 2, 2, 1.0, a.as_ptr(), 2, a.as_ptr(), 1, 0.0, y.as_mut_ptr(), 1);
        assert_eq!(status, TBLAS_INVALID_OPTION);
        assert_eq!(last_param().as_deref(), Some("trans"));

        let status = tblas_dgemv(COL_MAJOR, NO_TRANS, 2, 2, 1.0, a.as_ptr(), 1, a.as_ptr(), 1, 0.0, y.as_mut_ptr(), 1);
        assert_eq!(status, TBLAS_INVALID_LEADING_DIM);
        assert_eq!(last_param().as_deref(), Some("lda"));

        let status = tblas_daxpy(2, 1.0, a.as_ptr(), 0, y.as_mut_ptr(), 1);
        assert_eq!(status, TBLAS_INVALID_INCREMENT);
        assert_eq!(last_param().as_deref(), Some("incx"));

        let mut c = [0.0; 4];
        let status = tblas_dsyrk(COL_MAJOR, UPPER, 113, 2, 2, 1.0, a.as_ptr(), 2, 0.0, c.as_mut_ptr(), 2);
        assert_eq!(status, TBLAS_INVALID_OPTION);
        assert_eq!(last_param().as_deref(), Some("trans"));
    }
}
