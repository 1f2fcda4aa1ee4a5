//! Argument validation shared by the kernels.
//!
//! Every helper returns `Ok(())` unconditionally when the `unchecked` feature is
//! enabled; [`CHECKS_ENABLED`] is a constant, so the comparisons fold away.
//! Failures emit a `tracing` debug event naming the parameter before the
//! error is returned.

use tracing::debug;

use crate::error::BlasError;
use crate::options::{BlasOption, Layout, Op};
use crate::view::Access;

/// Whether argument validation is compiled in.
pub const CHECKS_ENABLED: bool = !cfg!(feature = "unchecked");

fn reject(err: BlasError) -> Result<(), BlasError> {
    debug!(param = err.param(), error = %err, "argument check failed");
    Err(err)
}

/// Rejects an option value outside its legal set.
pub fn option<O: BlasOption>(param: &'static str, value: O) -> Result<(), BlasError> {
    if CHECKS_ENABLED && !value.is_valid() {
        return reject(BlasError::InvalidOption {
            param,
            value: value.raw(),
        });
    }
    Ok(())
}

/// Rejects a valid transpose that the operation does not accept.
pub fn transpose_in(param: &'static str, op: Op, allowed: &[Op]) -> Result<(), BlasError> {
    option(param, op)?;
    if CHECKS_ENABLED && !allowed.contains(&op) {
        return reject(BlasError::IllegalTranspose { param, op });
    }
    Ok(())
}

/// Rejects a zero stride.
pub fn increment(param: &'static str, inc: isize) -> Result<(), BlasError> {
    if CHECKS_ENABLED && inc == 0 {
        return reject(BlasError::InvalidIncrement { param, inc });
    }
    Ok(())
}

/// Rejects a zero or negative stride.
pub fn positive_increment(param: &'static str, inc: isize) -> Result<(), BlasError> {
    if CHECKS_ENABLED && inc <= 0 {
        return reject(BlasError::InvalidIncrement { param, inc });
    }
    Ok(())
}

/// Rejects a leading dimension below `max(1, min)`.
pub fn leading_dim(param: &'static str, ld: usize, min: usize) -> Result<(), BlasError> {
    let min = min.max(1);
    if CHECKS_ENABLED && ld < min {
        return reject(BlasError::LeadingDimension { param, ld, min });
    }
    Ok(())
}

/// Rejects a buffer shorter than the extent the arguments address.
pub fn buffer(param: &'static str, required: usize, actual: usize) -> Result<(), BlasError> {
    if CHECKS_ENABLED && actual < required {
        return reject(BlasError::BufferTooSmall {
            param,
            required,
            actual,
        });
    }
    Ok(())
}

/// Rejects operand extents that do not agree.
pub fn conformant(param: &'static str, expected: usize, actual: usize) -> Result<(), BlasError> {
    if CHECKS_ENABLED && expected != actual {
        return reject(BlasError::DimensionMismatch {
            param,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Rejects a mutable view whose access policy does not cover `required`.
pub fn access(param: &'static str, granted: Access, required: Access) -> Result<(), BlasError> {
    if CHECKS_ENABLED && !granted.allows(required) {
        return reject(BlasError::AccessDenied {
            param,
            granted,
            required,
        });
    }
    Ok(())
}

/// Rejects a scalar argument outside its domain.
pub fn value(param: &'static str, ok: bool, reason: &'static str) -> Result<(), BlasError> {
    if CHECKS_ENABLED && !ok {
        return reject(BlasError::InvalidValue { param, reason });
    }
    Ok(())
}

/// Number of elements spanned by `n` entries at stride `inc`.
pub fn vector_extent(n: usize, inc: isize) -> usize {
    if n == 0 {
        0
    } else {
        (n - 1) * inc.unsigned_abs() + 1
    }
}

/// Extent of the dimension that must fit within the leading dimension.
pub fn minor_extent(layout: Layout, nrows: usize, ncols: usize) -> usize {
    if layout == Layout::RowMajor {
        ncols
    } else {
        nrows
    }
}

/// Number of elements spanned by an `nrows x ncols` matrix with leading dimension `ld`.
pub fn matrix_extent(layout: Layout, nrows: usize, ncols: usize, ld: usize) -> usize {
    let (major, minor) = if layout == Layout::RowMajor {
        (nrows, ncols)
    } else {
        (ncols, nrows)
    };
    if major == 0 || minor == 0 {
        0
    } else {
        (major - 1) * ld + minor
    }
}
