//! Error types for tblas.

use thiserror::Error;

use crate::options::Op;
use crate::view::Access;

/// Errors reported by kernel argument validation.
///
/// Every variant names the offending parameter, both in the `param` field and
/// in the `Display` text, so callers can match on either.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlasError {
    /// An enumerated option holds a value outside its closed set.
    #[error("invalid value {value} for option `{param}`")]
    InvalidOption { param: &'static str, value: u32 },

    /// A transpose value that is legal in general but not for this operation.
    #[error("`{param}` = {op:?} is not allowed for this operation")]
    IllegalTranspose { param: &'static str, op: Op },

    /// A stride that is zero, or negative where only positive strides are accepted.
    #[error("invalid increment `{param}` = {inc}")]
    InvalidIncrement { param: &'static str, inc: isize },

    /// Leading dimension smaller than the minor extent of the stored matrix.
    #[error("leading dimension `{param}` = {ld} must be at least {min}")]
    LeadingDimension {
        param: &'static str,
        ld: usize,
        min: usize,
    },

    /// Caller buffer shorter than the extent the arguments address.
    #[error("buffer `{param}` holds {actual} elements but {required} are addressed")]
    BufferTooSmall {
        param: &'static str,
        required: usize,
        actual: usize,
    },

    /// Operand shapes that do not conform.
    #[error("dimension mismatch in `{param}`: expected {expected}, got {actual}")]
    DimensionMismatch {
        param: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A mutable view whose access policy does not cover the region written.
    #[error("`{param}` grants {granted:?} write access, {required:?} is needed")]
    AccessDenied {
        param: &'static str,
        granted: Access,
        required: Access,
    },

    /// A scalar argument outside its domain.
    #[error("invalid value for `{param}`: {reason}")]
    InvalidValue {
        param: &'static str,
        reason: &'static str,
    },
}

impl BlasError {
    /// Name of the parameter that failed validation.
    pub fn param(&self) -> &'static str {
        match self {
            BlasError::InvalidOption { param, .. }
            | BlasError::IllegalTranspose { param, .. }
            | BlasError::InvalidIncrement { param, .. }
            | BlasError::LeadingDimension { param, .. }
            | BlasError::BufferTooSmall { param, .. }
            | BlasError::DimensionMismatch { param, .. }
            | BlasError::AccessDenied { param, .. }
            | BlasError::InvalidValue { param, .. } => param,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_matches_display() {
        let errors = [
            BlasError::InvalidOption {
                param: "layout",
                value: 0,
            },
            BlasError::IllegalTranspose {
                param: "trans",
                op: Op::Trans,
            },
            BlasError::InvalidIncrement {
                param: "incx",
                inc: 0,
            },
            BlasError::LeadingDimension {
                param: "lda",
                ld: 1,
                min: 2,
            },
            BlasError::BufferTooSmall {
                param: "y",
                required: 4,
                actual: 3,
            },
            BlasError::DimensionMismatch {
                param: "x",
                expected: 3,
                actual: 2,
            },
            BlasError::AccessDenied {
                param: "C",
                granted: Access::Upper,
                required: Access::Dense,
            },
            BlasError::InvalidValue {
                param: "d1",
                reason: "must be non-negative",
            },
        ];
        for err in errors {
            assert!(
                err.to_string().contains(err.param()),
                "`{err}` does not mention `{}`",
                err.param()
            );
        }
    }

    #[test]
    fn test_leading_dimension_message() {
        let err = BlasError::LeadingDimension {
            param: "ldc",
            ld: 1,
            min: 2,
        };
        assert_eq!(
            err.to_string(),
            "leading dimension `ldc` = 1 must be at least 2"
        );
    }
}
