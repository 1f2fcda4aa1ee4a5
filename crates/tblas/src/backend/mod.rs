//! Substitutable implementations of the matrix product.
//!
//! A backend performs `gemm` on dense views. Every backend validates
//! arguments and honors the degenerate-scalar rules exactly as
//! [`level3::gemm`](crate::level3::gemm) does; they differ only in how the
//! non-degenerate product is computed.
//!
//! # Backends
//!
//! - `GenericBackend`: the reference loops (always available)
//! - `FaerBackend`: delegates to faer's `matmul`
//!
//! # faer Integration
//!
//! The `faer_interop` module borrows dense views as faer `MatRef`/`MatMut`
//! without copying.

mod faer_gemm;
mod faer_interop;

pub use faer_gemm::FaerBackend;
pub use faer_interop::AsFaerMat;

use crate::error::BlasError;
use crate::level3;
use crate::options::Op;
use crate::scalar::Scalar;
use crate::view::{DenseView, DenseViewMut};

/// Backend trait for the general matrix product on dense views.
pub trait GemmBackend {
    /// C ← α·op(A)·op(B) + β·C.
    ///
    /// # Errors
    ///
    /// Same as [`level3::gemm`].
    fn gemm<T: Scalar>(
        transa: Op,
        transb: Op,
        alpha: T,
        a: &DenseView<'_, T>,
        b: &DenseView<'_, T>,
        beta: T,
        c: &mut DenseViewMut<'_, T>,
    ) -> Result<(), BlasError>;
}

/// Reference backend using the loop kernels.
///
/// This backend is always available and serves as the fallback for
/// the other backends.
pub struct GenericBackend;

impl GemmBackend for GenericBackend {
    fn gemm<T: Scalar>(
        transa: Op,
        transb: Op,
        alpha: T,
        a: &DenseView<'_, T>,
        b: &DenseView<'_, T>,
        beta: T,
        c: &mut DenseViewMut<'_, T>,
    ) -> Result<(), BlasError> {
        level3::gemm(transa, transb, alpha, a, b, beta, c)
    }
}
