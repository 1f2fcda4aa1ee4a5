//! LAPACK-style auxiliaries built on the BLAS kernels.

mod larf;
mod lassq;

pub use larf::larf;
pub use lassq::lassq;
