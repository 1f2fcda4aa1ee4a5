//! tblas - generic BLAS kernels
//!
//! This crate provides the Level 1, 2 and 3 BLAS operations, written once
//! over any [`Scalar`] type and any storage exposed through the view traits
//! in [`view`], together with the LAPACK reflector `larf`.
//!
//! # Architecture
//!
//! ```text
//! Legacy surface (legacy module)
//!     → reference argument lists over slices: n, incx, layout, lda, ...
//!
//! View kernels (level1, level2, level3, lapack modules)
//!     → validate (check), then run the reference loop shape
//!       selected by layout, transpose and triangle
//!
//! Backends (backend module)
//!     → GenericBackend (reference loops)
//!     → FaerBackend (faer matmul)
//! ```
//!
//! Argument validation names the offending parameter in [`BlasError`]. The
//! `unchecked` cargo feature compiles every check out.
//!
//! # Example
//!
//! ```
//! use tblas::level3::gemm;
//! use tblas::view::{DenseView, DenseViewMut, Matrix};
//! use tblas::{Op, c64};
//!
//! // C = A·Aᴴ for A = [[1, i]]
//! let a = [c64::new(1.0, 0.0), c64::new(0.0, 1.0)];
//! let a = DenseView::row_major(&a, 1, 2).unwrap();
//! let mut c = [c64::new(0.0, 0.0)];
//! let mut cv = DenseViewMut::col_major(&mut c, 1, 1).unwrap();
//! gemm(Op::NoTrans, Op::ConjTrans, c64::new(1.0, 0.0), &a, &a, c64::new(0.0, 0.0), &mut cv).unwrap();
//! assert_eq!(cv.at(0, 0), c64::new(2.0, 0.0));
//! ```

pub mod backend;
pub mod check;
pub mod debug_utils;
pub mod error;
pub mod lapack;
pub mod legacy;
pub mod level1;
pub mod level2;
pub mod level3;
pub mod options;
pub mod random;
pub mod scalar;
pub mod view;

pub use error::BlasError;
pub use options::{BlasOption, Diag, Layout, Op, Side, Uplo};
pub use scalar::{RealOf, RealScalar, Scalar, c32, c64};
pub use view::{Access, Matrix, MatrixMut, SubVector, Vector, VectorMut};
