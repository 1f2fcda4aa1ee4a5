//! Level 1 kernels: vector-vector operations.
//!
//! Two-vector kernels require both operands to have the same logical length
//! and fail with [`BlasError::DimensionMismatch`](crate::BlasError) otherwise.
//! Empty vectors are always a no-op.
//!
//! ```
//! use tblas::level1::{axpy, dot, nrm2};
//!
//! let x = [1.0, 2.0, 2.0];
//! let mut y = [1.0, 1.0, 1.0];
//! axpy(2.0, &x[..], &mut y[..]).unwrap();
//! assert_eq!(y, [3.0, 5.0, 5.0]);
//! assert_eq!(dot(&x[..], &y[..]).unwrap(), 23.0);
//! assert_eq!(nrm2::<f64, _>(&x[..]), 3.0);
//! ```

mod reduce;
mod rotation;
mod update;

pub use reduce::{INVALID_INDEX, asum, dot, dotu, iamax, nrm2};
pub use rotation::{rot, rotg, rotm, rotmg};
pub use update::{axpy, copy, scal, swap};
