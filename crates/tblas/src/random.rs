//! Random operand construction.
//!
//! Buffers of random scalars for tests and benchmarks. Matrices are plain
//! `Vec`s to be wrapped in a view of the desired layout.

use rand::Rng;
use rand::distr::StandardUniform;
use rand_distr::StandardNormal;

use crate::check;
use crate::options::Layout;
use crate::scalar::{Scalar, c32, c64};

/// Trait for types that can be randomly sampled from a uniform distribution.
pub trait RandomUniform: Scalar {
    /// Sample from [0, 1); complex types sample both parts independently.
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self;
}

/// Trait for types that can be randomly sampled from a normal distribution.
pub trait RandomNormal: Scalar {
    /// Sample from the standard normal distribution.
    fn sample_normal<R: Rng>(rng: &mut R) -> Self;
}

macro_rules! impl_random {
    ($real:ty, $complex:ty, $frac:expr) => {
        impl RandomUniform for $real {
            fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
                rng.sample(StandardUniform)
            }
        }

        impl RandomUniform for $complex {
            fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
                <$complex>::new(rng.sample(StandardUniform), rng.sample(StandardUniform))
            }
        }

        impl RandomNormal for $real {
            fn sample_normal<R: Rng>(rng: &mut R) -> Self {
                rng.sample(StandardNormal)
            }
        }

        impl RandomNormal for $complex {
            // Parts are independent N(0, 1/2) so that |z|^2 has mean 1.
            fn sample_normal<R: Rng>(rng: &mut R) -> Self {
                <$complex>::new(
                    rng.sample::<$real, _>(StandardNormal) * $frac,
                    rng.sample::<$real, _>(StandardNormal) * $frac,
                )
            }
        }
    };
}

impl_random!(f32, c32, std::f32::consts::FRAC_1_SQRT_2);
impl_random!(f64, c64, std::f64::consts::FRAC_1_SQRT_2);

/// `len` uniform random values in [0, 1).
///
/// ```
/// use tblas::random::random_vec;
///
/// let x: Vec<f64> = random_vec(5);
/// assert_eq!(x.len(), 5);
/// assert!(x.iter().all(|v| (0.0..1.0).contains(v)));
/// ```
pub fn random_vec<T: RandomUniform>(len: usize) -> Vec<T> {
    random_vec_with_rng(len, &mut rand::rng())
}

/// `len` uniform random values drawn from `rng`.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tblas::random::random_vec_with_rng;
///
/// let a: Vec<f64> = random_vec_with_rng(4, &mut StdRng::seed_from_u64(7));
/// let b: Vec<f64> = random_vec_with_rng(4, &mut StdRng::seed_from_u64(7));
/// assert_eq!(a, b);
/// ```
pub fn random_vec_with_rng<T: RandomUniform, R: Rng>(len: usize, rng: &mut R) -> Vec<T> {
    (0..len).map(|_| T::sample_uniform(rng)).collect()
}

/// `len` standard normal random values.
pub fn randn_vec<T: RandomNormal>(len: usize) -> Vec<T> {
    randn_vec_with_rng(len, &mut rand::rng())
}

/// `len` standard normal random values drawn from `rng`.
pub fn randn_vec_with_rng<T: RandomNormal, R: Rng>(len: usize, rng: &mut R) -> Vec<T> {
    (0..len).map(|_| T::sample_normal(rng)).collect()
}

/// Buffer for an `nrows x ncols` matrix with leading dimension `ld`, filled
/// with normal random values, padding included.
///
/// # Panics
///
/// Panics if `ld` is smaller than the minor extent of `layout`.
pub fn randn_matrix_with_rng<T: RandomNormal, R: Rng>(
    layout: Layout,
    nrows: usize,
    ncols: usize,
    ld: usize,
    rng: &mut R,
) -> Vec<T> {
    let minor = check::minor_extent(layout, nrows, ncols);
    assert!(ld >= minor.max(1), "ld {ld} below minor extent {minor}");
    randn_vec_with_rng(check::matrix_extent(layout, nrows, ncols, ld), rng)
}
