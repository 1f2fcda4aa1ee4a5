use tracing::debug;

use crate::check;
use crate::error::BlasError;
use crate::level2::{gemv, ger};
use crate::options::{Op, Side};
use crate::scalar::Scalar;
use crate::view::{Access, MatrixMut, StartsWithOne, Vector, VectorMut};

/// Applies the elementary reflector H = I − τ·v·vᴴ to C, forming H·C
/// (`Side::Left`) or C·H (`Side::Right`).
///
/// Element 0 of `v` is taken to be one whatever the storage holds. `v` has
/// length m for the left side and n for the right side; `work` has the
/// other dimension. With τ = 0, H is the identity and nothing is touched.
///
/// ```
/// use tblas::lapack::larf;
/// use tblas::view::DenseViewMut;
/// use tblas::Side;
///
/// // v = [1, 1] and τ = 1 give H = [[0, -1], [-1, 0]].
/// let v = [42.0, 1.0];
/// let mut c = [1.0, 2.0];
/// let mut work = [0.0];
/// let mut cv = DenseViewMut::col_major(&mut c, 2, 1).unwrap();
/// larf(Side::Left, &v[..], 1.0, &mut cv, &mut work[..]).unwrap();
/// assert_eq!(c, [-2.0, -1.0]);
/// ```
///
/// # Errors
///
/// Returns an error naming `side` for an invalid side, `C` if its access
/// policy is not dense, and `v` or `work` for mismatched lengths.
pub fn larf<T, V, C, W>(side: Side, v: &V, tau: T, c: &mut C, work: &mut W) -> Result<(), BlasError>
where
    T: Scalar,
    V: Vector<T> + ?Sized,
    C: MatrixMut<T> + ?Sized,
    W: VectorMut<T> + ?Sized,
{
    check::option("side", side)?;
    check::access("C", c.write_access(), Access::Dense)?;
    let (m, n) = (c.nrows(), c.ncols());
    let (lenv, lenw) = if side == Side::Left { (m, n) } else { (n, m) };
    check::conformant("v", lenv, v.len())?;
    check::conformant("work", lenw, work.len())?;

    debug!(side = %side.as_char(), m, n, "applying elementary reflector");
    if tau == T::zero() || m == 0 || n == 0 {
        return Ok(());
    }

    let v = StartsWithOne::new(v);
    if side == Side::Left {
        gemv(Op::ConjTrans, T::one(), &*c, &v, T::zero(), work)?;
        ger(-tau, &v, &*work, c)
    } else {
        gemv(Op::NoTrans, T::one(), &*c, &v, T::zero(), work)?;
        ger(-tau, &*work, &v, c)
    }
}
