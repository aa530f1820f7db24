use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// Scalars the transform can run over.
///
/// Implementors supply the principal n-th root of unity for both directions
/// and a way to divide by the transform length. The kernel itself only needs
/// ring arithmetic.
pub trait RootOfUnity:
    Copy + PartialEq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    fn zero() -> Self;

    fn one() -> Self;

    /// Principal n-th root used for evaluation, `None` if the scalar domain has none.
    fn principal_root(n: usize) -> Option<Self>;

    /// Root used for interpolation: the inverse of [`RootOfUnity::principal_root`].
    fn inverse_root(n: usize) -> Option<Self>;

    /// `self / n`
    fn scale_down(self, n: usize) -> Self;

    fn square(self) -> Self {
        self * self
    }
}
