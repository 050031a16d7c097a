//! Core scalar trait for the dense solver
//!
//! [`RealField`] abstracts over the real floating-point types the elimination
//! routines work with. Complex coefficients are not supported.

use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types that can be used in elimination and substitution.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default)
/// - `f32` (for memory-constrained applications)
pub trait RealField:
    Float + NumAssign + FromPrimitive + ToPrimitive + Send + Sync + Debug + Display + 'static
{
    /// Check if this value counts as zero under an absolute tolerance.
    ///
    /// With `tol == 0` this is an exact comparison against zero.
    #[inline]
    fn is_zero_within(&self, tol: Self) -> bool {
        self.abs() <= tol
    }

    /// Convert an `f64` literal, falling back to zero when it cannot be represented.
    #[inline]
    fn from_f64_or_zero(value: f64) -> Self {
        Self::from_f64(value).unwrap_or_else(Self::zero)
    }
}

impl RealField for f64 {}

impl RealField for f32 {}
