mod field;
mod fp2;
mod modular;
mod point;
mod scalar;

pub use field::{FieldElement, Legendre};
pub use fp2::Fp2;
pub use modular::{mul_mod_u256, Modular};
pub use point::Point;
pub use scalar::Scalar;

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Coordinate field of a curve: the base field for G1 and its quadratic
/// extension for G2.
pub trait Field:
    Copy
    + Debug
    + PartialEq
    + Eq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    const ZERO: Self;
    const ONE: Self;

    /// Multiplicative inverse, with `0` mapped to `0`.
    fn inverse(&self) -> Self;

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    fn square(&self) -> Self {
        *self * *self
    }
}
