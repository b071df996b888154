use super::modular::Modular;
use super::Field;
use crate::curve::BASE_MODULUS;
use crate::Error;

use bigint::{NonZero, U256};

/// `(p - 1) / 2`, the Euler criterion exponent.
const LEGENDRE_EXPONENT: U256 =
    U256::from_be_hex("183227397098d014dc2822db40c0ac2ecbc0b548b438e5469e10460b6c3e7ea3");
/// `(p + 1) / 4`, valid as a square root exponent because `p = 3 mod 4`.
const SQRT_EXPONENT: U256 =
    U256::from_be_hex("0c19139cb84c680a6e14116da060561765e05aa45a1c72a34f082305b61f3f52");

/// Element of the BN254 base field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement(pub(crate) U256);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Legendre {
    Zero,
    One,
    MinusOne,
}

impl FieldElement {
    pub const ONE: Self = Self(U256::ONE);
    pub const ZERO: Self = Self(U256::ZERO);

    /// Builds an element from a hex constant. The caller guarantees the
    /// value is already reduced.
    pub(crate) const fn from_be_hex(hex: &str) -> Self {
        Self(U256::from_be_hex(hex))
    }

    pub fn from_u64(number: u64) -> Self {
        Self::new(U256::from_u64(number))
    }

    /// Parses a canonical big-endian encoding, rejecting values `>= p`.
    pub fn from_be_bytes_canonical(bytes: &[u8; 32]) -> Option<Self> {
        let number = U256::from_be_slice(bytes);
        if number < BASE_MODULUS {
            Some(Self(number))
        } else {
            None
        }
    }

    pub fn legendre(&self) -> Result<Legendre, Error> {
        let symbol = self.pow(&LEGENDRE_EXPONENT);
        if symbol == Self::ZERO {
            Ok(Legendre::Zero)
        } else if symbol == Self::ONE {
            Ok(Legendre::One)
        } else if symbol == -Self::ONE {
            Ok(Legendre::MinusOne)
        } else {
            Err(Error::InvariantViolation(
                "legendre symbol outside of {-1, 0, 1}",
            ))
        }
    }

    /// Square root of a quadratic residue. The result is meaningless for
    /// non-residues, callers check [`FieldElement::legendre`] first.
    pub fn sqrt(&self) -> Self {
        self.pow(&SQRT_EXPONENT)
    }

    /// Sign of the element, defined as the parity of its canonical value.
    pub fn sgn0(&self) -> bool {
        self.is_odd()
    }
}

impl Modular for FieldElement {
    const MODULUS: U256 = BASE_MODULUS;

    fn new(number: U256) -> Self {
        let reduced = if number < Self::MODULUS {
            number
        } else {
            // NOTE unwrap is fine here because the modulus
            // can be safely assumed to be nonzero
            number % NonZero::new(Self::MODULUS).unwrap()
        };

        Self(reduced)
    }

    fn inner(&self) -> &U256 {
        &self.0
    }
}

impl Field for FieldElement {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn inverse(&self) -> Self {
        Modular::inverse(self)
    }
}

impl<'a, 'b> std::ops::Add<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn add(self, rhs: &'b FieldElement) -> Self::Output {
        Modular::add(self, rhs)
    }
}

impl std::ops::Add for FieldElement {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Modular::add(&self, &rhs)
    }
}

impl std::ops::AddAssign for FieldElement {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub for FieldElement {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Modular::sub(&self, &rhs)
    }
}

impl<'a, 'b> std::ops::Sub<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn sub(self, rhs: &FieldElement) -> Self::Output {
        Modular::sub(self, rhs)
    }
}

impl std::ops::SubAssign for FieldElement {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::ops::Neg for FieldElement {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Modular::neg(&self)
    }
}

impl std::ops::Mul for FieldElement {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Modular::mul(&self, &rhs)
    }
}

impl<'a, 'b> std::ops::Mul<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn mul(self, rhs: &FieldElement) -> Self::Output {
        Modular::mul(self, rhs)
    }
}

impl std::ops::MulAssign for FieldElement {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bigint::Encoding;

    #[test]
    fn reduced_on_construction() {
        assert_eq!(FieldElement::new(BASE_MODULUS), FieldElement::ZERO);
        let above = BASE_MODULUS.wrapping_add(&U256::from_u8(5));
        assert_eq!(FieldElement::new(above), FieldElement::from_u64(5));
        assert!(FieldElement::from_be_bytes_canonical(&BASE_MODULUS.to_be_bytes()).is_none());
        assert_eq!(
            FieldElement::from_be_bytes_canonical(&U256::from_u8(7).to_be_bytes()),
            Some(FieldElement::from_u64(7))
        );
    }

    #[test]
    fn basic_operations() {
        let a = FieldElement::from_u64(15);
        let b = FieldElement::from_u64(9);
        assert_eq!(a + b, FieldElement::from_u64(24));
        assert_eq!(a - b, FieldElement::from_u64(6));
        assert_eq!(b - a, -FieldElement::from_u64(6));
        assert_eq!(&a * &b, FieldElement::from_u64(135));
        assert_eq!(-FieldElement::ZERO, FieldElement::ZERO);
        assert_eq!(
            -FieldElement::ONE,
            FieldElement::new(BASE_MODULUS.wrapping_sub(&U256::ONE))
        );
    }

    #[test]
    fn inversion() {
        assert_eq!(Modular::inverse(&FieldElement::ZERO), FieldElement::ZERO);
        for n in [1u64, 2, 3, 1000, u64::MAX] {
            let a = FieldElement::from_u64(n);
            assert_eq!(a * Modular::inverse(&a), FieldElement::ONE);
        }
    }

    #[test]
    fn exponentiation() {
        let two = FieldElement::from_u64(2);
        assert_eq!(two.pow(&U256::ZERO), FieldElement::ONE);
        assert_eq!(two.pow(&U256::from_u8(10)), FieldElement::from_u64(1024));
        // Fermat's little theorem
        let a = FieldElement::from_u64(0xdead_beef);
        assert_eq!(a.pow(&BASE_MODULUS), a);
    }

    #[test]
    fn legendre_and_sqrt() {
        assert_eq!(FieldElement::ZERO.legendre().unwrap(), Legendre::Zero);
        assert_eq!(FieldElement::from_u64(4).legendre().unwrap(), Legendre::One);
        assert_eq!(FieldElement::from_u64(2).legendre().unwrap(), Legendre::One);
        // p = 3 mod 4, so -1 is a non-residue
        assert_eq!((-FieldElement::ONE).legendre().unwrap(), Legendre::MinusOne);

        let nine = FieldElement::from_u64(9);
        let root = nine.sqrt();
        assert_eq!(root * root, nine);
        let two = FieldElement::from_u64(2);
        assert_eq!(two.sqrt() * two.sqrt(), two);
    }

    #[test]
    fn sign_is_parity() {
        assert!(!FieldElement::ZERO.sgn0());
        assert!(FieldElement::ONE.sgn0());
        // p is odd, so negation flips the parity of nonzero elements
        assert!(!(-FieldElement::ONE).sgn0());
    }
}
