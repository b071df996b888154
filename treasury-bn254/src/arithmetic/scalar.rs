use super::modular::Modular;
use crate::curve::GROUP_ORDER;

use bigint::{NonZero, U256};
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Element of the scalar field, i.e. an integer modulo the order of G1 and G2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scalar(U256);

impl Scalar {
    pub const ZERO: Self = Self(U256::ZERO);
    pub const ONE: Self = Self(U256::ONE);

    /// Uniformly samples a scalar by reducing 512 random bits.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);
        let scalar = Self::from_be_bytes_wide(&bytes);
        bytes.zeroize();
        scalar
    }

    pub fn is_zero(&self) -> bool {
        self.0 == U256::ZERO
    }
}

impl Modular for Scalar {
    const MODULUS: U256 = GROUP_ORDER;

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

impl From<u64> for Scalar {
    fn from(number: u64) -> Self {
        Self::new(U256::from_u64(number))
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl std::ops::Add for Scalar {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Modular::add(&self, &rhs)
    }
}

impl std::ops::Sub for Scalar {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Modular::sub(&self, &rhs)
    }
}

impl std::ops::Neg for Scalar {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Modular::neg(&self)
    }
}

impl std::ops::Mul for Scalar {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Modular::mul(&self, &rhs)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bigint::Encoding;
    use rand::rngs::OsRng;

    #[test]
    fn operations_modulo_group_order() {
        let a = Scalar::from(15);
        let b = Scalar::from(9);
        assert_eq!(a + b, Scalar::from(24));
        assert_eq!(a * b, Scalar::from(135));
        assert_eq!(b - a, -Scalar::from(6));

        assert_eq!(Scalar::new(GROUP_ORDER), Scalar::ZERO);
        let minus_one = Scalar::new(GROUP_ORDER.wrapping_sub(&U256::ONE));
        assert_eq!(minus_one, -Scalar::ONE);
        assert_eq!(minus_one * minus_one, Scalar::ONE);
        assert_eq!(minus_one + Scalar::ONE, Scalar::ZERO);
    }

    #[test]
    fn wide_bytes_are_reduced() {
        let scalar = Scalar::from_be_bytes_wide(&[0xff; 64]);
        assert!(scalar.inner() < &GROUP_ORDER);
        let mut order_bytes = [0u8; 48];
        order_bytes[16..].copy_from_slice(&GROUP_ORDER.to_be_bytes());
        assert!(Scalar::from_be_bytes_wide(&order_bytes).is_zero());

        let mut long = [0u8; 96];
        long[95] = 5;
        assert_eq!(Scalar::from_be_bytes_wide(&long), Scalar::from(5));
    }

    #[test]
    fn random_scalars_differ() {
        let a = Scalar::random(&mut OsRng);
        let b = Scalar::random(&mut OsRng);
        assert_ne!(a, b);
        assert!(a.inner() < &GROUP_ORDER);
    }

    #[test]
    fn zeroize_clears_value() {
        let mut scalar = Scalar::from(1234);
        scalar.zeroize();
        assert!(scalar.is_zero());
    }
}
