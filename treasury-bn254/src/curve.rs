use crate::arithmetic::{Field, FieldElement, Fp2, Point};

use bigint::U256;

use std::fmt::Debug;

/// Prime `p` of the BN254 base field.
pub const BASE_MODULUS: U256 =
    U256::from_be_hex("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47");

/// Prime order `r` shared by G1 and G2.
pub const GROUP_ORDER: U256 =
    U256::from_be_hex("30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001");

/// Short Weierstrass curve `y^2 = x^3 + b` over the field `Base`.
pub trait Curve: Clone + Copy + Debug + PartialEq + Eq + Send + Sync + 'static {
    type Base: Field;

    const COEFF_B: Self::Base;
    const GENERATOR_X: Self::Base;
    const GENERATOR_Y: Self::Base;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G2;

impl Curve for G1 {
    type Base = FieldElement;

    const COEFF_B: FieldElement = FieldElement::from_be_hex(
        "0000000000000000000000000000000000000000000000000000000000000003",
    );
    const GENERATOR_X: FieldElement = FieldElement::ONE;
    const GENERATOR_Y: FieldElement = FieldElement::from_be_hex(
        "0000000000000000000000000000000000000000000000000000000000000002",
    );
}

// Sextic twist with b' = 3 / (9 + i).
impl Curve for G2 {
    type Base = Fp2;

    const COEFF_B: Fp2 = Fp2::new(
        FieldElement::from_be_hex(
            "2b149d40ceb8aaae81be18991be06ac3b5b4c5e559dbefa33267e6dc24a138e5",
        ),
        FieldElement::from_be_hex(
            "009713b03af0fed4cd2cafadeed8fdf4a74fa084e52d1852e4a2bd0685c315d2",
        ),
    );
    const GENERATOR_X: Fp2 = Fp2::new(
        FieldElement::from_be_hex(
            "1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed",
        ),
        FieldElement::from_be_hex(
            "198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2",
        ),
    );
    const GENERATOR_Y: Fp2 = Fp2::new(
        FieldElement::from_be_hex(
            "12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa",
        ),
        FieldElement::from_be_hex(
            "090689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b",
        ),
    );
}

pub type G1Point = Point<G1>;
pub type G2Point = Point<G2>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn twist_coefficient() {
        // b' * (9 + i) = 3
        let xi = Fp2::new(FieldElement::from_u64(9), FieldElement::ONE);
        assert_eq!(G2::COEFF_B * xi, Fp2::new(G1::COEFF_B, FieldElement::ZERO));
    }

    #[test]
    fn generators_on_curve() {
        assert!(G1Point::GENERATOR.is_on_curve());
        assert!(G2Point::GENERATOR.is_on_curve());
    }
}
