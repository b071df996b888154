use crate::arithmetic::{FieldElement, Fp2, Modular};
use crate::curve::{G1Point, G2Point};

use ark_bn254::{Bn254, Fq, Fq2, G1Affine, G2Affine};
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ff::{PrimeField, Zero};

/// Element of the target group `GT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gt(PairingOutput<Bn254>);

impl Gt {
    pub fn is_one(&self) -> bool {
        // the backend's additive zero is the multiplicative one of GT
        self.0.is_zero()
    }
}

impl std::ops::Mul for Gt {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        // the target group is written additively by the backend
        Self(self.0 + rhs.0)
    }
}

/// Source of the bilinear map `e: G1 x G2 -> GT`.
pub trait PairingProvider: Send + Sync {
    fn pairing(&self, p: &G1Point, q: &G2Point) -> Gt;

    /// `e(a, b) == e(c, d)`.
    fn pairing_eq(&self, a: &G1Point, b: &G2Point, c: &G1Point, d: &G2Point) -> bool {
        self.pairing(a, b) == self.pairing(c, d)
    }
}

/// Pairing backed by the arkworks BN254 implementation.
pub struct ArkworksProvider {
    generator: <Bn254 as Pairing>::G2Prepared,
}

impl ArkworksProvider {
    pub fn new() -> Self {
        Self {
            generator: g2_to_ark(&G2Point::GENERATOR).into(),
        }
    }

    /// `e(p, G2)` with the prepared generator.
    pub fn pairing_with_generator(&self, p: &G1Point) -> Gt {
        Gt(Bn254::multi_pairing([g1_to_ark(p)], [self.generator.clone()]))
    }
}

impl Default for ArkworksProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PairingProvider for ArkworksProvider {
    fn pairing(&self, p: &G1Point, q: &G2Point) -> Gt {
        if *q == G2Point::GENERATOR {
            return self.pairing_with_generator(p);
        }
        Gt(Bn254::pairing(g1_to_ark(p), g2_to_ark(q)))
    }
}

fn fq(element: &FieldElement) -> Fq {
    Fq::from_be_bytes_mod_order(&element.to_be_bytes())
}

fn fq2(element: &Fp2) -> Fq2 {
    Fq2::new(fq(element.real()), fq(element.imaginary()))
}

fn g1_to_ark(point: &G1Point) -> G1Affine {
    match point.affine_coordinates() {
        Some((x, y)) => G1Affine::new_unchecked(fq(&x), fq(&y)),
        None => G1Affine::identity(),
    }
}

fn g2_to_ark(point: &G2Point) -> G2Affine {
    match point.affine_coordinates() {
        Some((x, y)) => G2Affine::new_unchecked(fq2(&x), fq2(&y)),
        None => G2Affine::identity(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::arithmetic::Scalar;

    #[test]
    fn converted_points_are_valid() {
        let g1 = g1_to_ark(&G1Point::GENERATOR);
        assert!(g1.is_on_curve());
        let g2 = g2_to_ark(&G2Point::GENERATOR.double());
        assert!(g2.is_on_curve());
        assert!(g2.is_in_correct_subgroup_assuming_on_curve());
        assert!(g1_to_ark(&G1Point::IDENTITY).infinity);
    }

    #[test]
    fn bilinearity() {
        let provider = ArkworksProvider::new();
        let a = Scalar::from(1234);
        let b = Scalar::from(5678);
        let lhs = provider.pairing(&(G1Point::GENERATOR * a), &(G2Point::GENERATOR * b));
        let rhs = provider.pairing(&(G1Point::GENERATOR * (a * b)), &G2Point::GENERATOR);
        assert_eq!(lhs, rhs);
        assert!(provider.pairing_eq(
            &(G1Point::GENERATOR * b),
            &(G2Point::GENERATOR * a),
            &G1Point::GENERATOR,
            &(G2Point::GENERATOR * (a * b)),
        ));
        assert_ne!(lhs, provider.pairing(&G1Point::GENERATOR, &G2Point::GENERATOR));
    }

    #[test]
    fn identity_pairs_to_one() {
        let provider = ArkworksProvider::new();
        assert!(provider
            .pairing(&G1Point::IDENTITY, &G2Point::GENERATOR)
            .is_one());
        assert!(provider
            .pairing(&G1Point::GENERATOR, &G2Point::IDENTITY)
            .is_one());
        let e = provider.pairing(&G1Point::GENERATOR, &G2Point::GENERATOR);
        assert!(!e.is_one());
        assert_eq!(
            e * e,
            provider.pairing(&G1Point::GENERATOR.double(), &G2Point::GENERATOR)
        );
    }
}
