use super::modular::Modular;
use super::scalar::Scalar;
use super::Field;
use crate::curve::{Curve, GROUP_ORDER};

use bigint::{Encoding, U256};

use std::fmt;

/// Point in homogeneous projective coordinates `(X : Y : Z)`.
///
/// The identity is represented by any point with `Z = 0`, canonically
/// `(0 : 1 : 0)`. Addition uses the complete formulas of Renes, Costello
/// and Batina specialised to `a = 0`, so no input needs special casing.
#[derive(Debug, Clone, Copy)]
pub struct Point<C: Curve> {
    x: C::Base,
    y: C::Base,
    z: C::Base,
}

impl<C: Curve> fmt::Display for Point<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "x: {:?}", self.x)?;
        writeln!(f, "y: {:?}", self.y)?;
        writeln!(f, "z: {:?}", self.z)
    }
}

impl<C: Curve> PartialEq for Point<C> {
    fn eq(&self, other: &Self) -> bool {
        let x0z1 = self.x * other.z;
        let x1z0 = other.x * self.z;
        let y0z1 = self.y * other.z;
        let y1z0 = other.y * self.z;

        x0z1 == x1z0 && y0z1 == y1z0
    }
}

impl<C: Curve> Eq for Point<C> {}

impl<C: Curve> std::ops::Neg for Point<C> {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl<C: Curve> std::ops::Neg for &Point<C> {
    type Output = Point<C>;
    fn neg(self) -> Self::Output {
        -*self
    }
}

impl<C: Curve> std::ops::Add for Point<C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.geometric_add(&rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Add<&'b Point<C>> for &'a Point<C> {
    type Output = Point<C>;
    fn add(self, rhs: &'b Point<C>) -> Self::Output {
        self.geometric_add(rhs)
    }
}

impl<C: Curve> std::ops::AddAssign<&Point<C>> for Point<C> {
    fn add_assign(&mut self, rhs: &Self) {
        *self = self.geometric_add(rhs)
    }
}

impl<C: Curve> std::ops::AddAssign for Point<C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.geometric_add(&rhs)
    }
}

impl<C: Curve> std::ops::Sub for Point<C> {
    type Output = Point<C>;
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Sub<&'b Point<C>> for &'a Point<C> {
    type Output = Point<C>;
    fn sub(self, rhs: &'b Point<C>) -> Self::Output {
        self + &(-rhs)
    }
}

impl<C: Curve> std::ops::Mul<Scalar> for Point<C> {
    type Output = Point<C>;
    fn mul(self, rhs: Scalar) -> Self::Output {
        self.scalar_mul(&rhs)
    }
}

impl<C: Curve> std::ops::Mul<Scalar> for &Point<C> {
    type Output = Point<C>;
    fn mul(self, rhs: Scalar) -> Self::Output {
        self.scalar_mul(&rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Mul<&'b Scalar> for &'a Point<C> {
    type Output = Point<C>;
    fn mul(self, rhs: &'b Scalar) -> Self::Output {
        self.scalar_mul(rhs)
    }
}

impl<C: Curve> std::iter::Sum for Point<C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::IDENTITY, |acc, point| acc + point)
    }
}

impl<'a, C: Curve> std::iter::Sum<&'a Point<C>> for Point<C> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::IDENTITY, |acc, point| &acc + point)
    }
}

impl<C: Curve> Point<C> {
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR_X,
        y: C::GENERATOR_Y,
        z: <C::Base as Field>::ONE,
    };

    pub const IDENTITY: Self = Self {
        x: <C::Base as Field>::ZERO,
        y: <C::Base as Field>::ONE,
        z: <C::Base as Field>::ZERO,
    };

    pub fn new(x: C::Base, y: C::Base, z: C::Base) -> Self {
        Self { x, y, z }
    }

    /// Builds `(x : y : 1)` without checking that it lies on the curve.
    pub fn from_affine(x: C::Base, y: C::Base) -> Self {
        Self::new(x, y, <C::Base as Field>::ONE)
    }

    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Checks `Y^2 Z = X^3 + b Z^3`.
    pub fn is_on_curve(&self) -> bool {
        let y2z = self.y.square() * self.z;
        let x3 = self.x.square() * self.x;
        let bz3 = C::COEFF_B * self.z.square() * self.z;
        y2z == x3 + bz3
    }

    /// Checks that the point is annihilated by the group order, which
    /// matters for G2 where the twist has a large cofactor.
    pub fn is_torsion_free(&self) -> bool {
        self.mul_u256(&GROUP_ORDER).is_identity()
    }

    pub fn double(&self) -> Self {
        self + self
    }

    pub fn geometric_add(&self, rhs: &Self) -> Self {
        let b3 = C::COEFF_B + C::COEFF_B + C::COEFF_B;

        let t0 = self.x * rhs.x;
        let mut t1 = self.y * rhs.y;
        let t2 = self.z * rhs.z;

        let mut t3 = (self.x + self.y) * (rhs.x + rhs.y);
        t3 -= t0 + t1;
        let mut t4 = (self.x + self.z) * (rhs.x + rhs.z);
        t4 -= t0 + t2;
        let mut t5 = (self.y + self.z) * (rhs.y + rhs.z);
        t5 -= t1 + t2;

        let mut sum_z = b3 * t2;
        let mut sum_x = t1 - sum_z;
        sum_z += t1;
        let mut sum_y = sum_x * sum_z;

        t1 = t0 + t0 + t0;
        t4 *= b3;
        sum_y += t1 * t4;

        sum_x *= t3;
        sum_x -= t4 * t5;
        sum_z *= t5;
        sum_z += t3 * t1;

        Self {
            x: sum_x,
            y: sum_y,
            z: sum_z,
        }
    }

    pub fn scalar_mul(&self, scalar: &Scalar) -> Self {
        self.mul_u256(scalar.inner())
    }

    /// Double-and-add over the big-endian bits of an unreduced integer.
    pub(crate) fn mul_u256(&self, number: &U256) -> Self {
        let mut q = Self::IDENTITY;
        for byte in number.to_be_bytes() {
            for shift in (0..8).rev() {
                q = q.double();
                if (byte >> shift) & 1 == 1 {
                    q += self;
                }
            }
        }
        q
    }

    pub fn into_affine(self) -> Self {
        self.to_affine()
    }

    pub fn to_affine(&self) -> Self {
        if self.is_identity() {
            Self::IDENTITY
        } else {
            let z_inv = self.z.inverse();
            Self {
                x: self.x * z_inv,
                y: self.y * z_inv,
                z: <C::Base as Field>::ONE,
            }
        }
    }

    /// Affine `(x, y)` pair, or `None` for the identity.
    pub fn affine_coordinates(&self) -> Option<(C::Base, C::Base)> {
        if self.is_identity() {
            None
        } else {
            let affine = self.to_affine();
            Some((affine.x, affine.y))
        }
    }

    pub fn x(&self) -> &C::Base {
        &self.x
    }

    pub fn y(&self) -> &C::Base {
        &self.y
    }

    pub fn z(&self) -> &C::Base {
        &self.z
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::arithmetic::{FieldElement, Fp2};
    use crate::curve::{G1Point, G2Point};

    fn fe(hex: &str) -> FieldElement {
        FieldElement::new(U256::from_be_hex(hex))
    }

    #[test]
    fn on_curve_check() {
        assert!(G1Point::GENERATOR.is_on_curve());
        assert!(G1Point::GENERATOR.double().is_on_curve());
        assert!(G1Point::IDENTITY.is_on_curve());
        let point = G1Point::GENERATOR * Scalar::from(123456);
        assert!(point.is_on_curve());

        assert!(G2Point::GENERATOR.double().is_on_curve());
        assert!((G2Point::GENERATOR * Scalar::from(678910)).is_on_curve());

        let off_curve = G1Point::from_affine(FieldElement::ONE, FieldElement::from_u64(3));
        assert!(!off_curve.is_on_curve());
    }

    #[test]
    fn point_addition() {
        let g2 = G1Point::GENERATOR.double().into_affine();
        assert_eq!(
            g2.x(),
            &fe("030644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd3")
        );
        assert_eq!(
            g2.y(),
            &fe("15ed738c0e0a7c92e7845f96b2ae9c0a68a6a449e3538fc7ff3ebf7a5a18a2c4")
        );
        assert_eq!(g2.z(), &FieldElement::ONE);

        let g4 = G1Point::GENERATOR * Scalar::from(4);
        assert_eq!(g2.double(), g4);
        assert_eq!(&g2 + &g2, g4);
        assert_eq!(g4 - g2, g2);

        let g7 = (g4 + g2 + G1Point::GENERATOR).into_affine();
        assert_eq!(
            g7.x(),
            &fe("17072b2ed3bb8d759a5325f477629386cb6fc6ecb801bd76983a6b86abffe078")
        );
        assert_eq!(
            g7.y(),
            &fe("168ada6cd130dd52017bb54bfa19377aadfe3bf05d18f41b77809f7f60d4af9e")
        );
        assert_eq!(G1Point::GENERATOR * Scalar::from(7), g7);
    }

    #[test]
    fn identity_and_inverse() {
        let g = G1Point::GENERATOR;
        assert!(G1Point::IDENTITY.is_identity());
        assert_eq!(g + G1Point::IDENTITY, g);
        assert_eq!(G1Point::IDENTITY + g, g);
        assert!((g + (-g)).is_identity());
        assert!((g - g).is_identity());
        assert!(G1Point::IDENTITY.double().is_identity());
        assert_ne!(g, G1Point::IDENTITY);
        assert_eq!(G1Point::IDENTITY.to_affine(), G1Point::IDENTITY);
        assert!(G1Point::IDENTITY.affine_coordinates().is_none());

        let h = G2Point::GENERATOR;
        assert!((h + (-h)).is_identity());
        assert_eq!(h + G2Point::IDENTITY, h);
    }

    #[test]
    fn g2_doubling() {
        let h2 = G2Point::GENERATOR.double();
        let (x, y) = h2.affine_coordinates().unwrap();
        assert_eq!(
            x,
            Fp2::new(
                fe("27dc7234fd11d3e8c36c59277c3e6f149d5cd3cfa9a62aee49f8130962b4b3b9"),
                fe("203e205db4f19b37b60121b83a7333706db86431c6d835849957ed8c3928ad79"),
            )
        );
        assert_eq!(
            y,
            Fp2::new(
                fe("04bb53b8977e5f92a0bc372742c4830944a59b4fe6b1c0466e2a6dad122b5d2e"),
                fe("195e8aa5b7827463722b8c153931579d3505566b4edf48d498e185f0509de152"),
            )
        );
        assert_eq!(G2Point::GENERATOR * Scalar::from(2), h2);
    }

    #[test]
    fn scalar_multiplication() {
        let mut g12 = G1Point::IDENTITY;
        for _ in 0..12 {
            g12 = g12 + G1Point::GENERATOR;
        }
        assert_eq!(G1Point::GENERATOR * Scalar::from(12), g12);
        assert!((G1Point::GENERATOR * Scalar::ZERO).is_identity());

        // (a + b) P = aP + bP, (ab) P = a(bP)
        let a = Scalar::from(0xdead_beef);
        let b = Scalar::from(0x1234_5678_9abc);
        let p = G2Point::GENERATOR;
        assert_eq!(p * (a + b), p * a + p * b);
        assert_eq!(p * (a * b), (p * b) * a);
        // -1 * P = -P
        assert_eq!(p * (-Scalar::ONE), -p);
    }

    #[test]
    fn group_order_annihilates_generators() {
        assert!(G1Point::GENERATOR.is_torsion_free());
        assert!(G2Point::GENERATOR.is_torsion_free());
        assert!((G2Point::GENERATOR * Scalar::from(99)).is_torsion_free());
        let sum: G1Point = [G1Point::GENERATOR, G1Point::GENERATOR.double()].iter().sum();
        assert_eq!(sum, G1Point::GENERATOR * Scalar::from(3));
    }
}
