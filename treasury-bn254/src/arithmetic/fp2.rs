use super::field::FieldElement;
use super::modular::Modular;
use super::Field;

/// Element `c0 + c1 * i` of the quadratic extension with `i^2 = -1`.
///
/// `c0` is the real and `c1` the imaginary component. Wire formats that put
/// the imaginary part first do the reordering themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fp2 {
    c0: FieldElement,
    c1: FieldElement,
}

impl Fp2 {
    pub const ZERO: Self = Self::new(FieldElement::ZERO, FieldElement::ZERO);
    pub const ONE: Self = Self::new(FieldElement::ONE, FieldElement::ZERO);

    pub const fn new(c0: FieldElement, c1: FieldElement) -> Self {
        Self { c0, c1 }
    }

    pub fn real(&self) -> &FieldElement {
        &self.c0
    }

    pub fn imaginary(&self) -> &FieldElement {
        &self.c1
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    /// `c0^2 + c1^2`, the norm down to the base field.
    pub fn norm(&self) -> FieldElement {
        self.c0 * self.c0 + self.c1 * self.c1
    }

    pub fn scale(&self, factor: &FieldElement) -> Self {
        Self::new(self.c0 * *factor, self.c1 * *factor)
    }
}

impl Field for Fp2 {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn inverse(&self) -> Self {
        // zero norm only for zero, whose inverse is defined as zero
        let norm_inv = Modular::inverse(&self.norm());
        self.conjugate().scale(&norm_inv)
    }

    fn square(&self) -> Self {
        // (a + bi)^2 = (a + b)(a - b) + 2abi
        let ab = self.c0 * self.c1;
        Self::new((self.c0 + self.c1) * (self.c0 - self.c1), ab + ab)
    }
}

impl std::ops::Add for Fp2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }
}

impl std::ops::AddAssign for Fp2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub for Fp2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1)
    }
}

impl std::ops::SubAssign for Fp2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::ops::Neg for Fp2 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.c0, -self.c1)
    }
}

impl std::ops::Mul for Fp2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        // Karatsuba: three base field multiplications
        let v0 = self.c0 * rhs.c0;
        let v1 = self.c1 * rhs.c1;
        let cross = (self.c0 + self.c1) * (rhs.c0 + rhs.c1);
        Self::new(v0 - v1, cross - v0 - v1)
    }
}

impl std::ops::MulAssign for Fp2 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
