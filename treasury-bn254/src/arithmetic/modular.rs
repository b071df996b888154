use bigint::{Encoding, NonZero, U256, U512};

pub trait Modular: Sized + Copy {
    const MODULUS: U256;

    fn new(number: U256) -> Self;

    fn inner(&self) -> &U256;

    fn add(&self, other: &Self) -> Self {
        Self::new(self.inner().add_mod(other.inner(), &Self::MODULUS))
    }

    fn neg(&self) -> Self {
        Self::new(self.inner().neg_mod(&Self::MODULUS))
    }

    fn sub(&self, other: &Self) -> Self {
        Self::new(self.inner().sub_mod(other.inner(), &Self::MODULUS))
    }

    fn mul(&self, other: &Self) -> Self {
        Self::new(mul_mod_u256(self.inner(), other.inner(), &Self::MODULUS))
    }

    /// Square-and-multiply, scanning the exponent from the most significant bit.
    fn pow(&self, exponent: &U256) -> Self {
        let mut result = Self::new(U256::ONE);
        for byte in exponent.to_be_bytes() {
            for shift in (0..8).rev() {
                result = result.mul(&result);
                if (byte >> shift) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }
        result
    }

    /// Fermat inversion. Zero has no inverse and maps to zero.
    fn inverse(&self) -> Self {
        if self.inner() == &U256::ZERO {
            return *self;
        }
        self.pow(&Self::MODULUS.wrapping_sub(&U256::from_u8(2)))
    }

    /// Interprets big-endian bytes of any length as an integer and reduces it.
    fn from_be_bytes_wide(bytes: &[u8]) -> Self {
        Self::new(reduce_be_bytes(bytes, &Self::MODULUS))
    }

    fn to_be_bytes(&self) -> [u8; 32] {
        self.inner().to_be_bytes()
    }

    fn is_odd(&self) -> bool {
        self.to_be_bytes()[31] & 1 == 1
    }
}

pub fn mul_mod_u256(lhs: &U256, rhs: &U256, modulus: &U256) -> U256 {
    let (lo, hi) = lhs.mul_wide(rhs);
    let mut wide = [0u8; 64];
    wide[..32].copy_from_slice(&hi.to_be_bytes());
    wide[32..].copy_from_slice(&lo.to_be_bytes());
    reduce_be_bytes(&wide, modulus)
}

/// Reduces a big-endian integer of any length modulo `modulus`.
///
/// Inputs wider than 64 bytes are folded in 32-byte chunks, each step
/// reducing `acc * 2^256 + chunk`.
pub(crate) fn reduce_be_bytes(bytes: &[u8], modulus: &U256) -> U256 {
    if bytes.len() <= 64 {
        return reduce_wide(bytes, modulus);
    }
    let head_len = match bytes.len() % 32 {
        0 => 32,
        rem => rem,
    };
    let (head, tail) = bytes.split_at(head_len);
    tail.chunks_exact(32)
        .fold(reduce_wide(head, modulus), |acc, chunk| {
            let mut wide = [0u8; 64];
            wide[..32].copy_from_slice(&acc.to_be_bytes());
            wide[32..].copy_from_slice(chunk);
            reduce_wide(&wide, modulus)
        })
}

fn reduce_wide(bytes: &[u8], modulus: &U256) -> U256 {
    let mut wide = [0u8; 64];
    wide[64 - bytes.len()..].copy_from_slice(bytes);

    let mut wide_modulus = [0u8; 64];
    wide_modulus[32..].copy_from_slice(&modulus.to_be_bytes());
    // NOTE modulus is never zero, so unwrap is fine here
    let mod512 = NonZero::new(U512::from_be_bytes(wide_modulus)).unwrap();

    let rem = U512::from_be_bytes(wide) % mod512;
    // the remainder is below the 256 bit modulus, so the upper half is empty
    let rem_bytes = rem.to_be_bytes();
    U256::from_be_slice(&rem_bytes[32..])
}
