//! Domain separated hashing of arbitrary bytes onto G1.
//!
//! The construction follows the `expand_message_xmd` pattern with Keccak-256
//! and the Shallue-van de Woestijne map, matching what the on-chain verifier
//! computes for the same tag and message.

use crate::arithmetic::{FieldElement, Legendre, Modular};
use crate::curve::{Curve, G1Point, G1};
use crate::Error;

use sha3::{Digest, Keccak256};

/// Suite identifier shared with the contract.
pub const DEFAULT_DOMAIN_TAG: &[u8] = b"BLOCKLOCK_BN254G1_XMD:KECCAK-256_SVDW_RO_H1_";

/// Keccak-256 rate in bytes, used as the zero padding of the first block.
const KECCAK_RATE: usize = 136;
const DIGEST_LEN: usize = 32;
/// Bytes per field element sampled by `hash_to_field`.
const CHUNK_LEN: usize = 48;

// `Z = 1` with the derived SVDW constants for `g(x) = x^3 + 3`.
const Z: FieldElement = FieldElement::ONE;
/// `-Z / 2`
const C2: FieldElement = FieldElement::from_be_hex(
    "183227397098d014dc2822db40c0ac2ecbc0b548b438e5469e10460b6c3e7ea3",
);
/// `sqrt(-3 g(Z) Z^2)` with sign 0
const C3: FieldElement = FieldElement::from_be_hex(
    "00000000000000016789af3a83522eb353c98fc6b36d713d5d8d1cc5dffffffa",
);
/// `-4 g(Z) / (3 Z^2)`
const C4: FieldElement = FieldElement::from_be_hex(
    "10216f7ba065e00de81ac1e7808072c9dd2b2385cd7b438469602eb24829a9bd",
);

/// Domain separation tag of 1 to 255 bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainTag(Vec<u8>);

impl DomainTag {
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self, Error> {
        let bytes = bytes.as_ref();
        if bytes.is_empty() || bytes.len() > u8::MAX as usize {
            return Err(Error::InvalidDomainTag(bytes.len()));
        }
        Ok(Self(bytes.to_vec()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    fn len_byte(&self) -> u8 {
        // length is checked on construction
        self.0.len() as u8
    }
}

impl Default for DomainTag {
    fn default() -> Self {
        Self(DEFAULT_DOMAIN_TAG.to_vec())
    }
}

/// Expands `msg` into `len` pseudorandom bytes.
pub fn expand_message(dst: &DomainTag, msg: &[u8], len: usize) -> Result<Vec<u8>, Error> {
    let ell = len.div_ceil(DIGEST_LEN);
    if len == 0 || ell > u8::MAX as usize {
        return Err(Error::InvalidExpandLength(len));
    }

    let b0: [u8; DIGEST_LEN] = Keccak256::new()
        .chain_update([0u8; KECCAK_RATE])
        .chain_update(msg)
        .chain_update([(len >> 8) as u8, (len & 0xff) as u8, 0])
        .chain_update(dst.as_bytes())
        .chain_update([dst.len_byte()])
        .finalize()
        .into();

    let mut bi: [u8; DIGEST_LEN] = Keccak256::new()
        .chain_update(b0)
        .chain_update([1u8])
        .chain_update(dst.as_bytes())
        .chain_update([dst.len_byte()])
        .finalize()
        .into();

    let mut out = Vec::with_capacity(ell * DIGEST_LEN);
    for i in 1..ell {
        out.extend_from_slice(&bi);
        let mut mixed = b0;
        mixed.iter_mut().zip(bi.iter()).for_each(|(m, b)| *m ^= b);
        bi = Keccak256::new()
            .chain_update(mixed)
            .chain_update([(i + 1) as u8])
            .chain_update(dst.as_bytes())
            .chain_update([dst.len_byte()])
            .finalize()
            .into();
    }
    out.extend_from_slice(&bi);
    out.truncate(len);
    Ok(out)
}

/// Samples `count` base field elements from 48-byte chunks of the expanded
/// message.
pub fn hash_to_field(dst: &DomainTag, msg: &[u8], count: usize) -> Result<Vec<FieldElement>, Error> {
    let expanded = expand_message(dst, msg, count * CHUNK_LEN)?;
    Ok(expanded
        .chunks_exact(CHUNK_LEN)
        .map(FieldElement::from_be_bytes_wide)
        .collect())
}

fn curve_rhs(x: &FieldElement) -> FieldElement {
    *x * *x * *x + G1::COEFF_B
}

/// Maps a field element onto G1 with the Shallue-van de Woestijne method.
pub fn map_to_point(u: &FieldElement) -> Result<G1Point, Error> {
    let u = *u;
    let mut tv1 = u * u * curve_rhs(&Z);
    let tv2 = FieldElement::ONE + tv1;
    tv1 = FieldElement::ONE - tv1;
    let tv3 = Modular::inverse(&(tv1 * tv2));
    let tv5 = u * tv1 * tv3 * C3;

    let x1 = C2 - tv5;
    let x2 = C2 + tv5;
    let tv8 = tv2 * tv2 * tv3;
    let x3 = Z + C4 * tv8 * tv8;

    let (index, x, gx) = select_candidate([x1, x2, x3])?;
    tracing::trace!(candidate = index, "svdw candidate selected");

    let mut y = gx.sqrt();
    if u.sgn0() != y.sgn0() {
        y = -y;
    }
    Ok(G1Point::from_affine(x, y))
}

fn select_candidate(
    candidates: [FieldElement; 3],
) -> Result<(usize, FieldElement, FieldElement), Error> {
    let [x1, x2, x3] = candidates;
    for (index, x) in [(1, x1), (2, x2)] {
        let gx = curve_rhs(&x);
        if gx.legendre()? == Legendre::One {
            return Ok((index, x, gx));
        }
    }
    // the third candidate always yields a square
    Ok((3, x3, curve_rhs(&x3)))
}

/// Hashes `msg` to a normalized point of G1.
pub fn hash_to_curve(dst: &DomainTag, msg: &[u8]) -> Result<G1Point, Error> {
    let elements = hash_to_field(dst, msg, 2)?;
    let p0 = map_to_point(&elements[0])?;
    let p1 = map_to_point(&elements[1])?;
    Ok((p0 + p1).into_affine())
}
