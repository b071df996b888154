use crate::signature::Signature;
use crate::Error;

use rand_core::{CryptoRng, RngCore};
use sha3::{Digest, Sha3_384};
use treasury_bn254::hash_to_curve::hash_to_curve;
use treasury_bn254::{DomainTag, G1Point, G2Point, Modular, Scalar};
use zeroize::Zeroize;

use std::fmt;

pub type PublicKey = G2Point;

/// Hashes an arbitrary seed into a secret scalar.
pub fn hash_to_scalar(seed: &[u8]) -> Result<Scalar, Error> {
    let hash = Sha3_384::digest(seed);
    let scalar = Scalar::from_be_bytes_wide(&hash);
    if scalar.is_zero() {
        return Err(treasury_bn254::Error::InvariantViolation("seed hashed to a zero scalar").into());
    }
    Ok(scalar)
}

fn decode_hex_seed(seed: &str) -> Result<Vec<u8>, Error> {
    hex::decode(seed.trim_start_matches("0x")).map_err(|e| Error::MalformedEncoding(e.to_string()))
}

/// Signing key with its public key in G2.
pub struct KeyPair {
    privkey: Scalar,
    pubkey: PublicKey,
}

impl KeyPair {
    pub fn new(privkey: Scalar) -> Self {
        Self {
            privkey,
            pubkey: (G2Point::GENERATOR * privkey).into_affine(),
        }
    }

    pub fn new_checked(privkey: Scalar, pubkey: PublicKey) -> Result<Self, Error> {
        if pubkey != G2Point::GENERATOR * privkey {
            Err(Error::InvalidKeyPair)
        } else {
            Ok(Self {
                privkey,
                pubkey: pubkey.into_affine(),
            })
        }
    }

    pub fn derive(seed: &[u8]) -> Result<Self, Error> {
        hash_to_scalar(seed).map(Self::new)
    }

    /// Derives a key from a hex seed, with or without the `0x` prefix.
    pub fn from_hex_seed(seed: &str) -> Result<Self, Error> {
        Self::derive(&decode_hex_seed(seed)?)
    }

    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self::new(Scalar::random(rng))
    }

    pub fn pubkey(&self) -> &PublicKey {
        &self.pubkey
    }

    pub fn privkey(&self) -> &Scalar {
        &self.privkey
    }

    pub fn sign(&self, dst: &DomainTag, msg: &[u8]) -> Result<Signature, Error> {
        let msg_hash_g1 = hash_to_curve(dst, msg)?;
        Ok(self.sign_hashed(&msg_hash_g1))
    }

    pub fn sign_hashed(&self, msg_hash_g1: &G1Point) -> Signature {
        Signature::new(msg_hash_g1 * self.privkey)
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.privkey.zeroize();
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("pubkey", &self.pubkey)
            .finish_non_exhaustive()
    }
}

/// Signing key with its public key in G1, for verifiers that keep keys in
/// the short group.
pub struct G1KeyPair {
    privkey: Scalar,
    pubkey: G1Point,
}

impl G1KeyPair {
    pub fn new(privkey: Scalar) -> Self {
        Self {
            privkey,
            pubkey: (G1Point::GENERATOR * privkey).into_affine(),
        }
    }

    pub fn derive(seed: &[u8]) -> Result<Self, Error> {
        hash_to_scalar(seed).map(Self::new)
    }

    pub fn from_hex_seed(seed: &str) -> Result<Self, Error> {
        Self::derive(&decode_hex_seed(seed)?)
    }

    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self::new(Scalar::random(rng))
    }

    pub fn pubkey(&self) -> &G1Point {
        &self.pubkey
    }

    pub fn privkey(&self) -> &Scalar {
        &self.privkey
    }
}

impl Drop for G1KeyPair {
    fn drop(&mut self) {
        self.privkey.zeroize();
    }
}

impl fmt::Debug for G1KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("G1KeyPair")
            .field("pubkey", &self.pubkey)
            .finish_non_exhaustive()
    }
}
