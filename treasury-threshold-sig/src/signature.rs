use crate::keypair::{KeyPair, PublicKey};
use crate::Error;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use treasury_bn254::hash_to_curve::hash_to_curve;
use treasury_bn254::{engine, DomainTag, G1Point, Scalar};

/// BLS signature, a normalized point of G1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature(G1Point);

impl Signature {
    pub fn new(sig: G1Point) -> Self {
        Self(sig.into_affine())
    }

    pub fn inner(&self) -> &G1Point {
        &self.0
    }

    pub fn verify(&self, dst: &DomainTag, msg: &[u8], vk: &PublicKey) -> Result<bool, Error> {
        let msg_hash_g1 = hash_to_curve(dst, msg)?;
        Ok(verify_hashed(&msg_hash_g1, vk, self))
    }

    pub fn verify_hashed(&self, msg_hash_g1: &G1Point, vk: &PublicKey) -> bool {
        verify_hashed(msg_hash_g1, vk, self)
    }
}

impl From<G1Point> for Signature {
    fn from(sig: G1Point) -> Self {
        Self::new(sig)
    }
}

/// `H(m) * secret`, normalized.
pub fn sign(msg: &[u8], dst: &DomainTag, secret: &Scalar) -> Result<Signature, Error> {
    let msg_hash_g1 = hash_to_curve(dst, msg)?;
    tracing::debug!(msg_len = msg.len(), "signing message");
    Ok(Signature::new(msg_hash_g1 * *secret))
}

/// Checks `e(H(m), pk) == e(sig, G2)`. A mismatch is reported as `false`
/// without distinguishing its cause.
pub fn verify_hashed(msg_hash_g1: &G1Point, vk: &PublicKey, signature: &Signature) -> bool {
    engine().verify_pairing(msg_hash_g1, vk, signature.inner())
}

/// Signs every message with the same key.
pub fn sign_batch<M>(keypair: &KeyPair, dst: &DomainTag, msgs: &[M]) -> Result<Vec<Signature>, Error>
where
    M: AsRef<[u8]> + Sync,
{
    #[cfg(feature = "parallel")]
    let iter = msgs.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = msgs.iter();

    iter.map(|msg| keypair.sign(dst, msg.as_ref())).collect()
}

/// Verifies each `(message, signature)` pair against the same key.
pub fn verify_batch<M>(
    dst: &DomainTag,
    vk: &PublicKey,
    signed: &[(M, Signature)],
) -> Result<Vec<bool>, Error>
where
    M: AsRef<[u8]> + Sync,
{
    #[cfg(feature = "parallel")]
    let iter = signed.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = signed.iter();

    iter.map(|(msg, sig)| sig.verify(dst, msg.as_ref(), vk))
        .collect()
}
