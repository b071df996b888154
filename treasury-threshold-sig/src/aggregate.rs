use crate::keypair::PublicKey;
use crate::signature::Signature;
use crate::Error;

use treasury_bn254::{Curve, Point};

/// Sums the first `threshold` points.
///
/// Inputs beyond the threshold are ignored, so which signers contributed is
/// decided by the order of `points`.
pub fn aggregate<C: Curve>(points: &[Point<C>], threshold: usize) -> Result<Point<C>, Error> {
    if threshold == 0 {
        return Err(Error::InvalidThreshold);
    }
    if points.len() < threshold {
        return Err(Error::InsufficientSignatures {
            got: points.len(),
            threshold,
        });
    }
    tracing::debug!(supplied = points.len(), used = threshold, "aggregating points");
    let sum: Point<C> = points[..threshold].iter().sum();
    Ok(sum.into_affine())
}

pub fn aggregate_signatures(signatures: &[Signature], threshold: usize) -> Result<Signature, Error> {
    let points = signatures.iter().map(|sig| *sig.inner()).collect::<Vec<_>>();
    aggregate(&points, threshold).map(Signature::new)
}

pub fn aggregate_public_keys(pubkeys: &[PublicKey], threshold: usize) -> Result<PublicKey, Error> {
    aggregate(pubkeys, threshold)
}
