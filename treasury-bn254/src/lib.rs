#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]
//! Arithmetic over the BN254 (alt_bn128) pairing curve as used by the
//! on-chain threshold wallet verifier.
//!
//! Field and group arithmetic is implemented on top of `crypto-bigint`,
//! while the pairing itself is delegated to a [`PairingProvider`] held by
//! the process-wide [`Engine`].

pub mod arithmetic;
pub mod curve;
pub mod engine;
pub mod hash_to_curve;
pub mod pairing;

pub use arithmetic::{Field, FieldElement, Fp2, Legendre, Modular, Point, Scalar};
pub use bigint::{Encoding, U256};
pub use curve::{Curve, G1Point, G2Point, G1, G2};
pub use engine::{engine, Engine};
pub use hash_to_curve::{hash_to_curve, DomainTag};
pub use pairing::{ArkworksProvider, Gt, PairingProvider};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid domain separation tag length: {0} (expected 1..=255 bytes)")]
    InvalidDomainTag(usize),
    #[error("requested expansion length {0} is out of range")]
    InvalidExpandLength(usize),
    #[error("invariant violation: {0}")]
    InvariantViolation(&'static str),
}
