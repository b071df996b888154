#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]
//! Threshold BLS signatures over BN254 for the agent-controlled treasury.
//!
//! Each agent signs the same ABI-encoded transfer with its own key, the
//! partial signatures are summed once `threshold` of them are collected and
//! the aggregate is handed to the wallet contract in its on-chain layout.

pub mod agent;
pub mod aggregate;
pub mod encoding;
pub mod keypair;
pub mod logging;
pub mod message;
pub mod settings;
pub mod signature;
#[cfg(feature = "wasm")]
mod wasm;

pub use agent::{Agent, KeyRing};
pub use aggregate::{aggregate, aggregate_public_keys, aggregate_signatures};
pub use keypair::{G1KeyPair, KeyPair, PublicKey};
pub use message::{Address, TransferMessage};
pub use settings::Settings;
pub use signature::{sign, verify_hashed, Signature};
pub use treasury_bn254::{DomainTag, G1Point, G2Point, Scalar, U256};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Curve(#[from] treasury_bn254::Error),
    #[error("insufficient signatures: got {got}, threshold is {threshold}")]
    InsufficientSignatures { got: usize, threshold: usize },
    #[error("threshold must be at least one")]
    InvalidThreshold,
    #[error("pubkey-privkey mismatch")]
    InvalidKeyPair,
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("unknown agent: {0}")]
    UnknownAgent(String),
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for Error {
    fn from(error: config::ConfigError) -> Self {
        Self::Config(error.to_string())
    }
}
