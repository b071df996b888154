use crate::Error;

use treasury_bn254::{Encoding, U256};

use std::fmt;
use std::str::FromStr;

pub const ADDRESS_LEN: usize = 20;
pub const ENCODED_LEN: usize = 96;

/// 20-byte account address.
#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    pub fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Left-padded to a full ABI word.
    pub fn to_word(&self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[32 - ADDRESS_LEN..].copy_from_slice(&self.0);
        word
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .ok_or_else(|| Error::InvalidAddress(s.to_owned()))?;
        if digits.len() != 2 * ADDRESS_LEN {
            return Err(Error::InvalidAddress(s.to_owned()));
        }
        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| Error::InvalidAddress(s.to_owned()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Parses a token amount given either in decimal or as `0x` hex.
pub fn parse_amount(s: &str) -> Result<U256, Error> {
    let invalid = || Error::InvalidAmount(s.to_owned());
    if let Some(digits) = s.strip_prefix("0x") {
        if digits.is_empty() || digits.len() > 64 {
            return Err(invalid());
        }
        let padded = format!("{:0>64}", digits);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(padded, &mut bytes).map_err(|_| invalid())?;
        Ok(U256::from_be_slice(&bytes))
    } else {
        parse_decimal(s).ok_or_else(invalid)
    }
}

/// Decimal digits into a `uint256`, `None` on a non-digit or on overflow.
fn parse_decimal(s: &str) -> Option<U256> {
    if s.is_empty() {
        return None;
    }
    let ten = U256::from_u8(10);
    s.chars().try_fold(U256::ZERO, |acc, c| {
        let digit = U256::from_u32(c.to_digit(10)?);
        let (lo, hi) = acc.mul_wide(&ten);
        if hi != U256::ZERO {
            return None;
        }
        let next = lo.wrapping_add(&digit);
        // wrapped around
        if next < lo {
            return None;
        }
        Some(next)
    })
}

/// Transfer authorized by the agents, `(address to, uint256 amount, uint256 nonce)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferMessage {
    pub recipient: Address,
    pub amount: U256,
    pub nonce: U256,
}

impl TransferMessage {
    pub fn new(recipient: Address, amount: U256, nonce: U256) -> Self {
        Self {
            recipient,
            amount,
            nonce,
        }
    }

    /// ABI encoding of the tuple, three 32-byte words.
    pub fn encode(&self) -> [u8; ENCODED_LEN] {
        let mut out = [0u8; ENCODED_LEN];
        out[..32].copy_from_slice(&self.recipient.to_word());
        out[32..64].copy_from_slice(&self.amount.to_be_bytes());
        out[64..].copy_from_slice(&self.nonce.to_be_bytes());
        out
    }
}
