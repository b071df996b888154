use crate::keypair::{KeyPair, PublicKey};
use crate::message::TransferMessage;
use crate::signature::Signature;
use crate::Error;

use treasury_bn254::DomainTag;

use std::fmt;
use std::str::FromStr;

/// Signer identities of the treasury.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Agent {
    Human,
    Risk,
    Liquidity,
}

impl Agent {
    pub const ALL: [Agent; 3] = [Agent::Human, Agent::Risk, Agent::Liquidity];

    pub fn as_str(&self) -> &'static str {
        match self {
            Agent::Human => "human",
            Agent::Risk => "risk",
            Agent::Liquidity => "liquidity",
        }
    }
}

impl FromStr for Agent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(Agent::Human),
            "risk" => Ok(Agent::Risk),
            "liquidity" => Ok(Agent::Liquidity),
            other => Err(Error::UnknownAgent(other.to_owned())),
        }
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key material of every agent plus the tag they sign under.
#[derive(Debug)]
pub struct KeyRing {
    human: KeyPair,
    risk: KeyPair,
    liquidity: KeyPair,
    dst: DomainTag,
}

impl KeyRing {
    pub fn new(human: KeyPair, risk: KeyPair, liquidity: KeyPair, dst: DomainTag) -> Self {
        Self {
            human,
            risk,
            liquidity,
            dst,
        }
    }

    /// Derives every key from its hex seed.
    pub fn from_hex_seeds(
        human: &str,
        risk: &str,
        liquidity: &str,
        dst: DomainTag,
    ) -> Result<Self, Error> {
        Ok(Self::new(
            KeyPair::from_hex_seed(human)?,
            KeyPair::from_hex_seed(risk)?,
            KeyPair::from_hex_seed(liquidity)?,
            dst,
        ))
    }

    pub fn keypair(&self, agent: Agent) -> &KeyPair {
        match agent {
            Agent::Human => &self.human,
            Agent::Risk => &self.risk,
            Agent::Liquidity => &self.liquidity,
        }
    }

    pub fn pubkey(&self, agent: Agent) -> &PublicKey {
        self.keypair(agent).pubkey()
    }

    pub fn dst(&self) -> &DomainTag {
        &self.dst
    }

    pub fn sign_transfer(&self, agent: Agent, msg: &TransferMessage) -> Result<Signature, Error> {
        tracing::debug!(%agent, nonce = ?msg.nonce, "signing transfer");
        self.keypair(agent).sign(&self.dst, &msg.encode())
    }
}
