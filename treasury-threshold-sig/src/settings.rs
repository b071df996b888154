use crate::agent::KeyRing;
use crate::message::parse_amount;
use crate::Error;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment};
use dotenv::dotenv;
use treasury_bn254::{DomainTag, U256};

const ENV_PREFIX: &str = "TREASURY";

// Values stay strings until deserialized, so hex seeds keep their leading
// zeros and amounts keep every digit.
fn environment(prefix: &str) -> Environment {
    Environment::with_prefix(prefix)
}

fn default_threshold() -> usize {
    2
}

fn default_amount() -> String {
    // one token with 18 decimals
    "1000000000000000000".to_owned()
}

/// Signing configuration, read from `TREASURY_*` environment variables.
///
/// ```text
/// TREASURY_HUMAN_SEED=0x...
/// TREASURY_RISK_SEED=0x...
/// TREASURY_LIQUIDITY_SEED=0x...
/// TREASURY_THRESHOLD=2
/// TREASURY_AMOUNT=1000000000000000000
/// TREASURY_DOMAIN_TAG=BLOCKLOCK_BN254G1_XMD:KECCAK-256_SVDW_RO_H1_
/// ```
#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub human_seed: String,
    pub risk_seed: String,
    pub liquidity_seed: String,
    #[serde(default = "default_threshold")]
    pub threshold: usize,
    #[serde(default = "default_amount")]
    pub amount: String,
    #[serde(default)]
    pub domain_tag: Option<String>,
}

impl Settings {
    /// Loads the settings from the environment, after reading a `.env` file
    /// if there is one.
    pub fn from_env() -> Result<Self, Error> {
        if dotenv().is_err() {
            tracing::debug!("no .env file found");
        }
        Self::load(Config::builder().add_source(environment(ENV_PREFIX)))
    }

    pub fn load(builder: ConfigBuilder<DefaultState>) -> Result<Self, Error> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        if settings.threshold == 0 {
            return Err(Error::InvalidThreshold);
        }
        Ok(settings)
    }

    pub fn amount(&self) -> Result<U256, Error> {
        parse_amount(&self.amount)
    }

    pub fn domain_tag(&self) -> Result<DomainTag, Error> {
        match &self.domain_tag {
            Some(tag) => Ok(DomainTag::new(tag.as_bytes())?),
            None => Ok(DomainTag::default()),
        }
    }

    pub fn key_ring(&self) -> Result<KeyRing, Error> {
        KeyRing::from_hex_seeds(
            &self.human_seed,
            &self.risk_seed,
            &self.liquidity_seed,
            self.domain_tag()?,
        )
    }
}
