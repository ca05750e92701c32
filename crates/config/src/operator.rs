//! Operator configuration loaded from the environment.
//!
//! | Variable | Required | Meaning |
//! |----------|----------|---------|
//! | `HIERO_NETWORK` | no (default `testnet`) | `mainnet`, `testnet`, `previewnet` or `local` |
//! | `HIERO_ACCOUNT_ID` | yes | operator account id, e.g. `0.0.1001` |
//! | `HIERO_PRIVATE_KEY` | yes | operator key, hex or DER hex |

use std::fmt;

use ledger_core::{AccountId, EntityIdError, Network};
use signer::{Account, KeyError, PrivateKey};

use crate::NetworkConfig;

pub const ENV_NETWORK: &str = "HIERO_NETWORK";
pub const ENV_ACCOUNT_ID: &str = "HIERO_ACCOUNT_ID";
pub const ENV_PRIVATE_KEY: &str = "HIERO_PRIVATE_KEY";

/// Network used when `HIERO_NETWORK` is unset.
pub const DEFAULT_NETWORK: Network = Network::Testnet;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from loading operator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    MissingVar(&'static str),

    /// `HIERO_NETWORK` names no known network.
    UnknownNetwork(String),

    /// The operator account id is malformed or its checksum does not match
    /// the configured network.
    InvalidAccountId(EntityIdError),

    /// The operator key could not be decoded.
    InvalidPrivateKey(KeyError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingVar(name) => write!(f, "missing configuration variable {name}"),
            Self::UnknownNetwork(name) => write!(f, "unknown network: {name}"),
            Self::InvalidAccountId(e) => write!(f, "invalid operator account id: {e}"),
            Self::InvalidPrivateKey(e) => write!(f, "invalid operator private key: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidAccountId(e) => Some(e),
            Self::InvalidPrivateKey(e) => Some(e),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// OperatorConfig
// ---------------------------------------------------------------------------

/// The network to talk to and the operator account that pays for, and by
/// default owns, every operation.
#[derive(Debug, Clone)]
pub struct OperatorConfig {
    pub network: NetworkConfig,
    pub operator: Account,
}

impl OperatorConfig {
    pub fn new(network: NetworkConfig, operator: Account) -> Self {
        Self { network, operator }
    }

    /// Loads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// See [`OperatorConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if the account id or key is
    /// absent, and the matching parse variant if any value is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &'static str| lookup(name).filter(|v| !v.trim().is_empty());

        let network = match get(ENV_NETWORK) {
            Some(name) => Network::from_name(&name).ok_or(ConfigError::UnknownNetwork(name))?,
            None => DEFAULT_NETWORK,
        };

        let account_id = get(ENV_ACCOUNT_ID).ok_or(ConfigError::MissingVar(ENV_ACCOUNT_ID))?;
        let account_id = AccountId::parse(account_id.trim()).map_err(ConfigError::InvalidAccountId)?;
        account_id
            .validate_checksum(network)
            .map_err(ConfigError::InvalidAccountId)?;

        let private_key = get(ENV_PRIVATE_KEY).ok_or(ConfigError::MissingVar(ENV_PRIVATE_KEY))?;
        let private_key = PrivateKey::parse(&private_key).map_err(ConfigError::InvalidPrivateKey)?;

        Ok(Self {
            network: NetworkConfig::for_network(network),
            operator: Account::new(account_id, private_key),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
