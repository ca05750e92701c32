//! Core types for the fungible token SDK.
//!
//! This crate provides the foundational identifiers shared across the
//! workspace:
//!
//! - [`Network`] -- ledger network identifier (Mainnet, Testnet, Previewnet, Local)
//! - [`AccountId`] / [`TokenId`] -- `shard.realm.num` entity identifiers
//! - [`TransactionId`] -- payer account plus valid-start timestamp
//!
//! `ledger-core` has no runtime dependencies so it can be used freely as a
//! leaf dependency by the key, config and protocol crates.

pub mod entity_id;
pub mod transaction_id;

pub use entity_id::{AccountId, EntityIdError, TokenId};
pub use transaction_id::TransactionId;

use std::fmt;

// ---------------------------------------------------------------------------
// Network
// ---------------------------------------------------------------------------

/// Ledger network identifier.
///
/// Determines the ledger id used in address checksums and which set of
/// consensus nodes a client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Production mainnet.
    Mainnet,

    /// Public testnet.
    Testnet,

    /// Public previewnet.
    Previewnet,

    /// A locally running node (e.g. a solo or local-node deployment).
    Local,
}

impl Network {
    /// All known networks, in ledger-id order.
    pub const ALL: [Self; 4] = [Self::Mainnet, Self::Testnet, Self::Previewnet, Self::Local];

    /// Returns the ledger id bytes used by the address checksum.
    pub const fn ledger_id(self) -> &'static [u8] {
        match self {
            Self::Mainnet => &[0x00],
            Self::Testnet => &[0x01],
            Self::Previewnet => &[0x02],
            Self::Local => &[0x03],
        }
    }

    /// Returns the lowercase network name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Previewnet => "previewnet",
            Self::Local => "local",
        }
    }

    /// Looks up a network by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|n| n.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Network::from_name("Testnet"), Some(Network::Testnet));
        assert_eq!(Network::from_name(" MAINNET "), Some(Network::Mainnet));
        assert_eq!(Network::from_name("local"), Some(Network::Local));
        assert_eq!(Network::from_name("devnet"), None);
    }

    #[test]
    fn ledger_ids_are_distinct() {
        for (i, a) in Network::ALL.iter().enumerate() {
            for b in &Network::ALL[i + 1..] {
                assert_ne!(a.ledger_id(), b.ledger_id());
            }
        }
    }

    #[test]
    fn display_matches_name() {
        for network in Network::ALL {
            assert_eq!(network.to_string(), network.name());
        }
    }
}
