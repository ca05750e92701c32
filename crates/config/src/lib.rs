//! Network and operator configuration.
//!
//! This crate provides configuration for the token SDK:
//!
//! - [`NetworkConfig`] -- consensus nodes, mirror nodes, EVM chain id and
//!   JSON-RPC relay for a given network (compile-time constant, `Copy`)
//! - [`ConsensusNode`] -- a single consensus node endpoint
//! - [`OperatorConfig`] -- the network plus the operator [`Account`](signer::Account),
//!   loaded from the environment
//!
//! `NetworkConfig` has no runtime cost. `OperatorConfig` parses the operator
//! account id and key once at load time so that a malformed value fails
//! before any client is constructed.

pub mod nodes;
pub mod operator;

pub use nodes::ConsensusNode;
pub use operator::{ConfigError, OperatorConfig};

use ledger_core::Network;
use nodes::{
    LOCAL_MIRRORS, LOCAL_NODES, MAINNET_MIRRORS, MAINNET_NODES, PREVIEWNET_MIRRORS,
    PREVIEWNET_NODES, TESTNET_MIRRORS, TESTNET_NODES,
};

// ---------------------------------------------------------------------------
// NetworkConfig
// ---------------------------------------------------------------------------

/// Network-specific configuration.
///
/// This is `Copy` -- just pointers to static data and a few scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkConfig {
    /// The network this configuration is for.
    pub network: Network,

    /// Consensus nodes accepting transactions.
    consensus_nodes: &'static [ConsensusNode],

    /// Mirror node endpoints (`host:port`).
    mirror_nodes: &'static [&'static str],

    /// EVM chain id.
    pub chain_id: u64,

    /// JSON-RPC relay URL.
    pub relay_url: &'static str,
}

impl NetworkConfig {
    /// Get the configuration for a specific network.
    pub const fn for_network(network: Network) -> Self {
        match network {
            Network::Mainnet => Self::MAINNET,
            Network::Testnet => Self::TESTNET,
            Network::Previewnet => Self::PREVIEWNET,
            Network::Local => Self::LOCAL,
        }
    }

    /// Returns the consensus nodes.
    pub const fn consensus_nodes(&self) -> &'static [ConsensusNode] {
        self.consensus_nodes
    }

    /// Returns the mirror node endpoints.
    pub const fn mirror_nodes(&self) -> &'static [&'static str] {
        self.mirror_nodes
    }

    // -----------------------------------------------------------------------
    // Built-in network configurations
    // -----------------------------------------------------------------------

    pub const MAINNET: Self = Self {
        network: Network::Mainnet,
        consensus_nodes: &MAINNET_NODES,
        mirror_nodes: &MAINNET_MIRRORS,
        chain_id: 295,
        relay_url: "https://mainnet.hashio.io/api",
    };

    pub const TESTNET: Self = Self {
        network: Network::Testnet,
        consensus_nodes: &TESTNET_NODES,
        mirror_nodes: &TESTNET_MIRRORS,
        chain_id: 296,
        relay_url: "https://testnet.hashio.io/api",
    };

    pub const PREVIEWNET: Self = Self {
        network: Network::Previewnet,
        consensus_nodes: &PREVIEWNET_NODES,
        mirror_nodes: &PREVIEWNET_MIRRORS,
        chain_id: 297,
        relay_url: "https://previewnet.hashio.io/api",
    };

    /// A single local node with its mirror node and relay on localhost.
    pub const LOCAL: Self = Self {
        network: Network::Local,
        consensus_nodes: &LOCAL_NODES,
        mirror_nodes: &LOCAL_MIRRORS,
        chain_id: 298,
        relay_url: "http://localhost:7546",
    };
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
