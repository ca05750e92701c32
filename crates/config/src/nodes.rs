//! Consensus and mirror node tables for the public networks.
//!
//! All data is compile-time constant. Zero heap allocations.

use ledger_core::AccountId;

// ---------------------------------------------------------------------------
// ConsensusNode
// ---------------------------------------------------------------------------

/// A consensus node: its gRPC endpoint and the node account that receives
/// transaction fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsensusNode {
    /// `host:port` endpoint.
    pub address: &'static str,

    /// Node account id.
    pub account_id: AccountId,
}

// ---------------------------------------------------------------------------
// Node tables
// ---------------------------------------------------------------------------

pub(crate) const MAINNET_NODES: [ConsensusNode; 4] = [
    ConsensusNode {
        address: "35.237.200.180:50211",
        account_id: AccountId::new(0, 0, 3),
    },
    ConsensusNode {
        address: "35.186.191.247:50211",
        account_id: AccountId::new(0, 0, 4),
    },
    ConsensusNode {
        address: "35.192.2.25:50211",
        account_id: AccountId::new(0, 0, 5),
    },
    ConsensusNode {
        address: "35.199.161.108:50211",
        account_id: AccountId::new(0, 0, 6),
    },
];

pub(crate) const TESTNET_NODES: [ConsensusNode; 4] = [
    ConsensusNode {
        address: "0.testnet.hedera.com:50211",
        account_id: AccountId::new(0, 0, 3),
    },
    ConsensusNode {
        address: "1.testnet.hedera.com:50211",
        account_id: AccountId::new(0, 0, 4),
    },
    ConsensusNode {
        address: "2.testnet.hedera.com:50211",
        account_id: AccountId::new(0, 0, 5),
    },
    ConsensusNode {
        address: "3.testnet.hedera.com:50211",
        account_id: AccountId::new(0, 0, 6),
    },
];

pub(crate) const PREVIEWNET_NODES: [ConsensusNode; 3] = [
    ConsensusNode {
        address: "0.previewnet.hedera.com:50211",
        account_id: AccountId::new(0, 0, 3),
    },
    ConsensusNode {
        address: "1.previewnet.hedera.com:50211",
        account_id: AccountId::new(0, 0, 4),
    },
    ConsensusNode {
        address: "2.previewnet.hedera.com:50211",
        account_id: AccountId::new(0, 0, 5),
    },
];

pub(crate) const LOCAL_NODES: [ConsensusNode; 1] = [ConsensusNode {
    address: "127.0.0.1:50211",
    account_id: AccountId::new(0, 0, 3),
}];

pub(crate) const MAINNET_MIRRORS: [&str; 1] = ["mainnet-public.mirrornode.hedera.com:443"];

pub(crate) const TESTNET_MIRRORS: [&str; 1] = ["testnet.mirrornode.hedera.com:443"];

pub(crate) const PREVIEWNET_MIRRORS: [&str; 1] = ["previewnet.mirrornode.hedera.com:443"];

pub(crate) const LOCAL_MIRRORS: [&str; 1] = ["127.0.0.1:5600"];
