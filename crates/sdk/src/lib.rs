//! Fungible token SDK.
//!
//! [`FungibleTokenClient`] is the entry point. It exposes every fungible
//! token operation in two shapes:
//!
//! - **Canonical** methods (`create_token`, `associate_tokens`, `mint_token`,
//!   ...) take fully typed arguments and map one-to-one onto executor calls.
//! - **Convenience** methods (`create`, `associate`, `mint`, ...) take a
//!   params value whose slots accept typed or textual forms. Unset account
//!   and key slots fall back to the operator account bound at construction.
//!
//! Every call validates and parses its arguments, builds exactly one
//! canonical request, and submits it once through the [`ProtocolExecutor`].
//! There is no retry, caching or deduplication in this layer.
//!
//! # Usage
//!
//! ```no_run
//! use ledger_core::AccountId;
//! use protocol::InMemoryLedger;
//! use sdk::{FungibleTokenClient, MintParams, TransferParams};
//! use signer::{Account, KeyAlgorithm, PrivateKey};
//!
//! # async fn example() -> Result<(), sdk::SdkError> {
//! let operator = Account::new(
//!     AccountId::new(0, 0, 2),
//!     PrivateKey::generate(KeyAlgorithm::Ed25519),
//! );
//! let ledger = InMemoryLedger::new(&operator);
//! let client = FungibleTokenClient::new(ledger, operator);
//!
//! let token = client.create(sdk::CreateTokenParams::new("Gold", "AU")).await?;
//! let supply = client.mint(MintParams::new(token, 1_000)).await?;
//! assert_eq!(supply, 1_000);
//!
//! // Textual ids are parsed before anything is submitted.
//! client.transfer(TransferParams::new(token, "0.0.1002", 50)).await?;
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod error;
pub mod operations;
pub mod params;

pub use args::{AccountArg, AccountIdArg, KeyArg, TokenIdArg};
pub use error::{ParseError, SdkError};
pub use params::{
    AssociateParams, BurnParams, CreateTokenParams, DissociateParams, MintParams, TransferParams,
};

use std::sync::Arc;

use protocol::ProtocolExecutor;
use signer::Account;

// ---------------------------------------------------------------------------
// FungibleTokenClient
// ---------------------------------------------------------------------------

/// Shared state across all client operations.
pub(crate) struct ClientInner<E> {
    pub executor: E,
    pub operator: Account,
}

/// Fungible token operations against a ledger.
///
/// `Clone`-able (wraps an `Arc<ClientInner>`); clones share the executor.
/// The operator account is fixed for the life of the client and is the
/// default treasury, supply key holder and transfer sender.
pub struct FungibleTokenClient<E> {
    pub(crate) inner: Arc<ClientInner<E>>,
}

// Manual Clone: E need not be Clone.
impl<E> Clone for FungibleTokenClient<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> std::fmt::Debug for FungibleTokenClient<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FungibleTokenClient")
            .field(
                "operator",
                &format_args!("{}", self.inner.operator.account_id()),
            )
            .finish_non_exhaustive()
    }
}

impl<E: ProtocolExecutor> FungibleTokenClient<E> {
    /// Creates a client submitting through `executor`, with `operator` as
    /// the default acting account.
    pub fn new(executor: E, operator: Account) -> Self {
        Self {
            inner: Arc::new(ClientInner { executor, operator }),
        }
    }

    /// The operator account used for defaults.
    pub fn operator(&self) -> &Account {
        &self.inner.operator
    }

    pub fn executor(&self) -> &E {
        &self.inner.executor
    }
}
