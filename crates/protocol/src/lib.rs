//! Ledger protocol layer for fungible token transactions.
//!
//! - [`request`] -- immutable canonical requests, one per transaction kind
//! - [`result`] -- per-kind results, each carrying its [`TransactionId`](ledger_core::TransactionId)
//! - [`ProtocolExecutor`] -- the capability that submits requests to a ledger
//! - [`InMemoryLedger`] -- a local executor enforcing ledger status rules
//! - `mock` feature: [`mock::MockExecutor`], a recording test double
//!
//! Errors are reported as [`ProtocolError`]: either a ledger rejection with
//! a [`Status`] or a failure to complete with an underlying cause.

pub mod error;
pub mod executor;
pub mod memory;
#[cfg(feature = "mock")]
pub mod mock;
pub mod request;
pub mod result;

pub use error::{BoxError, ProtocolError, Status, TransactionKind};
pub use executor::ProtocolExecutor;
pub use memory::InMemoryLedger;
pub use request::{
    Request, TokenAssociateRequest, TokenBurnRequest, TokenCreateRequest, TokenDissociateRequest,
    TokenMintRequest, TokenTransferRequest, TokenType,
};
pub use result::{
    TokenAssociateResult, TokenBurnResult, TokenCreateResult, TokenDissociateResult,
    TokenMintResult, TokenTransferResult,
};
