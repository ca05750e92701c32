//! The executor capability consumed by the token facade.

use std::future::Future;

use crate::ProtocolError;
use crate::request::{
    TokenAssociateRequest, TokenBurnRequest, TokenCreateRequest, TokenDissociateRequest,
    TokenMintRequest, TokenTransferRequest,
};
use crate::result::{
    TokenAssociateResult, TokenBurnResult, TokenCreateResult, TokenDissociateResult,
    TokenMintResult, TokenTransferResult,
};

/// Executes canonical token requests against a ledger.
///
/// One method per transaction kind. Each call submits exactly one
/// transaction; retries, timeouts and cancellation are the implementor's
/// concern. Implementations must be shareable across tasks, and the
/// returned futures must be `Send`.
pub trait ProtocolExecutor: Send + Sync {
    fn execute_token_create(
        &self,
        request: TokenCreateRequest,
    ) -> impl Future<Output = Result<TokenCreateResult, ProtocolError>> + Send;

    fn execute_token_associate(
        &self,
        request: TokenAssociateRequest,
    ) -> impl Future<Output = Result<TokenAssociateResult, ProtocolError>> + Send;

    fn execute_token_dissociate(
        &self,
        request: TokenDissociateRequest,
    ) -> impl Future<Output = Result<TokenDissociateResult, ProtocolError>> + Send;

    /// Returns the total supply after the mint.
    fn execute_token_mint(
        &self,
        request: TokenMintRequest,
    ) -> impl Future<Output = Result<TokenMintResult, ProtocolError>> + Send;

    /// Returns the total supply after the burn.
    fn execute_token_burn(
        &self,
        request: TokenBurnRequest,
    ) -> impl Future<Output = Result<TokenBurnResult, ProtocolError>> + Send;

    fn execute_token_transfer(
        &self,
        request: TokenTransferRequest,
    ) -> impl Future<Output = Result<TokenTransferResult, ProtocolError>> + Send;
}
