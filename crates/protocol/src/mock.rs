//! Recording executor for tests.
//!
//! [`MockExecutor`] never touches a ledger. It records every request in
//! arrival order and answers with scripted values, so callers can assert on
//! the exact canonical requests a higher layer produced.

use std::collections::HashMap;
use std::sync::Mutex;

use ledger_core::{AccountId, TokenId, TransactionId};

use crate::executor::ProtocolExecutor;
use crate::request::{
    Request, TokenAssociateRequest, TokenBurnRequest, TokenCreateRequest, TokenDissociateRequest,
    TokenMintRequest, TokenTransferRequest,
};
use crate::result::{
    TokenAssociateResult, TokenBurnResult, TokenCreateResult, TokenDissociateResult,
    TokenMintResult, TokenTransferResult,
};
use crate::{ProtocolError, Status, TransactionKind};

/// Token id returned by creates until another is scripted.
pub const DEFAULT_TOKEN_ID: TokenId = TokenId::new(0, 0, 5005);

/// Payer stamped on every mock transaction id.
const MOCK_PAYER: AccountId = AccountId::new(0, 0, 2);

const MOCK_VALID_START: u64 = 1_700_000_000;

enum Scripted {
    Reject(Status),
    Fail(String),
}

struct MockState {
    requests: Vec<Request>,
    calls: HashMap<TransactionKind, usize>,
    token_id: TokenId,
    total_supply: u64,
    outcome: Option<Scripted>,
}

/// Executor that records requests and returns scripted results.
///
/// - creates return the scripted token id ([`DEFAULT_TOKEN_ID`] initially)
/// - mints and burns return the scripted total supply (0 initially)
/// - [`MockExecutor::reject_with`] and [`MockExecutor::fail_with`] make
///   every following call fail until [`MockExecutor::succeed`] is called
///
/// Failed calls are recorded and counted like successful ones.
pub struct MockExecutor {
    state: Mutex<MockState>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                requests: Vec::new(),
                calls: HashMap::new(),
                token_id: DEFAULT_TOKEN_ID,
                total_supply: 0,
                outcome: None,
            }),
        }
    }

    /// Sets the token id returned by subsequent creates.
    pub fn set_token_id(&self, token_id: TokenId) {
        self.state.lock().unwrap().token_id = token_id;
    }

    /// Sets the total supply returned by subsequent mints and burns.
    pub fn set_total_supply(&self, total_supply: u64) {
        self.state.lock().unwrap().total_supply = total_supply;
    }

    /// Rejects subsequent calls with `status`.
    pub fn reject_with(&self, status: Status) {
        self.state.lock().unwrap().outcome = Some(Scripted::Reject(status));
    }

    /// Fails subsequent calls with a transport-style error carrying `cause`.
    pub fn fail_with(&self, cause: impl Into<String>) {
        self.state.lock().unwrap().outcome = Some(Scripted::Fail(cause.into()));
    }

    /// Clears any scripted failure.
    pub fn succeed(&self) {
        self.state.lock().unwrap().outcome = None;
    }

    /// All requests received so far, oldest first.
    pub fn requests(&self) -> Vec<Request> {
        self.state.lock().unwrap().requests.clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<Request> {
        self.state.lock().unwrap().requests.last().cloned()
    }

    /// Number of invocations of the given kind.
    pub fn calls(&self, kind: TransactionKind) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .get(&kind)
            .copied()
            .unwrap_or(0)
    }

    /// Number of invocations of any kind.
    pub fn total_calls(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    /// Records `request` and returns the scripted failure, if any, plus a
    /// fresh transaction id.
    fn record(&self, request: Request) -> Result<(TransactionId, TokenId, u64), ProtocolError> {
        let mut state = self.state.lock().unwrap();
        let kind = request.kind();
        state.requests.push(request);
        *state.calls.entry(kind).or_insert(0) += 1;

        match &state.outcome {
            Some(Scripted::Reject(status)) => Err(ProtocolError::rejected(kind, *status)),
            Some(Scripted::Fail(cause)) => Err(ProtocolError::failed(kind, cause.clone())),
            None => {
                let seq = state.requests.len() as u64;
                let transaction_id = TransactionId::new(MOCK_PAYER, MOCK_VALID_START + seq, 0);
                Ok((transaction_id, state.token_id, state.total_supply))
            }
        }
    }
}

impl Default for MockExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolExecutor for MockExecutor {
    async fn execute_token_create(
        &self,
        request: TokenCreateRequest,
    ) -> Result<TokenCreateResult, ProtocolError> {
        let (transaction_id, token_id, _) = self.record(request.into())?;
        Ok(TokenCreateResult {
            transaction_id,
            token_id,
        })
    }

    async fn execute_token_associate(
        &self,
        request: TokenAssociateRequest,
    ) -> Result<TokenAssociateResult, ProtocolError> {
        let (transaction_id, ..) = self.record(request.into())?;
        Ok(TokenAssociateResult { transaction_id })
    }

    async fn execute_token_dissociate(
        &self,
        request: TokenDissociateRequest,
    ) -> Result<TokenDissociateResult, ProtocolError> {
        let (transaction_id, ..) = self.record(request.into())?;
        Ok(TokenDissociateResult { transaction_id })
    }

    async fn execute_token_mint(
        &self,
        request: TokenMintRequest,
    ) -> Result<TokenMintResult, ProtocolError> {
        let (transaction_id, _, total_supply) = self.record(request.into())?;
        Ok(TokenMintResult {
            transaction_id,
            total_supply,
        })
    }

    async fn execute_token_burn(
        &self,
        request: TokenBurnRequest,
    ) -> Result<TokenBurnResult, ProtocolError> {
        let (transaction_id, _, total_supply) = self.record(request.into())?;
        Ok(TokenBurnResult {
            transaction_id,
            total_supply,
        })
    }

    async fn execute_token_transfer(
        &self,
        request: TokenTransferRequest,
    ) -> Result<TokenTransferResult, ProtocolError> {
        let (transaction_id, ..) = self.record(request.into())?;
        Ok(TokenTransferResult { transaction_id })
    }
}

#[cfg(test)]
mod tests {
    use signer::{KeyAlgorithm, PrivateKey};

    use super::*;

    fn mint(amount: u64) -> TokenMintRequest {
        TokenMintRequest::new(
            DEFAULT_TOKEN_ID,
            PrivateKey::generate(KeyAlgorithm::Ed25519),
            amount,
        )
    }

    #[tokio::test]
    async fn records_requests_in_order() {
        let mock = MockExecutor::new();
        let first = mint(1);
        let second = mint(2);
        mock.execute_token_mint(first.clone()).await.unwrap();
        mock.execute_token_mint(second.clone()).await.unwrap();

        assert_eq!(
            mock.requests(),
            vec![Request::Mint(first), Request::Mint(second.clone())]
        );
        assert_eq!(mock.last_request(), Some(Request::Mint(second)));
        assert_eq!(mock.calls(TransactionKind::TokenMint), 2);
        assert_eq!(mock.calls(TransactionKind::TokenBurn), 0);
    }

    #[tokio::test]
    async fn returns_scripted_values() {
        let mock = MockExecutor::new();
        mock.set_total_supply(1000);
        let result = mock.execute_token_mint(mint(100)).await.unwrap();
        assert_eq!(result.total_supply, 1000);
    }

    #[tokio::test]
    async fn scripted_failures_are_still_counted() {
        let mock = MockExecutor::new();
        mock.reject_with(Status::InvalidSignature);
        let err = mock.execute_token_mint(mint(1)).await.unwrap_err();
        assert_eq!(err.status(), Some(Status::InvalidSignature));

        mock.fail_with("timeout");
        let err = mock.execute_token_mint(mint(1)).await.unwrap_err();
        assert!(matches!(err, ProtocolError::Failed { .. }));

        mock.succeed();
        mock.execute_token_mint(mint(1)).await.unwrap();
        assert_eq!(mock.total_calls(), 3);
    }
}
