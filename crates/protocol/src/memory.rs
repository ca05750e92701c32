//! In-memory ledger backed by `RwLock<HashMap>`.
//!
//! Applies token transactions to local state with the same status rules a
//! consensus node enforces for fungible tokens. Every transaction is
//! validated in full before any state changes, so a rejected transaction
//! leaves the ledger untouched.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use ledger_core::{AccountId, TokenId, TransactionId};
use signer::{Account, PrivateKey};
use tracing::debug;

use crate::executor::ProtocolExecutor;
use crate::request::{
    TokenAssociateRequest, TokenBurnRequest, TokenCreateRequest, TokenDissociateRequest,
    TokenMintRequest, TokenTransferRequest,
};
use crate::result::{
    TokenAssociateResult, TokenBurnResult, TokenCreateResult, TokenDissociateResult,
    TokenMintResult, TokenTransferResult,
};
use crate::{ProtocolError, Status, TransactionKind};

/// Maximum UTF-8 length of a token name or symbol.
pub const MAX_TOKEN_TEXT_LEN: usize = 100;

/// First entity number handed out for new accounts and tokens.
const FIRST_ENTITY_NUM: u64 = 1001;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

struct TokenState {
    treasury: AccountId,
    supply_key: PrivateKey,
    total_supply: u64,
}

#[derive(Default)]
struct LedgerState {
    /// Registered accounts and the key that signs for them.
    accounts: HashMap<AccountId, PrivateKey>,
    tokens: HashMap<TokenId, TokenState>,
    /// Token relationships. Presence means associated.
    balances: HashMap<(AccountId, TokenId), u64>,
}

impl LedgerState {
    fn check_signer(
        &self,
        kind: TransactionKind,
        account_id: AccountId,
        key: &PrivateKey,
    ) -> Result<(), ProtocolError> {
        match self.accounts.get(&account_id) {
            None => Err(ProtocolError::rejected(kind, Status::InvalidAccountId)),
            Some(registered) if registered != key => {
                Err(ProtocolError::rejected(kind, Status::InvalidSignature))
            }
            Some(_) => Ok(()),
        }
    }

    fn token(&self, kind: TransactionKind, token_id: TokenId) -> Result<&TokenState, ProtocolError> {
        self.tokens
            .get(&token_id)
            .ok_or(ProtocolError::rejected(kind, Status::InvalidTokenId))
    }

    fn token_mut(
        &mut self,
        kind: TransactionKind,
        token_id: TokenId,
    ) -> Result<&mut TokenState, ProtocolError> {
        self.tokens
            .get_mut(&token_id)
            .ok_or(ProtocolError::rejected(kind, Status::InvalidTokenId))
    }
}

fn check_token_text(
    text: &str,
    missing: Status,
    too_long: Status,
) -> Result<(), ProtocolError> {
    let kind = TransactionKind::TokenCreate;
    if text.is_empty() {
        return Err(ProtocolError::rejected(kind, missing));
    }
    if text.len() > MAX_TOKEN_TEXT_LEN {
        return Err(ProtocolError::rejected(kind, too_long));
    }
    Ok(())
}

fn check_unique(kind: TransactionKind, token_ids: &[TokenId]) -> Result<(), ProtocolError> {
    let mut seen = HashSet::with_capacity(token_ids.len());
    if token_ids.iter().all(|id| seen.insert(*id)) {
        Ok(())
    } else {
        Err(ProtocolError::rejected(
            kind,
            Status::TokenIdRepeatedInTokenList,
        ))
    }
}

// ---------------------------------------------------------------------------
// InMemoryLedger
// ---------------------------------------------------------------------------

/// A single-process ledger holding accounts, tokens and token balances.
///
/// The operator passed to [`InMemoryLedger::new`] is registered up front and
/// pays for every transaction. Other accounts are opened with
/// [`InMemoryLedger::create_account`].
pub struct InMemoryLedger {
    operator: AccountId,
    state: RwLock<LedgerState>,
    next_entity: AtomicU64,
}

impl InMemoryLedger {
    /// Creates a ledger with `operator` as its only account.
    pub fn new(operator: &Account) -> Self {
        let mut state = LedgerState::default();
        state
            .accounts
            .insert(operator.account_id(), operator.private_key().clone());

        Self {
            operator: operator.account_id(),
            state: RwLock::new(state),
            next_entity: AtomicU64::new(FIRST_ENTITY_NUM),
        }
    }

    /// Opens a new account signed for by `key`.
    pub fn create_account(&self, key: PrivateKey) -> Account {
        let account_id = AccountId::new(0, 0, self.next_num());
        self.state
            .write()
            .unwrap()
            .accounts
            .insert(account_id, key.clone());
        debug!(%account_id, "account created");
        Account::new(account_id, key)
    }

    /// The account paying for transactions.
    pub const fn operator(&self) -> AccountId {
        self.operator
    }

    /// Balance of `token_id` held by `account_id`, or `None` if the account
    /// is not associated with the token.
    pub fn balance(&self, account_id: AccountId, token_id: TokenId) -> Option<u64> {
        self.state
            .read()
            .unwrap()
            .balances
            .get(&(account_id, token_id))
            .copied()
    }

    /// Total supply of `token_id`, or `None` if no such token exists.
    pub fn total_supply(&self, token_id: TokenId) -> Option<u64> {
        self.state
            .read()
            .unwrap()
            .tokens
            .get(&token_id)
            .map(|t| t.total_supply)
    }

    /// Treasury account of `token_id`, or `None` if no such token exists.
    pub fn treasury(&self, token_id: TokenId) -> Option<AccountId> {
        self.state
            .read()
            .unwrap()
            .tokens
            .get(&token_id)
            .map(|t| t.treasury)
    }

    fn next_num(&self) -> u64 {
        self.next_entity.fetch_add(1, Ordering::Relaxed)
    }

    fn transaction_id(&self) -> TransactionId {
        TransactionId::generate(self.operator)
    }

    // -----------------------------------------------------------------------
    // Transaction handlers
    // -----------------------------------------------------------------------

    fn apply_create(&self, request: &TokenCreateRequest) -> Result<TokenId, ProtocolError> {
        let kind = TransactionKind::TokenCreate;
        check_token_text(
            request.name(),
            Status::MissingTokenName,
            Status::TokenNameTooLong,
        )?;
        check_token_text(
            request.symbol(),
            Status::MissingTokenSymbol,
            Status::TokenSymbolTooLong,
        )?;

        let mut state = self.state.write().unwrap();
        let treasury = request.treasury_account_id();
        state.check_signer(kind, treasury, request.treasury_key())?;

        let token_id = TokenId::new(0, 0, self.next_num());
        state.tokens.insert(
            token_id,
            TokenState {
                treasury,
                supply_key: request.supply_key().clone(),
                total_supply: 0,
            },
        );
        state.balances.insert((treasury, token_id), 0);
        Ok(token_id)
    }

    fn apply_associate(&self, request: &TokenAssociateRequest) -> Result<(), ProtocolError> {
        let kind = TransactionKind::TokenAssociate;
        let account_id = request.account_id();
        let mut state = self.state.write().unwrap();
        state.check_signer(kind, account_id, request.account_key())?;
        check_unique(kind, request.token_ids())?;

        for &token_id in request.token_ids() {
            state.token(kind, token_id)?;
            if state.balances.contains_key(&(account_id, token_id)) {
                return Err(ProtocolError::rejected(
                    kind,
                    Status::TokenAlreadyAssociatedToAccount,
                ));
            }
        }

        for &token_id in request.token_ids() {
            state.balances.insert((account_id, token_id), 0);
        }
        Ok(())
    }

    fn apply_dissociate(&self, request: &TokenDissociateRequest) -> Result<(), ProtocolError> {
        let kind = TransactionKind::TokenDissociate;
        let account_id = request.account_id();
        let mut state = self.state.write().unwrap();
        state.check_signer(kind, account_id, request.account_key())?;
        check_unique(kind, request.token_ids())?;

        for &token_id in request.token_ids() {
            let token = state.token(kind, token_id)?;
            let balance = state
                .balances
                .get(&(account_id, token_id))
                .ok_or(ProtocolError::rejected(
                    kind,
                    Status::TokenNotAssociatedToAccount,
                ))?;
            if token.treasury == account_id {
                return Err(ProtocolError::rejected(kind, Status::AccountIsTreasury));
            }
            if *balance != 0 {
                return Err(ProtocolError::rejected(
                    kind,
                    Status::TransactionRequiresZeroTokenBalances,
                ));
            }
        }

        for token_id in request.token_ids() {
            state.balances.remove(&(account_id, *token_id));
        }
        Ok(())
    }

    fn apply_mint(&self, request: &TokenMintRequest) -> Result<u64, ProtocolError> {
        let kind = TransactionKind::TokenMint;
        let mut state = self.state.write().unwrap();
        let token = state.token_mut(kind, request.token_id())?;
        if &token.supply_key != request.supply_key() {
            return Err(ProtocolError::rejected(kind, Status::InvalidSignature));
        }
        if request.amount() == 0 {
            return Err(ProtocolError::rejected(kind, Status::InvalidTokenMintAmount));
        }

        // The treasury balance never exceeds total supply, so one check covers both.
        let total_supply = token
            .total_supply
            .checked_add(request.amount())
            .ok_or(ProtocolError::rejected(kind, Status::TokenMaxSupplyReached))?;
        token.total_supply = total_supply;
        let treasury = token.treasury;

        *state
            .balances
            .entry((treasury, request.token_id()))
            .or_insert(0) += request.amount();
        Ok(total_supply)
    }

    fn apply_burn(&self, request: &TokenBurnRequest) -> Result<u64, ProtocolError> {
        let kind = TransactionKind::TokenBurn;
        let token_id = request.token_id();
        let amount = request.amount();
        let mut state = self.state.write().unwrap();

        let token = state.token(kind, token_id)?;
        if &token.supply_key != request.supply_key() {
            return Err(ProtocolError::rejected(kind, Status::InvalidSignature));
        }
        if amount == 0 {
            return Err(ProtocolError::rejected(kind, Status::InvalidTokenBurnAmount));
        }
        let treasury = token.treasury;
        let held = state
            .balances
            .get(&(treasury, token_id))
            .copied()
            .unwrap_or(0);
        if held < amount {
            return Err(ProtocolError::rejected(
                kind,
                Status::InsufficientTokenBalance,
            ));
        }

        state.balances.insert((treasury, token_id), held - amount);
        let token = state.token_mut(kind, token_id)?;
        token.total_supply -= amount;
        Ok(token.total_supply)
    }

    fn apply_transfer(&self, request: &TokenTransferRequest) -> Result<(), ProtocolError> {
        let kind = TransactionKind::TokenTransfer;
        let token_id = request.token_id();
        let from = request.from_account_id();
        let to = request.to_account_id();
        let amount = request.amount();
        let mut state = self.state.write().unwrap();

        state.token(kind, token_id)?;
        state.check_signer(kind, from, request.from_account_key())?;
        if !state.accounts.contains_key(&to) {
            return Err(ProtocolError::rejected(kind, Status::InvalidAccountId));
        }
        if from == to {
            return Err(ProtocolError::rejected(
                kind,
                Status::AccountRepeatedInAccountAmounts,
            ));
        }

        let not_associated = || ProtocolError::rejected(kind, Status::TokenNotAssociatedToAccount);
        let from_balance = *state.balances.get(&(from, token_id)).ok_or_else(not_associated)?;
        let to_balance = *state.balances.get(&(to, token_id)).ok_or_else(not_associated)?;
        if from_balance < amount {
            return Err(ProtocolError::rejected(
                kind,
                Status::InsufficientTokenBalance,
            ));
        }
        // Supply bounds every balance, so the receiver cannot overflow.
        state.balances.insert((from, token_id), from_balance - amount);
        state.balances.insert((to, token_id), to_balance + amount);
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read().unwrap();
        f.debug_struct("InMemoryLedger")
            .field("operator", &self.operator)
            .field("accounts", &state.accounts.len())
            .field("tokens", &state.tokens.len())
            .finish()
    }
}

impl ProtocolExecutor for InMemoryLedger {
    async fn execute_token_create(
        &self,
        request: TokenCreateRequest,
    ) -> Result<TokenCreateResult, ProtocolError> {
        let token_id = self.apply_create(&request)?;
        let transaction_id = self.transaction_id();
        debug!(%transaction_id, %token_id, name = request.name(), symbol = request.symbol(), "token created");
        Ok(TokenCreateResult {
            transaction_id,
            token_id,
        })
    }

    async fn execute_token_associate(
        &self,
        request: TokenAssociateRequest,
    ) -> Result<TokenAssociateResult, ProtocolError> {
        self.apply_associate(&request)?;
        let transaction_id = self.transaction_id();
        debug!(%transaction_id, account_id = %request.account_id(), tokens = request.token_ids().len(), "tokens associated");
        Ok(TokenAssociateResult { transaction_id })
    }

    async fn execute_token_dissociate(
        &self,
        request: TokenDissociateRequest,
    ) -> Result<TokenDissociateResult, ProtocolError> {
        self.apply_dissociate(&request)?;
        let transaction_id = self.transaction_id();
        debug!(%transaction_id, account_id = %request.account_id(), tokens = request.token_ids().len(), "tokens dissociated");
        Ok(TokenDissociateResult { transaction_id })
    }

    async fn execute_token_mint(
        &self,
        request: TokenMintRequest,
    ) -> Result<TokenMintResult, ProtocolError> {
        let total_supply = self.apply_mint(&request)?;
        let transaction_id = self.transaction_id();
        debug!(%transaction_id, token_id = %request.token_id(), amount = request.amount(), total_supply, "tokens minted");
        Ok(TokenMintResult {
            transaction_id,
            total_supply,
        })
    }

    async fn execute_token_burn(
        &self,
        request: TokenBurnRequest,
    ) -> Result<TokenBurnResult, ProtocolError> {
        let total_supply = self.apply_burn(&request)?;
        let transaction_id = self.transaction_id();
        debug!(%transaction_id, token_id = %request.token_id(), amount = request.amount(), total_supply, "tokens burned");
        Ok(TokenBurnResult {
            transaction_id,
            total_supply,
        })
    }

    async fn execute_token_transfer(
        &self,
        request: TokenTransferRequest,
    ) -> Result<TokenTransferResult, ProtocolError> {
        self.apply_transfer(&request)?;
        let transaction_id = self.transaction_id();
        debug!(
            %transaction_id,
            token_id = %request.token_id(),
            from = %request.from_account_id(),
            to = %request.to_account_id(),
            amount = request.amount(),
            "tokens transferred"
        );
        Ok(TokenTransferResult { transaction_id })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use signer::KeyAlgorithm;

    use super::*;

    fn operator() -> Account {
        Account::new(
            AccountId::new(0, 0, 2),
            PrivateKey::generate(KeyAlgorithm::Ed25519),
        )
    }

    fn status(err: ProtocolError) -> Status {
        err.status().expect("rejected")
    }

    async fn create(ledger: &InMemoryLedger, treasury: &Account) -> TokenId {
        let key = treasury.private_key().clone();
        ledger
            .execute_token_create(TokenCreateRequest::new(
                "Gold",
                "AU",
                treasury.account_id(),
                key.clone(),
                key,
            ))
            .await
            .unwrap()
            .token_id
    }

    #[tokio::test]
    async fn create_associates_treasury_with_zero_supply() {
        let op = operator();
        let ledger = InMemoryLedger::new(&op);
        let token = create(&ledger, &op).await;

        assert_eq!(ledger.total_supply(token), Some(0));
        assert_eq!(ledger.balance(op.account_id(), token), Some(0));
        assert_eq!(ledger.treasury(token), Some(op.account_id()));
    }

    #[tokio::test]
    async fn create_validates_metadata() {
        let op = operator();
        let ledger = InMemoryLedger::new(&op);
        let key = op.private_key().clone();
        let id = op.account_id();
        let long_name = "n".repeat(MAX_TOKEN_TEXT_LEN + 1);
        let long_symbol = "s".repeat(MAX_TOKEN_TEXT_LEN + 1);

        let cases = [
            ("", "AU", Status::MissingTokenName),
            ("Gold", "", Status::MissingTokenSymbol),
            (long_name.as_str(), "AU", Status::TokenNameTooLong),
            ("Gold", long_symbol.as_str(), Status::TokenSymbolTooLong),
        ];
        for (name, symbol, expected) in cases {
            let err = ledger
                .execute_token_create(TokenCreateRequest::new(
                    name,
                    symbol,
                    id,
                    key.clone(),
                    key.clone(),
                ))
                .await
                .unwrap_err();
            assert_eq!(status(err), expected);
        }
    }

    #[tokio::test]
    async fn create_checks_treasury_signature() {
        let op = operator();
        let ledger = InMemoryLedger::new(&op);
        let other = PrivateKey::generate(KeyAlgorithm::Ed25519);

        let err = ledger
            .execute_token_create(TokenCreateRequest::new(
                "Gold",
                "AU",
                op.account_id(),
                other.clone(),
                other.clone(),
            ))
            .await
            .unwrap_err();
        assert_eq!(status(err), Status::InvalidSignature);

        let err = ledger
            .execute_token_create(TokenCreateRequest::new(
                "Gold",
                "AU",
                AccountId::new(0, 0, 9999),
                other.clone(),
                other,
            ))
            .await
            .unwrap_err();
        assert_eq!(status(err), Status::InvalidAccountId);
    }

    #[tokio::test]
    async fn associate_rules() {
        let op = operator();
        let ledger = InMemoryLedger::new(&op);
        let token = create(&ledger, &op).await;
        let alice = ledger.create_account(PrivateKey::generate(KeyAlgorithm::EcdsaSecp256k1));
        let key = alice.private_key().clone();

        let err = ledger
            .execute_token_associate(TokenAssociateRequest::new(
                vec![token, token],
                alice.account_id(),
                key.clone(),
            ))
            .await
            .unwrap_err();
        assert_eq!(status(err), Status::TokenIdRepeatedInTokenList);

        let err = ledger
            .execute_token_associate(TokenAssociateRequest::new(
                vec![TokenId::new(0, 0, 4242)],
                alice.account_id(),
                key.clone(),
            ))
            .await
            .unwrap_err();
        assert_eq!(status(err), Status::InvalidTokenId);

        ledger
            .execute_token_associate(TokenAssociateRequest::new(
                vec![token],
                alice.account_id(),
                key.clone(),
            ))
            .await
            .unwrap();
        assert_eq!(ledger.balance(alice.account_id(), token), Some(0));

        let err = ledger
            .execute_token_associate(TokenAssociateRequest::new(
                vec![token],
                alice.account_id(),
                key,
            ))
            .await
            .unwrap_err();
        assert_eq!(status(err), Status::TokenAlreadyAssociatedToAccount);
    }

    #[tokio::test]
    async fn dissociate_rules() {
        let op = operator();
        let ledger = InMemoryLedger::new(&op);
        let token = create(&ledger, &op).await;
        let alice = ledger.create_account(PrivateKey::generate(KeyAlgorithm::Ed25519));
        let key = alice.private_key().clone();
        let dissociate = |account: &Account| {
            TokenDissociateRequest::new(
                vec![token],
                account.account_id(),
                account.private_key().clone(),
            )
        };

        let err = ledger
            .execute_token_dissociate(dissociate(&alice))
            .await
            .unwrap_err();
        assert_eq!(status(err), Status::TokenNotAssociatedToAccount);

        let err = ledger
            .execute_token_dissociate(dissociate(&op))
            .await
            .unwrap_err();
        assert_eq!(status(err), Status::AccountIsTreasury);

        ledger
            .execute_token_associate(TokenAssociateRequest::new(
                vec![token],
                alice.account_id(),
                key,
            ))
            .await
            .unwrap();
        ledger
            .execute_token_mint(TokenMintRequest::new(token, op.private_key().clone(), 10))
            .await
            .unwrap();
        ledger
            .execute_token_transfer(TokenTransferRequest::new(
                token,
                op.account_id(),
                op.private_key().clone(),
                alice.account_id(),
                10,
            ))
            .await
            .unwrap();

        let err = ledger
            .execute_token_dissociate(dissociate(&alice))
            .await
            .unwrap_err();
        assert_eq!(status(err), Status::TransactionRequiresZeroTokenBalances);
    }

    #[tokio::test]
    async fn mint_and_burn_track_supply() {
        let op = operator();
        let ledger = InMemoryLedger::new(&op);
        let token = create(&ledger, &op).await;
        let supply_key = op.private_key().clone();

        let minted = ledger
            .execute_token_mint(TokenMintRequest::new(token, supply_key.clone(), 1000))
            .await
            .unwrap();
        assert_eq!(minted.total_supply, 1000);

        let burned = ledger
            .execute_token_burn(TokenBurnRequest::new(token, supply_key.clone(), 400))
            .await
            .unwrap();
        assert_eq!(burned.total_supply, 600);
        assert_eq!(ledger.balance(op.account_id(), token), Some(600));

        let err = ledger
            .execute_token_burn(TokenBurnRequest::new(token, supply_key.clone(), 601))
            .await
            .unwrap_err();
        assert_eq!(status(err), Status::InsufficientTokenBalance);
        assert_eq!(ledger.total_supply(token), Some(600));
    }

    #[tokio::test]
    async fn mint_and_burn_reject_bad_input() {
        let op = operator();
        let ledger = InMemoryLedger::new(&op);
        let token = create(&ledger, &op).await;
        let supply_key = op.private_key().clone();
        let wrong_key = PrivateKey::generate(KeyAlgorithm::Ed25519);

        let err = ledger
            .execute_token_mint(TokenMintRequest::new(token, supply_key.clone(), 0))
            .await
            .unwrap_err();
        assert_eq!(status(err), Status::InvalidTokenMintAmount);

        let err = ledger
            .execute_token_burn(TokenBurnRequest::new(token, supply_key.clone(), 0))
            .await
            .unwrap_err();
        assert_eq!(status(err), Status::InvalidTokenBurnAmount);

        let err = ledger
            .execute_token_mint(TokenMintRequest::new(token, wrong_key, 5))
            .await
            .unwrap_err();
        assert_eq!(status(err), Status::InvalidSignature);

        ledger
            .execute_token_mint(TokenMintRequest::new(token, supply_key.clone(), u64::MAX))
            .await
            .unwrap();
        let err = ledger
            .execute_token_mint(TokenMintRequest::new(token, supply_key, 1))
            .await
            .unwrap_err();
        assert_eq!(status(err), Status::TokenMaxSupplyReached);
        assert_eq!(ledger.total_supply(token), Some(u64::MAX));
    }

    #[tokio::test]
    async fn transfer_rules() {
        let op = operator();
        let ledger = InMemoryLedger::new(&op);
        let token = create(&ledger, &op).await;
        let bob = ledger.create_account(PrivateKey::generate(KeyAlgorithm::Ed25519));
        let op_key = op.private_key().clone();
        let transfer = |to: AccountId, amount: u64| {
            TokenTransferRequest::new(token, op.account_id(), op_key.clone(), to, amount)
        };

        ledger
            .execute_token_mint(TokenMintRequest::new(token, op_key.clone(), 100))
            .await
            .unwrap();

        let err = ledger
            .execute_token_transfer(transfer(bob.account_id(), 50))
            .await
            .unwrap_err();
        assert_eq!(status(err), Status::TokenNotAssociatedToAccount);

        let err = ledger
            .execute_token_transfer(transfer(op.account_id(), 50))
            .await
            .unwrap_err();
        assert_eq!(status(err), Status::AccountRepeatedInAccountAmounts);

        let err = ledger
            .execute_token_transfer(transfer(AccountId::new(0, 0, 77), 50))
            .await
            .unwrap_err();
        assert_eq!(status(err), Status::InvalidAccountId);

        ledger
            .execute_token_associate(TokenAssociateRequest::new(
                vec![token],
                bob.account_id(),
                bob.private_key().clone(),
            ))
            .await
            .unwrap();

        let err = ledger
            .execute_token_transfer(transfer(bob.account_id(), 101))
            .await
            .unwrap_err();
        assert_eq!(status(err), Status::InsufficientTokenBalance);

        let result = ledger
            .execute_token_transfer(transfer(bob.account_id(), 50))
            .await
            .unwrap();
        assert_eq!(result.transaction_id.account_id(), op.account_id());
        assert_eq!(ledger.balance(op.account_id(), token), Some(50));
        assert_eq!(ledger.balance(bob.account_id(), token), Some(50));
        assert_eq!(ledger.total_supply(token), Some(100));
    }

    #[test]
    fn entity_numbers_are_unique() {
        let ledger = InMemoryLedger::new(&operator());
        let a = ledger.create_account(PrivateKey::generate(KeyAlgorithm::Ed25519));
        let b = ledger.create_account(PrivateKey::generate(KeyAlgorithm::Ed25519));
        assert_ne!(a.account_id(), b.account_id());
        assert_eq!(a.account_id().num(), FIRST_ENTITY_NUM);
    }
}
