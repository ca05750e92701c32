//! Canonical ledger requests.
//!
//! Each request is an immutable, fully-resolved description of one ledger
//! transaction. Requests are built only from typed identifiers and keys, so
//! constructing one cannot fail; argument validation belongs to the caller.

use ledger_core::{AccountId, TokenId};
use signer::PrivateKey;

use crate::TransactionKind;

/// Token supply model. Only fungible tokens with a shared balance are
/// created through this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenType {
    #[default]
    FungibleCommon,
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Creates a fungible token whose initial (zero) supply sits in the treasury.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCreateRequest {
    name: String,
    symbol: String,
    token_type: TokenType,
    treasury_account_id: AccountId,
    treasury_key: PrivateKey,
    supply_key: PrivateKey,
}

impl TokenCreateRequest {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        treasury_account_id: AccountId,
        treasury_key: PrivateKey,
        supply_key: PrivateKey,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            token_type: TokenType::FungibleCommon,
            treasury_account_id,
            treasury_key,
            supply_key,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub const fn token_type(&self) -> TokenType {
        self.token_type
    }

    pub const fn treasury_account_id(&self) -> AccountId {
        self.treasury_account_id
    }

    pub fn treasury_key(&self) -> &PrivateKey {
        &self.treasury_key
    }

    pub fn supply_key(&self) -> &PrivateKey {
        &self.supply_key
    }
}

// ---------------------------------------------------------------------------
// Associate / dissociate
// ---------------------------------------------------------------------------

/// Associates one or more tokens with an account so it can hold them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAssociateRequest {
    token_ids: Vec<TokenId>,
    account_id: AccountId,
    account_key: PrivateKey,
}

impl TokenAssociateRequest {
    pub fn new(token_ids: Vec<TokenId>, account_id: AccountId, account_key: PrivateKey) -> Self {
        Self {
            token_ids,
            account_id,
            account_key,
        }
    }

    pub fn token_ids(&self) -> &[TokenId] {
        &self.token_ids
    }

    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn account_key(&self) -> &PrivateKey {
        &self.account_key
    }
}

/// Removes the association between an account and one or more tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDissociateRequest {
    token_ids: Vec<TokenId>,
    account_id: AccountId,
    account_key: PrivateKey,
}

impl TokenDissociateRequest {
    pub fn new(token_ids: Vec<TokenId>, account_id: AccountId, account_key: PrivateKey) -> Self {
        Self {
            token_ids,
            account_id,
            account_key,
        }
    }

    pub fn token_ids(&self) -> &[TokenId] {
        &self.token_ids
    }

    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn account_key(&self) -> &PrivateKey {
        &self.account_key
    }
}

// ---------------------------------------------------------------------------
// Mint / burn
// ---------------------------------------------------------------------------

/// Mints new units into the token's treasury. Signed by the supply key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMintRequest {
    token_id: TokenId,
    supply_key: PrivateKey,
    amount: u64,
}

impl TokenMintRequest {
    pub fn new(token_id: TokenId, supply_key: PrivateKey, amount: u64) -> Self {
        Self {
            token_id,
            supply_key,
            amount,
        }
    }

    pub const fn token_id(&self) -> TokenId {
        self.token_id
    }

    pub fn supply_key(&self) -> &PrivateKey {
        &self.supply_key
    }

    pub const fn amount(&self) -> u64 {
        self.amount
    }
}

/// Burns units from the token's treasury. Signed by the supply key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBurnRequest {
    token_id: TokenId,
    supply_key: PrivateKey,
    amount: u64,
}

impl TokenBurnRequest {
    pub fn new(token_id: TokenId, supply_key: PrivateKey, amount: u64) -> Self {
        Self {
            token_id,
            supply_key,
            amount,
        }
    }

    pub const fn token_id(&self) -> TokenId {
        self.token_id
    }

    pub fn supply_key(&self) -> &PrivateKey {
        &self.supply_key
    }

    pub const fn amount(&self) -> u64 {
        self.amount
    }
}

// ---------------------------------------------------------------------------
// Transfer
// ---------------------------------------------------------------------------

/// Moves units of a token between two associated accounts. Signed by the
/// sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTransferRequest {
    token_id: TokenId,
    from_account_id: AccountId,
    from_account_key: PrivateKey,
    to_account_id: AccountId,
    amount: u64,
}

impl TokenTransferRequest {
    pub fn new(
        token_id: TokenId,
        from_account_id: AccountId,
        from_account_key: PrivateKey,
        to_account_id: AccountId,
        amount: u64,
    ) -> Self {
        Self {
            token_id,
            from_account_id,
            from_account_key,
            to_account_id,
            amount,
        }
    }

    pub const fn token_id(&self) -> TokenId {
        self.token_id
    }

    pub const fn from_account_id(&self) -> AccountId {
        self.from_account_id
    }

    pub fn from_account_key(&self) -> &PrivateKey {
        &self.from_account_key
    }

    pub const fn to_account_id(&self) -> AccountId {
        self.to_account_id
    }

    pub const fn amount(&self) -> u64 {
        self.amount
    }
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Any canonical request, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Create(TokenCreateRequest),
    Associate(TokenAssociateRequest),
    Dissociate(TokenDissociateRequest),
    Mint(TokenMintRequest),
    Burn(TokenBurnRequest),
    Transfer(TokenTransferRequest),
}

impl Request {
    pub const fn kind(&self) -> TransactionKind {
        match self {
            Self::Create(_) => TransactionKind::TokenCreate,
            Self::Associate(_) => TransactionKind::TokenAssociate,
            Self::Dissociate(_) => TransactionKind::TokenDissociate,
            Self::Mint(_) => TransactionKind::TokenMint,
            Self::Burn(_) => TransactionKind::TokenBurn,
            Self::Transfer(_) => TransactionKind::TokenTransfer,
        }
    }
}

macro_rules! impl_from_request {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Request {
                fn from(request: $ty) -> Self {
                    Self::$variant(request)
                }
            }
        )*
    };
}

impl_from_request! {
    Create => TokenCreateRequest,
    Associate => TokenAssociateRequest,
    Dissociate => TokenDissociateRequest,
    Mint => TokenMintRequest,
    Burn => TokenBurnRequest,
    Transfer => TokenTransferRequest,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use signer::KeyAlgorithm;

    use super::*;

    #[test]
    fn create_request_is_fungible_common() {
        let key = PrivateKey::generate(KeyAlgorithm::Ed25519);
        let request = TokenCreateRequest::new(
            "Gold",
            "AU",
            AccountId::new(0, 0, 2),
            key.clone(),
            key.clone(),
        );
        assert_eq!(request.name(), "Gold");
        assert_eq!(request.symbol(), "AU");
        assert_eq!(request.token_type(), TokenType::FungibleCommon);
        assert_eq!(request.supply_key(), &key);
    }

    #[test]
    fn request_kind_matches_variant() {
        let key = PrivateKey::generate(KeyAlgorithm::Ed25519);
        let token = TokenId::new(0, 0, 500);
        let request: Request = TokenBurnRequest::new(token, key, 5).into();
        assert_eq!(request.kind(), TransactionKind::TokenBurn);
    }

    #[test]
    fn debug_does_not_print_key_bytes() {
        let key = PrivateKey::generate(KeyAlgorithm::Ed25519);
        let hex = hex::encode(key.secret_bytes());
        let request = TokenMintRequest::new(TokenId::new(0, 0, 7), key, 1);
        assert!(!format!("{request:?}").contains(&hex));
    }
}
