//! Parameter values for the convenience operations.
//!
//! Required arguments are taken by `new`; optional ones are set with the
//! `with_*` methods. Anything left unset falls back to the client's operator
//! account when the operation runs:
//!
//! | Params | Optional slot | Default |
//! |--------|---------------|---------|
//! | [`CreateTokenParams`] | treasury | operator account and key |
//! | [`CreateTokenParams`] | supply key | operator key |
//! | [`MintParams`], [`BurnParams`] | supply key | operator key |
//! | [`TransferParams`] | sender | operator account and key |
//!
//! Associate and dissociate have no defaults; the account is required.

use crate::args::{AccountArg, AccountIdArg, KeyArg, TokenIdArg};

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Parameters for [`FungibleTokenClient::create`](crate::FungibleTokenClient::create).
#[derive(Debug, Clone)]
pub struct CreateTokenParams<'a> {
    pub(crate) name: &'a str,
    pub(crate) symbol: &'a str,
    pub(crate) treasury: Option<AccountArg<'a>>,
    pub(crate) supply_key: Option<KeyArg<'a>>,
}

impl<'a> CreateTokenParams<'a> {
    pub fn new(name: &'a str, symbol: &'a str) -> Self {
        Self {
            name,
            symbol,
            treasury: None,
            supply_key: None,
        }
    }

    /// Treasury that receives the minted supply and signs the create.
    pub fn with_treasury(mut self, treasury: impl Into<AccountArg<'a>>) -> Self {
        self.treasury = Some(treasury.into());
        self
    }

    pub fn with_supply_key(mut self, supply_key: impl Into<KeyArg<'a>>) -> Self {
        self.supply_key = Some(supply_key.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Associate / dissociate
// ---------------------------------------------------------------------------

/// Parameters for [`FungibleTokenClient::associate`](crate::FungibleTokenClient::associate).
#[derive(Debug, Clone)]
pub struct AssociateParams<'a> {
    pub(crate) token_ids: Vec<TokenIdArg<'a>>,
    pub(crate) account: AccountArg<'a>,
}

impl<'a> AssociateParams<'a> {
    /// Associates every token in `token_ids` with `account`. The list must
    /// not be empty.
    pub fn new<I>(token_ids: I, account: impl Into<AccountArg<'a>>) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TokenIdArg<'a>>,
    {
        Self {
            token_ids: token_ids.into_iter().map(Into::into).collect(),
            account: account.into(),
        }
    }

    pub fn single(token_id: impl Into<TokenIdArg<'a>>, account: impl Into<AccountArg<'a>>) -> Self {
        Self {
            token_ids: vec![token_id.into()],
            account: account.into(),
        }
    }
}

/// Parameters for [`FungibleTokenClient::dissociate`](crate::FungibleTokenClient::dissociate).
#[derive(Debug, Clone)]
pub struct DissociateParams<'a> {
    pub(crate) token_ids: Vec<TokenIdArg<'a>>,
    pub(crate) account: AccountArg<'a>,
}

impl<'a> DissociateParams<'a> {
    /// Dissociates every token in `token_ids` from `account`. The list must
    /// not be empty.
    pub fn new<I>(token_ids: I, account: impl Into<AccountArg<'a>>) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TokenIdArg<'a>>,
    {
        Self {
            token_ids: token_ids.into_iter().map(Into::into).collect(),
            account: account.into(),
        }
    }

    pub fn single(token_id: impl Into<TokenIdArg<'a>>, account: impl Into<AccountArg<'a>>) -> Self {
        Self {
            token_ids: vec![token_id.into()],
            account: account.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Mint / burn
// ---------------------------------------------------------------------------

/// Parameters for [`FungibleTokenClient::mint`](crate::FungibleTokenClient::mint).
#[derive(Debug, Clone)]
pub struct MintParams<'a> {
    pub(crate) token_id: TokenIdArg<'a>,
    pub(crate) amount: u64,
    pub(crate) supply_key: Option<KeyArg<'a>>,
}

impl<'a> MintParams<'a> {
    pub fn new(token_id: impl Into<TokenIdArg<'a>>, amount: u64) -> Self {
        Self {
            token_id: token_id.into(),
            amount,
            supply_key: None,
        }
    }

    pub fn with_supply_key(mut self, supply_key: impl Into<KeyArg<'a>>) -> Self {
        self.supply_key = Some(supply_key.into());
        self
    }
}

/// Parameters for [`FungibleTokenClient::burn`](crate::FungibleTokenClient::burn).
#[derive(Debug, Clone)]
pub struct BurnParams<'a> {
    pub(crate) token_id: TokenIdArg<'a>,
    pub(crate) amount: u64,
    pub(crate) supply_key: Option<KeyArg<'a>>,
}

impl<'a> BurnParams<'a> {
    pub fn new(token_id: impl Into<TokenIdArg<'a>>, amount: u64) -> Self {
        Self {
            token_id: token_id.into(),
            amount,
            supply_key: None,
        }
    }

    pub fn with_supply_key(mut self, supply_key: impl Into<KeyArg<'a>>) -> Self {
        self.supply_key = Some(supply_key.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Transfer
// ---------------------------------------------------------------------------

/// Parameters for [`FungibleTokenClient::transfer`](crate::FungibleTokenClient::transfer).
#[derive(Debug, Clone)]
pub struct TransferParams<'a> {
    pub(crate) token_id: TokenIdArg<'a>,
    pub(crate) to_account_id: AccountIdArg<'a>,
    pub(crate) amount: u64,
    pub(crate) from: Option<AccountArg<'a>>,
}

impl<'a> TransferParams<'a> {
    pub fn new(
        token_id: impl Into<TokenIdArg<'a>>,
        to_account_id: impl Into<AccountIdArg<'a>>,
        amount: u64,
    ) -> Self {
        Self {
            token_id: token_id.into(),
            to_account_id: to_account_id.into(),
            amount,
            from: None,
        }
    }

    /// Sender that signs the transfer.
    pub fn with_from(mut self, from: impl Into<AccountArg<'a>>) -> Self {
        self.from = Some(from.into());
        self
    }
}
