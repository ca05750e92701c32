//! Results returned by the executor for each canonical request.

use ledger_core::{TokenId, TransactionId};

/// Result of a token create: the new token and its transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCreateResult {
    pub transaction_id: TransactionId,
    pub token_id: TokenId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAssociateResult {
    pub transaction_id: TransactionId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenDissociateResult {
    pub transaction_id: TransactionId,
}

/// Result of a mint: the token's total supply after the mint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMintResult {
    pub transaction_id: TransactionId,
    pub total_supply: u64,
}

/// Result of a burn: the token's total supply after the burn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenBurnResult {
    pub transaction_id: TransactionId,
    pub total_supply: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenTransferResult {
    pub transaction_id: TransactionId,
}
