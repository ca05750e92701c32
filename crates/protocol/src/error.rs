//! Protocol error types.
//!
//! [`ProtocolError`] separates the two ways a ledger operation can go wrong:
//! the ledger answered with a non-success [`Status`], or the transaction
//! never completed (transport fault, timeout, internal error).

use std::fmt;

// ---------------------------------------------------------------------------
// TransactionKind
// ---------------------------------------------------------------------------

/// The kind of ledger transaction an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    TokenCreate,
    TokenAssociate,
    TokenDissociate,
    TokenMint,
    TokenBurn,
    TokenTransfer,
}

impl TransactionKind {
    /// Every transaction kind, in facade order.
    pub const ALL: [Self; 6] = [
        Self::TokenCreate,
        Self::TokenAssociate,
        Self::TokenDissociate,
        Self::TokenMint,
        Self::TokenBurn,
        Self::TokenTransfer,
    ];
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TokenCreate => "token create",
            Self::TokenAssociate => "token associate",
            Self::TokenDissociate => "token dissociate",
            Self::TokenMint => "token mint",
            Self::TokenBurn => "token burn",
            Self::TokenTransfer => "token transfer",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// A non-success response code from the ledger.
///
/// Displayed in the ledger's upper snake case form (`INVALID_SIGNATURE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InvalidAccountId,
    InvalidTokenId,
    InvalidSignature,
    MissingTokenName,
    TokenNameTooLong,
    MissingTokenSymbol,
    TokenSymbolTooLong,
    TokenIdRepeatedInTokenList,
    TokenAlreadyAssociatedToAccount,
    TokenNotAssociatedToAccount,
    AccountIsTreasury,
    TransactionRequiresZeroTokenBalances,
    InvalidTokenMintAmount,
    InvalidTokenBurnAmount,
    TokenMaxSupplyReached,
    InsufficientTokenBalance,
    AccountRepeatedInAccountAmounts,
    InsufficientPayerBalance,
    Busy,
}

impl Status {
    /// The ledger's wire name for this status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidAccountId => "INVALID_ACCOUNT_ID",
            Self::InvalidTokenId => "INVALID_TOKEN_ID",
            Self::InvalidSignature => "INVALID_SIGNATURE",
            Self::MissingTokenName => "MISSING_TOKEN_NAME",
            Self::TokenNameTooLong => "TOKEN_NAME_TOO_LONG",
            Self::MissingTokenSymbol => "MISSING_TOKEN_SYMBOL",
            Self::TokenSymbolTooLong => "TOKEN_SYMBOL_TOO_LONG",
            Self::TokenIdRepeatedInTokenList => "TOKEN_ID_REPEATED_IN_TOKEN_LIST",
            Self::TokenAlreadyAssociatedToAccount => "TOKEN_ALREADY_ASSOCIATED_TO_ACCOUNT",
            Self::TokenNotAssociatedToAccount => "TOKEN_NOT_ASSOCIATED_TO_ACCOUNT",
            Self::AccountIsTreasury => "ACCOUNT_IS_TREASURY",
            Self::TransactionRequiresZeroTokenBalances => {
                "TRANSACTION_REQUIRES_ZERO_TOKEN_BALANCES"
            }
            Self::InvalidTokenMintAmount => "INVALID_TOKEN_MINT_AMOUNT",
            Self::InvalidTokenBurnAmount => "INVALID_TOKEN_BURN_AMOUNT",
            Self::TokenMaxSupplyReached => "TOKEN_MAX_SUPPLY_REACHED",
            Self::InsufficientTokenBalance => "INSUFFICIENT_TOKEN_BALANCE",
            Self::AccountRepeatedInAccountAmounts => "ACCOUNT_REPEATED_IN_ACCOUNT_AMOUNTS",
            Self::InsufficientPayerBalance => "INSUFFICIENT_PAYER_BALANCE",
            Self::Busy => "BUSY",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProtocolError
// ---------------------------------------------------------------------------

/// Boxed underlying cause of a failed transaction.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors from executing a ledger transaction.
#[derive(Debug)]
pub enum ProtocolError {
    /// The ledger processed the transaction and rejected it.
    Rejected {
        transaction: TransactionKind,
        status: Status,
    },

    /// The transaction did not complete.
    Failed {
        transaction: TransactionKind,
        cause: BoxError,
    },
}

impl ProtocolError {
    /// Shorthand for [`ProtocolError::Rejected`].
    pub const fn rejected(transaction: TransactionKind, status: Status) -> Self {
        Self::Rejected {
            transaction,
            status,
        }
    }

    /// Shorthand for [`ProtocolError::Failed`].
    pub fn failed(transaction: TransactionKind, cause: impl Into<BoxError>) -> Self {
        Self::Failed {
            transaction,
            cause: cause.into(),
        }
    }

    /// The transaction kind that failed.
    pub const fn transaction(&self) -> TransactionKind {
        match self {
            Self::Rejected { transaction, .. } | Self::Failed { transaction, .. } => *transaction,
        }
    }

    /// The ledger status, if the ledger rejected the transaction.
    pub const fn status(&self) -> Option<Status> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Failed { .. } => None,
        }
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected {
                transaction,
                status,
            } => write!(f, "{transaction} rejected by ledger: {status}"),
            Self::Failed { transaction, cause } => {
                write!(f, "{transaction} failed to execute: {cause}")
            }
        }
    }
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rejected { .. } => None,
            Self::Failed { cause, .. } => Some(&**cause),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn rejected_display_names_status() {
        let err = ProtocolError::rejected(TransactionKind::TokenMint, Status::InvalidSignature);
        assert_eq!(
            err.to_string(),
            "token mint rejected by ledger: INVALID_SIGNATURE"
        );
        assert_eq!(err.status(), Some(Status::InvalidSignature));
        assert_eq!(err.transaction(), TransactionKind::TokenMint);
        assert!(err.source().is_none());
    }

    #[test]
    fn failed_chains_cause() {
        let err = ProtocolError::failed(TransactionKind::TokenTransfer, "connection reset");
        assert_eq!(err.status(), None);
        assert_eq!(err.source().unwrap().to_string(), "connection reset");
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn status_wire_names_are_upper_snake() {
        for status in [
            Status::TokenIdRepeatedInTokenList,
            Status::TransactionRequiresZeroTokenBalances,
            Status::Busy,
        ] {
            let name = status.as_str();
            assert!(name.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }
}
