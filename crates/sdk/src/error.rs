//! SDK error types.
//!
//! [`SdkError`] is the unified error type for all token operations. It keeps
//! the three failure classes apart: caller mistakes caught before any
//! request exists, textual arguments that do not parse, and executor
//! failures passed through untouched.

use std::fmt;

use ledger_core::EntityIdError;
use protocol::ProtocolError;
use signer::KeyError;

// ---------------------------------------------------------------------------
// ParseError
// ---------------------------------------------------------------------------

/// A textual argument could not be decoded into its typed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    AccountId(EntityIdError),
    TokenId(EntityIdError),
    PrivateKey(KeyError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccountId(e) => write!(f, "invalid account id: {e}"),
            Self::TokenId(e) => write!(f, "invalid token id: {e}"),
            Self::PrivateKey(e) => write!(f, "invalid private key: {e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AccountId(e) | Self::TokenId(e) => Some(e),
            Self::PrivateKey(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// SdkError
// ---------------------------------------------------------------------------

/// Errors from token operations.
#[derive(Debug)]
pub enum SdkError {
    /// A required argument was missing or empty, or a token list was empty.
    /// Names the offending argument. Never reaches the executor.
    InvalidArgument(&'static str),

    /// A textual identifier or key could not be parsed.
    Parse(ParseError),

    /// The executor rejected or failed to complete the transaction.
    Execution(ProtocolError),
}

impl SdkError {
    /// The ledger status, if the executor reported a rejection.
    pub fn status(&self) -> Option<protocol::Status> {
        match self {
            Self::Execution(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for SdkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(name) => write!(f, "invalid argument: {name} must not be empty"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Execution(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SdkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(_) => None,
            Self::Parse(e) => Some(e),
            Self::Execution(e) => Some(e),
        }
    }
}

impl From<ParseError> for SdkError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<ProtocolError> for SdkError {
    fn from(e: ProtocolError) -> Self {
        Self::Execution(e)
    }
}
