//! Transaction identifiers: payer account plus valid-start timestamp.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::AccountId;

/// Identifier of a submitted transaction.
///
/// Rendered as `payer@seconds.nanos`, e.g. `0.0.2@1700000000.000000042`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionId {
    account_id: AccountId,
    valid_start_seconds: u64,
    valid_start_nanos: u32,
}

impl TransactionId {
    /// Creates a transaction id from its parts.
    pub const fn new(account_id: AccountId, valid_start_seconds: u64, valid_start_nanos: u32) -> Self {
        Self {
            account_id,
            valid_start_seconds,
            valid_start_nanos,
        }
    }

    /// Generates a transaction id for `payer` with a valid start of now.
    pub fn generate(payer: AccountId) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self::new(payer, now.as_secs(), now.subsec_nanos())
    }

    /// The account paying for the transaction.
    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub const fn valid_start_seconds(&self) -> u64 {
        self.valid_start_seconds
    }

    pub const fn valid_start_nanos(&self) -> u32 {
        self.valid_start_nanos
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}.{:09}",
            self.account_id, self.valid_start_seconds, self.valid_start_nanos
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pads_nanos() {
        let id = TransactionId::new(AccountId::new(0, 0, 2), 1_700_000_000, 42);
        assert_eq!(id.to_string(), "0.0.2@1700000000.000000042");
    }

    #[test]
    fn generate_uses_payer() {
        let payer = AccountId::new(0, 0, 1001);
        let id = TransactionId::generate(payer);
        assert_eq!(id.account_id(), payer);
        assert!(id.valid_start_seconds() > 0);
    }
}
