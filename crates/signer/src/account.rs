//! An account identifier paired with the key that controls it.

use std::fmt;

use ledger_core::AccountId;

use crate::PrivateKey;

/// An account id together with its private key.
///
/// Used both as an explicit operation argument and as the operator
/// identity a client is bound to.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    account_id: AccountId,
    private_key: PrivateKey,
}

impl Account {
    pub fn new(account_id: AccountId, private_key: PrivateKey) -> Self {
        Self {
            account_id,
            private_key,
        }
    }

    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("account_id", &self.account_id)
            .field("algorithm", &self.private_key.algorithm())
            .finish_non_exhaustive()
    }
}
