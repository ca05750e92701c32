//! Argument forms accepted by the convenience operations.
//!
//! Each argument may be given typed or as text. Text is trimmed and parsed
//! when the argument is resolved; blank text counts as a missing argument.

use ledger_core::{AccountId, TokenId};
use signer::{Account, PrivateKey};

use crate::error::{ParseError, SdkError};

/// Rejects blank text as a missing argument.
fn non_blank<'a>(text: &'a str, name: &'static str) -> Result<&'a str, SdkError> {
    let text = text.trim();
    if text.is_empty() {
        Err(SdkError::InvalidArgument(name))
    } else {
        Ok(text)
    }
}

// ---------------------------------------------------------------------------
// TokenIdArg
// ---------------------------------------------------------------------------

/// A token id, typed or textual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenIdArg<'a> {
    Id(TokenId),
    Text(&'a str),
}

impl TokenIdArg<'_> {
    pub(crate) fn resolve(self, name: &'static str) -> Result<TokenId, SdkError> {
        match self {
            Self::Id(id) => Ok(id),
            Self::Text(text) => {
                TokenId::parse(non_blank(text, name)?).map_err(|e| ParseError::TokenId(e).into())
            }
        }
    }
}

impl From<TokenId> for TokenIdArg<'_> {
    fn from(id: TokenId) -> Self {
        Self::Id(id)
    }
}

impl<'a> From<&'a str> for TokenIdArg<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for TokenIdArg<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

// ---------------------------------------------------------------------------
// AccountIdArg
// ---------------------------------------------------------------------------

/// An account id, typed or textual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountIdArg<'a> {
    Id(AccountId),
    Text(&'a str),
}

impl AccountIdArg<'_> {
    pub(crate) fn resolve(self, name: &'static str) -> Result<AccountId, SdkError> {
        match self {
            Self::Id(id) => Ok(id),
            Self::Text(text) => AccountId::parse(non_blank(text, name)?)
                .map_err(|e| ParseError::AccountId(e).into()),
        }
    }
}

impl From<AccountId> for AccountIdArg<'_> {
    fn from(id: AccountId) -> Self {
        Self::Id(id)
    }
}

impl<'a> From<&'a str> for AccountIdArg<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for AccountIdArg<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

// ---------------------------------------------------------------------------
// KeyArg
// ---------------------------------------------------------------------------

/// A private key, as a key value or its textual encoding.
///
/// Text is decoded with [`PrivateKey::parse`]: raw 32-byte hex is taken as
/// Ed25519, DER-prefixed hex selects the algorithm from its prefix.
#[derive(Clone, PartialEq, Eq)]
pub enum KeyArg<'a> {
    Key(&'a PrivateKey),
    Owned(PrivateKey),
    Text(&'a str),
}

impl KeyArg<'_> {
    pub(crate) fn resolve(self, name: &'static str) -> Result<PrivateKey, SdkError> {
        match self {
            Self::Key(key) => Ok(key.clone()),
            Self::Owned(key) => Ok(key),
            Self::Text(text) => PrivateKey::parse(non_blank(text, name)?)
                .map_err(|e| ParseError::PrivateKey(e).into()),
        }
    }
}

// Key text never appears in debug output.
impl std::fmt::Debug for KeyArg<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Key(key) => f.debug_tuple("Key").field(key).finish(),
            Self::Owned(key) => f.debug_tuple("Owned").field(key).finish(),
            Self::Text(_) => f.write_str("Text(..)"),
        }
    }
}

impl<'a> From<&'a PrivateKey> for KeyArg<'a> {
    fn from(key: &'a PrivateKey) -> Self {
        Self::Key(key)
    }
}

impl From<PrivateKey> for KeyArg<'_> {
    fn from(key: PrivateKey) -> Self {
        Self::Owned(key)
    }
}

impl<'a> From<&'a str> for KeyArg<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for KeyArg<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

// ---------------------------------------------------------------------------
// AccountArg
// ---------------------------------------------------------------------------

/// An acting account: an [`Account`] or an (id, key) pair in any form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountArg<'a> {
    Account(&'a Account),
    Parts(AccountIdArg<'a>, KeyArg<'a>),
}

impl AccountArg<'_> {
    /// Resolves to the account id and signing key. The id is parsed first,
    /// so a bad id is reported even when the key is also bad.
    pub(crate) fn resolve(
        self,
        id_name: &'static str,
        key_name: &'static str,
    ) -> Result<(AccountId, PrivateKey), SdkError> {
        match self {
            Self::Account(account) => Ok((account.account_id(), account.private_key().clone())),
            Self::Parts(id, key) => Ok((id.resolve(id_name)?, key.resolve(key_name)?)),
        }
    }
}

impl<'a> From<&'a Account> for AccountArg<'a> {
    fn from(account: &'a Account) -> Self {
        Self::Account(account)
    }
}

impl<'a, I, K> From<(I, K)> for AccountArg<'a>
where
    I: Into<AccountIdArg<'a>>,
    K: Into<KeyArg<'a>>,
{
    fn from((id, key): (I, K)) -> Self {
        Self::Parts(id.into(), key.into())
    }
}

#[cfg(test)]
mod tests {
    use signer::KeyAlgorithm;

    use super::*;

    const KEY_HEX: &str = "302e020100300506032b657004220420db484b828e64b2d8f12ce3c0a0e93a0b8cce7af1bb8f39c97732394482538e10";

    #[test]
    fn token_text_is_trimmed_and_parsed() {
        let id = TokenIdArg::from(" 0.0.500 ").resolve("token_id").unwrap();
        assert_eq!(id, TokenId::new(0, 0, 500));
    }

    #[test]
    fn blank_text_is_missing_argument() {
        let err = TokenIdArg::from("   ").resolve("token_id").unwrap_err();
        assert!(matches!(err, SdkError::InvalidArgument("token_id")));

        let err = KeyArg::from("").resolve("supply_key").unwrap_err();
        assert!(matches!(err, SdkError::InvalidArgument("supply_key")));
    }

    #[test]
    fn malformed_text_is_parse_error() {
        let err = AccountIdArg::from("0.0.x").resolve("account_id").unwrap_err();
        assert!(matches!(err, SdkError::Parse(ParseError::AccountId(_))));

        let err = KeyArg::from("not-hex").resolve("key").unwrap_err();
        assert!(matches!(err, SdkError::Parse(ParseError::PrivateKey(_))));
    }

    #[test]
    fn account_forms_resolve_alike() {
        let key = PrivateKey::parse(KEY_HEX).unwrap();
        let account = Account::new(AccountId::new(0, 0, 1001), key.clone());

        let from_account = AccountArg::from(&account).resolve("id", "key").unwrap();
        let from_text = AccountArg::from(("0.0.1001", KEY_HEX))
            .resolve("id", "key")
            .unwrap();
        let from_typed = AccountArg::from((AccountId::new(0, 0, 1001), &key))
            .resolve("id", "key")
            .unwrap();

        assert_eq!(from_account, from_text);
        assert_eq!(from_account, from_typed);
    }

    #[test]
    fn account_id_checked_before_key() {
        let err = AccountArg::from(("bad", "also bad"))
            .resolve("treasury_account_id", "treasury_key")
            .unwrap_err();
        assert!(matches!(err, SdkError::Parse(ParseError::AccountId(_))));
    }

    #[test]
    fn key_text_is_not_debug_printed() {
        let debug = format!("{:?}", KeyArg::from(KEY_HEX));
        assert!(!debug.contains("db484b82"));

        let key = PrivateKey::generate(KeyAlgorithm::Ed25519);
        let hex = hex::encode(key.secret_bytes());
        assert!(!format!("{:?}", KeyArg::from(key)).contains(&hex));
    }
}
