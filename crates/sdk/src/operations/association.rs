//! Token association and dissociation.
//!
//! An account must be associated with a token before it can hold a balance
//! of it. Both directions accept a list of tokens that is submitted as a
//! single transaction; an empty list is rejected before anything is sent.

use ledger_core::{AccountId, TokenId};
use protocol::{ProtocolExecutor, TokenAssociateRequest, TokenDissociateRequest};
use signer::PrivateKey;
use tracing::{debug, info};

use crate::args::TokenIdArg;
use crate::params::{AssociateParams, DissociateParams};
use crate::{FungibleTokenClient, SdkError};

/// Rejects an empty list, then parses every entry.
fn resolve_token_ids(token_ids: Vec<TokenIdArg<'_>>) -> Result<Vec<TokenId>, SdkError> {
    if token_ids.is_empty() {
        return Err(SdkError::InvalidArgument("token_ids"));
    }
    token_ids
        .into_iter()
        .map(|id| id.resolve("token_ids"))
        .collect()
}

impl<E: ProtocolExecutor> FungibleTokenClient<E> {
    // -----------------------------------------------------------------------
    // associate
    // -----------------------------------------------------------------------

    /// Associates every token in `token_ids` with the account.
    ///
    /// # Errors
    ///
    /// [`SdkError::InvalidArgument`] if `token_ids` is empty;
    /// [`SdkError::Execution`] if the executor fails.
    pub async fn associate_tokens(
        &self,
        token_ids: &[TokenId],
        account_id: AccountId,
        account_key: &PrivateKey,
    ) -> Result<(), SdkError> {
        if token_ids.is_empty() {
            return Err(SdkError::InvalidArgument("token_ids"));
        }

        let request = TokenAssociateRequest::new(token_ids.to_vec(), account_id, account_key.clone());
        debug!(%account_id, tokens = token_ids.len(), "submitting token associate");

        let result = self.inner.executor.execute_token_associate(request).await?;
        info!(
            %account_id,
            tokens = token_ids.len(),
            transaction_id = %result.transaction_id,
            "tokens associated"
        );
        Ok(())
    }

    /// Associates a single token with the account.
    pub async fn associate_token(
        &self,
        token_id: TokenId,
        account_id: AccountId,
        account_key: &PrivateKey,
    ) -> Result<(), SdkError> {
        self.associate_tokens(&[token_id], account_id, account_key)
            .await
    }

    pub async fn associate(&self, params: AssociateParams<'_>) -> Result<(), SdkError> {
        let token_ids = resolve_token_ids(params.token_ids)?;
        let (account_id, account_key) = params.account.resolve("account_id", "account_key")?;
        self.associate_tokens(&token_ids, account_id, &account_key)
            .await
    }

    // -----------------------------------------------------------------------
    // dissociate
    // -----------------------------------------------------------------------

    /// Dissociates every token in `token_ids` from the account. The account
    /// must hold a zero balance of each and must not be its treasury.
    ///
    /// # Errors
    ///
    /// [`SdkError::InvalidArgument`] if `token_ids` is empty;
    /// [`SdkError::Execution`] if the executor fails.
    pub async fn dissociate_tokens(
        &self,
        token_ids: &[TokenId],
        account_id: AccountId,
        account_key: &PrivateKey,
    ) -> Result<(), SdkError> {
        if token_ids.is_empty() {
            return Err(SdkError::InvalidArgument("token_ids"));
        }

        let request =
            TokenDissociateRequest::new(token_ids.to_vec(), account_id, account_key.clone());
        debug!(%account_id, tokens = token_ids.len(), "submitting token dissociate");

        let result = self.inner.executor.execute_token_dissociate(request).await?;
        info!(
            %account_id,
            tokens = token_ids.len(),
            transaction_id = %result.transaction_id,
            "tokens dissociated"
        );
        Ok(())
    }

    /// Dissociates a single token from the account.
    pub async fn dissociate_token(
        &self,
        token_id: TokenId,
        account_id: AccountId,
        account_key: &PrivateKey,
    ) -> Result<(), SdkError> {
        self.dissociate_tokens(&[token_id], account_id, account_key)
            .await
    }

    pub async fn dissociate(&self, params: DissociateParams<'_>) -> Result<(), SdkError> {
        let token_ids = resolve_token_ids(params.token_ids)?;
        let (account_id, account_key) = params.account.resolve("account_id", "account_key")?;
        self.dissociate_tokens(&token_ids, account_id, &account_key)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_invalid_argument() {
        let err = resolve_token_ids(Vec::new()).unwrap_err();
        assert!(matches!(err, SdkError::InvalidArgument("token_ids")));
    }

    #[test]
    fn every_entry_is_parsed() {
        let ids = resolve_token_ids(vec!["0.0.10".into(), TokenId::new(0, 0, 11).into()]).unwrap();
        assert_eq!(ids, vec![TokenId::new(0, 0, 10), TokenId::new(0, 0, 11)]);

        let err = resolve_token_ids(vec!["0.0.10".into(), "0.0".into()]).unwrap_err();
        assert!(matches!(err, SdkError::Parse(_)));
    }
}
