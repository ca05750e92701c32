//! Token creation.

use ledger_core::{AccountId, TokenId};
use protocol::{ProtocolExecutor, TokenCreateRequest};
use signer::PrivateKey;
use tracing::{debug, info};

use super::require_text;
use crate::params::CreateTokenParams;
use crate::{FungibleTokenClient, SdkError};

impl<E: ProtocolExecutor> FungibleTokenClient<E> {
    /// Creates a fungible token with zero initial supply held by the
    /// treasury, and returns its id.
    ///
    /// # Errors
    ///
    /// [`SdkError::InvalidArgument`] if `name` or `symbol` is blank;
    /// [`SdkError::Execution`] if the executor fails.
    pub async fn create_token(
        &self,
        name: &str,
        symbol: &str,
        treasury_account_id: AccountId,
        treasury_key: &PrivateKey,
        supply_key: &PrivateKey,
    ) -> Result<TokenId, SdkError> {
        require_text(name, "name")?;
        require_text(symbol, "symbol")?;

        let request = TokenCreateRequest::new(
            name,
            symbol,
            treasury_account_id,
            treasury_key.clone(),
            supply_key.clone(),
        );
        debug!(name, symbol, treasury = %treasury_account_id, "submitting token create");

        let result = self.inner.executor.execute_token_create(request).await?;
        info!(
            token_id = %result.token_id,
            transaction_id = %result.transaction_id,
            "token created"
        );
        Ok(result.token_id)
    }

    /// Creates a token from `params`.
    ///
    /// An unset treasury is the operator account; an unset supply key is
    /// the operator key, even when a treasury is given.
    pub async fn create(&self, params: CreateTokenParams<'_>) -> Result<TokenId, SdkError> {
        let CreateTokenParams {
            name,
            symbol,
            treasury,
            supply_key,
        } = params;
        let operator = self.operator();

        let (treasury_account_id, treasury_key) = match treasury {
            Some(treasury) => treasury.resolve("treasury_account_id", "treasury_key")?,
            None => (operator.account_id(), operator.private_key().clone()),
        };
        let supply_key = match supply_key {
            Some(key) => key.resolve("supply_key")?,
            None => operator.private_key().clone(),
        };

        self.create_token(
            name,
            symbol,
            treasury_account_id,
            &treasury_key,
            &supply_key,
        )
        .await
    }
}
