//! Token transfer between two associated accounts.

use ledger_core::{AccountId, TokenId};
use protocol::{ProtocolExecutor, TokenTransferRequest};
use signer::PrivateKey;
use tracing::{debug, info};

use crate::params::TransferParams;
use crate::{FungibleTokenClient, SdkError};

impl<E: ProtocolExecutor> FungibleTokenClient<E> {
    /// Moves `amount` units of `token_id` from one account to another,
    /// signed by the sender.
    pub async fn transfer_token(
        &self,
        token_id: TokenId,
        from_account_id: AccountId,
        from_account_key: &PrivateKey,
        to_account_id: AccountId,
        amount: u64,
    ) -> Result<(), SdkError> {
        let request = TokenTransferRequest::new(
            token_id,
            from_account_id,
            from_account_key.clone(),
            to_account_id,
            amount,
        );
        debug!(%token_id, from = %from_account_id, to = %to_account_id, amount, "submitting token transfer");

        let result = self.inner.executor.execute_token_transfer(request).await?;
        info!(
            %token_id,
            from = %from_account_id,
            to = %to_account_id,
            amount,
            transaction_id = %result.transaction_id,
            "tokens transferred"
        );
        Ok(())
    }

    /// Transfers from `params`; an unset sender is the operator account.
    pub async fn transfer(&self, params: TransferParams<'_>) -> Result<(), SdkError> {
        let token_id = params.token_id.resolve("token_id")?;
        let to_account_id = params.to_account_id.resolve("to_account_id")?;
        let (from_account_id, from_account_key) = match params.from {
            Some(from) => from.resolve("from_account_id", "from_account_key")?,
            None => {
                let operator = self.operator();
                (operator.account_id(), operator.private_key().clone())
            }
        };

        self.transfer_token(
            token_id,
            from_account_id,
            &from_account_key,
            to_account_id,
            params.amount,
        )
        .await
    }
}
