//! Supply changes: mint and burn.
//!
//! Both act on the token's treasury and are signed by the supply key. Each
//! returns the token's total supply as reported by the executor.

use ledger_core::TokenId;
use protocol::{ProtocolExecutor, TokenBurnRequest, TokenMintRequest};
use signer::PrivateKey;
use tracing::{debug, info};

use crate::params::{BurnParams, MintParams};
use crate::{FungibleTokenClient, SdkError};

impl<E: ProtocolExecutor> FungibleTokenClient<E> {
    /// Mints `amount` units into the treasury and returns the new total
    /// supply.
    pub async fn mint_token(
        &self,
        token_id: TokenId,
        supply_key: &PrivateKey,
        amount: u64,
    ) -> Result<u64, SdkError> {
        let request = TokenMintRequest::new(token_id, supply_key.clone(), amount);
        debug!(%token_id, amount, "submitting token mint");

        let result = self.inner.executor.execute_token_mint(request).await?;
        info!(
            %token_id,
            amount,
            total_supply = result.total_supply,
            transaction_id = %result.transaction_id,
            "tokens minted"
        );
        Ok(result.total_supply)
    }

    /// Mints from `params`; an unset supply key is the operator key.
    pub async fn mint(&self, params: MintParams<'_>) -> Result<u64, SdkError> {
        let token_id = params.token_id.resolve("token_id")?;
        let supply_key = match params.supply_key {
            Some(key) => key.resolve("supply_key")?,
            None => self.operator().private_key().clone(),
        };
        self.mint_token(token_id, &supply_key, params.amount).await
    }

    /// Burns `amount` units from the treasury and returns the new total
    /// supply.
    pub async fn burn_token(
        &self,
        token_id: TokenId,
        amount: u64,
        supply_key: &PrivateKey,
    ) -> Result<u64, SdkError> {
        let request = TokenBurnRequest::new(token_id, supply_key.clone(), amount);
        debug!(%token_id, amount, "submitting token burn");

        let result = self.inner.executor.execute_token_burn(request).await?;
        info!(
            %token_id,
            amount,
            total_supply = result.total_supply,
            transaction_id = %result.transaction_id,
            "tokens burned"
        );
        Ok(result.total_supply)
    }

    /// Burns from `params`; an unset supply key is the operator key.
    pub async fn burn(&self, params: BurnParams<'_>) -> Result<u64, SdkError> {
        let token_id = params.token_id.resolve("token_id")?;
        let supply_key = match params.supply_key {
            Some(key) => key.resolve("supply_key")?,
            None => self.operator().private_key().clone(),
        };
        self.burn_token(token_id, params.amount, &supply_key).await
    }
}
