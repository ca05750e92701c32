//! Token console: a full fungible token lifecycle against an in-memory
//! ledger.
//!
//! Loads the operator from the environment, opens a second account, then
//! runs create, associate, mint, transfer, burn and dissociate through the
//! SDK, logging every step.
//!
//! # Configuration
//!
//! Set `HIERO_ACCOUNT_ID` and `HIERO_PRIVATE_KEY` (and optionally
//! `HIERO_NETWORK`) to use a specific operator. If they are unset, a fresh
//! operator key is generated on each run.
//!
//! ```bash
//! export HIERO_ACCOUNT_ID=0.0.2
//! export HIERO_PRIVATE_KEY=302e020100300506032b657004220420...
//! RUST_LOG=info cargo run --release -p token-console
//! ```

use tracing_subscriber::EnvFilter;

use config::{ConfigError, NetworkConfig, OperatorConfig};
use ledger_core::{AccountId, TokenId};
use protocol::InMemoryLedger;
use sdk::{
    AssociateParams, BurnParams, CreateTokenParams, DissociateParams, FungibleTokenClient,
    MintParams, SdkError, TransferParams,
};
use signer::{Account, KeyAlgorithm, PrivateKey};

/// Operator account used when none is configured.
const DEFAULT_OPERATOR: AccountId = AccountId::new(0, 0, 2);

const INITIAL_SUPPLY: u64 = 1_000;
const TRANSFER_AMOUNT: u64 = 250;
const BURN_AMOUNT: u64 = 400;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("token-console starting");

    // -----------------------------------------------------------------------
    // Operator and ledger setup
    // -----------------------------------------------------------------------

    let config = resolve_operator();
    let network = config.network.network;
    tracing::info!(
        %network,
        operator = %config.operator.account_id().to_string_with_checksum(network),
        algorithm = %config.operator.private_key().algorithm(),
        "operator ready"
    );

    let ledger = InMemoryLedger::new(&config.operator);
    let holder = ledger.create_account(PrivateKey::generate(KeyAlgorithm::EcdsaSecp256k1));
    tracing::info!(holder = %holder.account_id(), "holder account opened");

    let client = FungibleTokenClient::new(ledger, config.operator);

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    match run_lifecycle(&client, &holder).await {
        Ok(token) => {
            let ledger = client.executor();
            tracing::info!(
                token = %token.to_string_with_checksum(network),
                total_supply = ledger.total_supply(token).unwrap_or(0),
                treasury_balance = ledger.balance(client.operator().account_id(), token).unwrap_or(0),
                "lifecycle complete"
            );
        }
        Err(e) => {
            tracing::error!(%e, "lifecycle failed");
            std::process::exit(1);
        }
    }

    tracing::info!("token-console stopped");
}

/// Runs create, associate, mint, transfer, burn and dissociate in order and
/// returns the created token.
async fn run_lifecycle(
    client: &FungibleTokenClient<InMemoryLedger>,
    holder: &Account,
) -> Result<TokenId, SdkError> {
    let token = client
        .create(CreateTokenParams::new("Console Gold", "CGLD"))
        .await?;

    client
        .associate(AssociateParams::single(token, holder))
        .await?;

    let supply = client.mint(MintParams::new(token, INITIAL_SUPPLY)).await?;
    tracing::info!(supply, "supply after mint");

    client
        .transfer(TransferParams::new(
            token,
            holder.account_id(),
            TRANSFER_AMOUNT,
        ))
        .await?;
    client
        .transfer(
            TransferParams::new(token, client.operator().account_id(), TRANSFER_AMOUNT)
                .with_from(holder),
        )
        .await?;

    let supply = client.burn(BurnParams::new(token, BURN_AMOUNT)).await?;
    tracing::info!(supply, "supply after burn");

    client
        .dissociate(DissociateParams::single(token, holder))
        .await?;

    Ok(token)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load the operator from the environment, or generate one if unset.
fn resolve_operator() -> OperatorConfig {
    match OperatorConfig::from_env() {
        Ok(config) => config,
        Err(ConfigError::MissingVar(var)) => {
            tracing::warn!(missing = var, "operator not configured, generating a local one");
            OperatorConfig::new(
                NetworkConfig::LOCAL,
                Account::new(
                    DEFAULT_OPERATOR,
                    PrivateKey::generate(KeyAlgorithm::Ed25519),
                ),
            )
        }
        Err(e) => panic!("invalid operator configuration: {e}"),
    }
}
