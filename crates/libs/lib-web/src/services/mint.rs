//! # Mint Service
//!
//! Claims one token of the configured NFT drop to a receiver address.
//!
//! ## Flow
//!
//! ```text
//! parse receiver ──► session(network) ──► nft_drop(contract) ──► claim_to(receiver, 1) ──► first token's metadata
//!                    └──────────────── bounded by MINT_TIMEOUT_SECS ────────────────┘
//! ```
//!
//! A new SDK session is opened for every mint. Nothing is retried: a claim that
//! timed out may still land on chain, so the caller is told to check the wallet.
//!
//! ## Error Handling
//!
//! - `AppError::InvalidInput` - receiver address fails EIP-55 parsing, the SDK is not called
//! - `AppError::SupplyExhausted` / `AppError::ClaimRejected` - the drop refused the claim
//! - `AppError::Timeout` - the sequence exceeded the configured budget
//! - `AppError::Sdk` - any other SDK, network or contract failure, or an unusable result

use lib_chain::{ChainError, ClaimedToken, DropSdk};
use lib_core::{AppError, EvmAddress, MintConfig, Result};
use shared::NftMetadata;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Tokens claimed per mint request.
pub const CLAIM_QUANTITY: u32 = 1;

pub struct MintService {
    config: Arc<MintConfig>,
    sdk: Arc<dyn DropSdk>,
}

impl MintService {
    pub fn new(config: Arc<MintConfig>, sdk: Arc<dyn DropSdk>) -> Self {
        Self { config, sdk }
    }

    /// Parse and validate a receiver address.
    pub fn parse_receiver(raw: &str) -> Result<EvmAddress> {
        raw.parse::<EvmAddress>()
            .map_err(|e| AppError::InvalidInput(format!("Invalid address: {}", e)))
    }

    /// Mint one token to `raw_address` and return its metadata.
    #[instrument(skip(self), fields(network = %self.config.network))]
    pub async fn mint(&self, raw_address: &str) -> Result<NftMetadata> {
        let receiver = Self::parse_receiver(raw_address)?;

        info!(
            "[MINT] Claiming {} token from {} to {}",
            CLAIM_QUANTITY, self.config.contract_address, receiver
        );

        let budget = self.config.mint_timeout;
        let tokens = tokio::time::timeout(budget, self.claim(&receiver))
            .await
            .map_err(|_| {
                warn!("[MINT] Claim to {} exceeded {}s", receiver, budget.as_secs_f64());
                AppError::Timeout(format!(
                    "claim to {} did not finish within {}s",
                    receiver,
                    budget.as_secs_f64()
                ))
            })??;

        let metadata = first_metadata(tokens)?;
        info!(
            "[MINT] Minted token {} ({}) to {}",
            metadata.id,
            metadata.display_name(),
            receiver
        );

        Ok(metadata)
    }

    async fn claim(&self, receiver: &EvmAddress) -> std::result::Result<Vec<ClaimedToken>, ChainError> {
        let session = self.sdk.session(self.config.network).await?;
        debug!("[MINT] Session open on {}", session.network());

        let drop = session.nft_drop(&self.config.contract_address).await?;
        drop.claim_to(receiver, CLAIM_QUANTITY).await
    }
}

fn first_metadata(tokens: Vec<ClaimedToken>) -> Result<NftMetadata> {
    let token = tokens
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Sdk("claim returned no tokens".to_string()))?;

    if !token.metadata.has_identity() {
        return Err(AppError::Sdk(format!(
            "claimed token in tx {} has no metadata id",
            token.receipt.transaction_hash
        )));
    }

    Ok(token.metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lib_chain::memory::MemoryDrop;
    use lib_chain::{NftDrop, Receipt, SdkSession};
    use lib_core::{Credential, Network};
    use std::time::Duration;

    const CONTRACT: &str = "0xBB1B8021e31Ac8A34ba5963e48f65d6a4B43aa42";
    const RECEIVER: &str = "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB";

    fn config(mint_timeout: Duration) -> Arc<MintConfig> {
        Arc::new(MintConfig {
            private_key: Credential::new("test-key"),
            network: Network::Mumbai,
            contract_address: CONTRACT.parse().unwrap(),
            gateway_url: "http://127.0.0.1:9".to_string(),
            mint_timeout,
            gateway_timeout: Duration::from_secs(5),
        })
    }

    /// Drop that returns a fixed claim result.
    #[derive(Clone)]
    struct CannedDrop {
        address: EvmAddress,
        tokens: Vec<ClaimedToken>,
    }

    impl CannedDrop {
        fn new(tokens: Vec<ClaimedToken>) -> Self {
            Self {
                address: CONTRACT.parse().unwrap(),
                tokens,
            }
        }
    }

    #[async_trait]
    impl DropSdk for CannedDrop {
        async fn session(&self, _: Network) -> std::result::Result<Box<dyn SdkSession>, ChainError> {
            Ok(Box::new(self.clone()))
        }
    }

    #[async_trait]
    impl SdkSession for CannedDrop {
        fn network(&self) -> Network {
            Network::Mumbai
        }

        async fn nft_drop(
            &self,
            _: &EvmAddress,
        ) -> std::result::Result<Box<dyn NftDrop>, ChainError> {
            Ok(Box::new(self.clone()))
        }
    }

    #[async_trait]
    impl NftDrop for CannedDrop {
        fn address(&self) -> &EvmAddress {
            &self.address
        }

        async fn claim_to(
            &self,
            _: &EvmAddress,
            _: u32,
        ) -> std::result::Result<Vec<ClaimedToken>, ChainError> {
            Ok(self.tokens.clone())
        }
    }

    #[tokio::test]
    async fn test_mint_returns_first_token() {
        let drop = MemoryDrop::new(Network::Mumbai, CONTRACT.parse().unwrap(), 5);
        let service = MintService::new(config(Duration::from_secs(5)), Arc::new(drop.clone()));

        let metadata = service.mint(RECEIVER).await.unwrap();

        assert_eq!(metadata.id, "0");
        assert_eq!(drop.sessions(), 1);
        assert_eq!(drop.claims(), vec![(RECEIVER.parse::<EvmAddress>().unwrap(), CLAIM_QUANTITY)]);
    }

    #[tokio::test]
    async fn test_session_per_mint() {
        let drop = MemoryDrop::new(Network::Mumbai, CONTRACT.parse().unwrap(), 5);
        let service = MintService::new(config(Duration::from_secs(5)), Arc::new(drop.clone()));

        service.mint(RECEIVER).await.unwrap();
        let second = service.mint(RECEIVER).await.unwrap();

        assert_eq!(second.id, "1");
        assert_eq!(drop.sessions(), 2);
    }

    #[tokio::test]
    async fn test_invalid_receiver_skips_sdk() {
        let drop = MemoryDrop::new(Network::Mumbai, CONTRACT.parse().unwrap(), 5);
        let service = MintService::new(config(Duration::from_secs(5)), Arc::new(drop.clone()));

        let err = service.mint("0x1234").await.unwrap_err();

        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(drop.sessions(), 0);
    }

    #[tokio::test]
    async fn test_timeout() {
        let drop = MemoryDrop::new(Network::Mumbai, CONTRACT.parse().unwrap(), 5)
            .with_delay(Duration::from_secs(5));
        let service = MintService::new(config(Duration::from_millis(50)), Arc::new(drop));

        let err = service.mint(RECEIVER).await.unwrap_err();

        assert!(matches!(err, AppError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_empty_claim_is_sdk_error() {
        let service = MintService::new(config(Duration::from_secs(5)), Arc::new(CannedDrop::new(vec![])));

        let err = service.mint(RECEIVER).await.unwrap_err();

        assert!(matches!(err, AppError::Sdk(msg) if msg.contains("no tokens")));
    }

    #[tokio::test]
    async fn test_token_without_id_is_sdk_error() {
        let token = ClaimedToken {
            id: "3".to_string(),
            receipt: Receipt {
                transaction_hash: "0xabc".to_string(),
                block_number: None,
            },
            metadata: NftMetadata::new("", "ipfs://QmDrop/3"),
        };
        let service = MintService::new(config(Duration::from_secs(5)), Arc::new(CannedDrop::new(vec![token])));

        let err = service.mint(RECEIVER).await.unwrap_err();

        assert!(matches!(err, AppError::Sdk(msg) if msg.contains("0xabc")));
    }
}
