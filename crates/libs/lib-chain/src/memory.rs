//! # In-Memory Drop
//!
//! A [`DropSdk`] that mints from a fixed supply held in process memory. It
//! records every session and claim so tests can assert on how the SDK was
//! driven, and can be told to stall or fail.

use async_trait::async_trait;
use lib_core::model::{EvmAddress, Network};
use shared::NftMetadata;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::error::ChainError;
use crate::sdk::{ClaimedToken, DropSdk, NftDrop, Receipt, SdkSession};

#[derive(Debug, Default)]
struct Ledger {
    sessions: usize,
    claims: Vec<(EvmAddress, u32)>,
    minted: u64,
}

struct Inner {
    network: Network,
    contract: EvmAddress,
    supply: u64,
    delay: Option<Duration>,
    failure: Option<ChainError>,
    ledger: Mutex<Ledger>,
}

impl Inner {
    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[derive(Clone)]
pub struct MemoryDrop {
    inner: Arc<Inner>,
}

impl MemoryDrop {
    pub fn new(network: Network, contract: EvmAddress, supply: u64) -> Self {
        Self {
            inner: Arc::new(Inner {
                network,
                contract,
                supply,
                delay: None,
                failure: None,
                ledger: Mutex::new(Ledger::default()),
            }),
        }
    }

    /// Sleep this long inside every claim.
    pub fn with_delay(self, delay: Duration) -> Self {
        self.rebuild(|inner| inner.delay = Some(delay))
    }

    /// Fail every claim with `err`.
    pub fn failing_with(self, err: ChainError) -> Self {
        self.rebuild(|inner| inner.failure = Some(err))
    }

    fn rebuild(self, edit: impl FnOnce(&mut Inner)) -> Self {
        let mut inner = Inner {
            network: self.inner.network,
            contract: self.inner.contract,
            supply: self.inner.supply,
            delay: self.inner.delay,
            failure: self.inner.failure.clone(),
            ledger: Mutex::new(Ledger::default()),
        };
        edit(&mut inner);
        Self {
            inner: Arc::new(inner),
        }
    }

    pub fn sessions(&self) -> usize {
        self.inner.ledger().sessions
    }

    /// Every `claim_to` call in order, including failed ones.
    pub fn claims(&self) -> Vec<(EvmAddress, u32)> {
        self.inner.ledger().claims.clone()
    }

    pub fn minted(&self) -> u64 {
        self.inner.ledger().minted
    }
}

#[async_trait]
impl DropSdk for MemoryDrop {
    async fn session(&self, network: Network) -> Result<Box<dyn SdkSession>, ChainError> {
        self.inner.ledger().sessions += 1;

        if network != self.inner.network {
            return Err(ChainError::ChainMismatch {
                network: network.to_string(),
                expected: network.chain_id(),
                found: self.inner.network.chain_id(),
            });
        }

        Ok(Box::new(self.clone()))
    }
}

#[async_trait]
impl SdkSession for MemoryDrop {
    fn network(&self) -> Network {
        self.inner.network
    }

    async fn nft_drop(&self, contract: &EvmAddress) -> Result<Box<dyn NftDrop>, ChainError> {
        if *contract != self.inner.contract {
            return Err(ChainError::ContractNotFound(contract.to_string()));
        }
        Ok(Box::new(self.clone()))
    }
}

#[async_trait]
impl NftDrop for MemoryDrop {
    fn address(&self) -> &EvmAddress {
        &self.inner.contract
    }

    async fn claim_to(
        &self,
        receiver: &EvmAddress,
        quantity: u32,
    ) -> Result<Vec<ClaimedToken>, ChainError> {
        self.inner.ledger().claims.push((*receiver, quantity));

        if let Some(delay) = self.inner.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = &self.inner.failure {
            return Err(err.clone());
        }

        let mut ledger = self.inner.ledger();
        if ledger.minted + u64::from(quantity) > self.inner.supply {
            return Err(ChainError::SupplyExhausted(format!(
                "{} of {} tokens claimed",
                ledger.minted, self.inner.supply
            )));
        }

        let first = ledger.minted;
        ledger.minted += u64::from(quantity);

        Ok((first..ledger.minted)
            .map(|id| {
                let id = id.to_string();
                let mut metadata =
                    NftMetadata::new(id.clone(), format!("ipfs://memory/{}", id));
                metadata.name = Some(format!("Memory Drop #{}", id));
                ClaimedToken {
                    id,
                    receipt: Receipt {
                        transaction_hash: format!("0x{:064x}", first + 1),
                        block_number: None,
                    },
                    metadata,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract() -> EvmAddress {
        "0xBB1B8021e31Ac8A34ba5963e48f65d6a4B43aa42".parse().unwrap()
    }

    fn receiver() -> EvmAddress {
        "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359".parse().unwrap()
    }

    #[tokio::test]
    async fn test_mints_until_supply_runs_out() {
        let sdk = MemoryDrop::new(Network::Mumbai, contract(), 2);
        let session = sdk.session(Network::Mumbai).await.unwrap();
        let drop = session.nft_drop(&contract()).await.unwrap();

        let tokens = drop.claim_to(&receiver(), 2).await.unwrap();
        assert_eq!(
            tokens.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            ["0", "1"]
        );

        let result = drop.claim_to(&receiver(), 1).await;
        assert!(matches!(result, Err(ChainError::SupplyExhausted(_))));
        assert_eq!(sdk.minted(), 2);
        assert_eq!(sdk.claims().len(), 2);
    }

    #[tokio::test]
    async fn test_wrong_network_and_contract() {
        let sdk = MemoryDrop::new(Network::Mumbai, contract(), 1);

        assert!(sdk.session(Network::Polygon).await.is_err());

        let session = sdk.session(Network::Mumbai).await.unwrap();
        assert!(matches!(
            session.nft_drop(&receiver()).await,
            Err(ChainError::ContractNotFound(_))
        ));
        assert_eq!(sdk.sessions(), 2);
    }

    #[tokio::test]
    async fn test_configured_failure() {
        let sdk = MemoryDrop::new(Network::Mumbai, contract(), 1)
            .failing_with(ChainError::ClaimRejected("not on allowlist".to_string()));

        let drop = sdk.nft_drop(&contract()).await.unwrap();
        let result = drop.claim_to(&receiver(), 1).await;

        assert_eq!(
            result.unwrap_err(),
            ChainError::ClaimRejected("not on allowlist".to_string())
        );
        assert_eq!(sdk.minted(), 0);
    }
}
