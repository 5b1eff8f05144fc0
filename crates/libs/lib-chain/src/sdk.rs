//! # SDK Capability
//!
//! Trait seams for the NFT drop SDK. A session is opened per network with the
//! server's credential, the drop is resolved by address, and `claim_to` mints
//! tokens to a receiver.
//!
//! The web layer only depends on these traits, so tests swap in a fake and the
//! binary wires in [`GatewaySdk`](crate::gateway::GatewaySdk).

use async_trait::async_trait;
use lib_core::model::{EvmAddress, Network};
use serde::{Deserialize, Serialize};
use shared::NftMetadata;

use crate::error::ChainError;

/// Contract type reported by the SDK for NFT drops.
pub const NFT_DROP_CONTRACT_TYPE: &str = "nft-drop";

/// Entry point of the SDK.
#[async_trait]
pub trait DropSdk: Send + Sync {
    /// Open an authenticated session on `network`.
    async fn session(&self, network: Network) -> Result<Box<dyn SdkSession>, ChainError>;
}

#[async_trait]
pub trait SdkSession: Send + Sync {
    fn network(&self) -> Network;

    /// Resolve the NFT drop deployed at `contract`.
    async fn nft_drop(&self, contract: &EvmAddress) -> Result<Box<dyn NftDrop>, ChainError>;
}

#[async_trait]
pub trait NftDrop: Send + Sync {
    fn address(&self) -> &EvmAddress;

    /// Claim `quantity` tokens to `receiver`, one [`ClaimedToken`] per token.
    async fn claim_to(
        &self,
        receiver: &EvmAddress,
        quantity: u32,
    ) -> Result<Vec<ClaimedToken>, ChainError>;
}

/// Transaction that carried a claim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Receipt {
    pub transaction_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
}

/// One token produced by a claim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClaimedToken {
    pub id: String,
    pub receipt: Receipt,
    pub metadata: NftMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_claimed_token_wire_shape() {
        let token: ClaimedToken = serde_json::from_value(json!({
            "id": "42",
            "receipt": { "transaction_hash": "0xabc" },
            "metadata": { "id": "42", "uri": "ipfs://QmDrop/42", "name": "Drop #42" }
        }))
        .unwrap();

        assert_eq!(token.id, "42");
        assert_eq!(token.receipt.block_number, None);
        assert_eq!(token.metadata.display_name(), "Drop #42");
    }
}
