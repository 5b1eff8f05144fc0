//! # Chain Library
//!
//! The external NFT SDK as seen by the mint backend.
//!
//! ```text
//! DropSdk ──session(network)──► SdkSession ──nft_drop(contract)──► NftDrop ──claim_to(addr, n)──► [ClaimedToken]
//! ```
//!
//! [`gateway::GatewaySdk`] reaches the SDK over HTTP. With the `test-utils`
//! feature, [`memory::MemoryDrop`] provides an in-process drop with a fixed supply.

pub mod error;
pub mod gateway;
pub mod sdk;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

// Re-export commonly used types from root for convenience
pub use error::ChainError;
pub use gateway::{GatewaySdk, GatewaySdkBuilder};
pub use lib_core::model::{EvmAddress, Network};
pub use sdk::{ClaimedToken, DropSdk, NftDrop, Receipt, SdkSession, NFT_DROP_CONTRACT_TYPE};
