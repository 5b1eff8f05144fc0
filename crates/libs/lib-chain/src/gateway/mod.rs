//! # SDK Gateway Client
//!
//! [`DropSdk`] over the HTTP gateway that fronts the NFT SDK.
//!
//! ## Endpoints
//!
//! | Step      | Request                                                        | Reply                    |
//! |-----------|----------------------------------------------------------------|--------------------------|
//! | session   | `GET /v1/networks/{network}`                                   | `{chain_id}`             |
//! | resolve   | `GET /v1/{network}/contracts/{contract}`                       | `{contract_type}`        |
//! | claim     | `POST /v1/{network}/contracts/{contract}/nft-drop/claim-to`    | `{result: [token, ..]}`  |
//!
//! Every request carries `Authorization: Bearer <credential>`. Error replies use
//! `{"error": {"code", "message"}}`, see [`classify_failure`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use lib_chain::{DropSdk, GatewaySdk};
//! use lib_core::{Credential, Network};
//!
//! # async fn example() -> Result<(), lib_chain::ChainError> {
//! let sdk = GatewaySdk::builder("http://127.0.0.1:8545", Credential::new("0x...")).build()?;
//! let session = sdk.session(Network::Mumbai).await?;
//! let drop = session
//!     .nft_drop(&"0xBB1B8021e31Ac8A34ba5963e48f65d6a4B43aa42".parse().unwrap())
//!     .await?;
//! # let _ = drop;
//! # Ok(())
//! # }
//! ```

mod types;

use async_trait::async_trait;
use lib_core::config::{Credential, MintConfig};
use lib_core::model::{EvmAddress, Network};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::error::ChainError;
use crate::sdk::{ClaimedToken, DropSdk, NftDrop, SdkSession, NFT_DROP_CONTRACT_TYPE};
use types::{ClaimRequest, ClaimResponse, ContractInfo, ErrorEnvelope, NetworkInfo};

pub const DEFAULT_GATEWAY_TIMEOUT: Duration = Duration::from_secs(60);

/// Error code the gateway uses when the drop has nothing left to claim.
pub const CODE_SUPPLY_EXHAUSTED: &str = "SUPPLY_EXHAUSTED";
/// Error code the gateway uses when claim conditions refuse the receiver.
pub const CODE_CLAIM_CONDITION_NOT_MET: &str = "CLAIM_CONDITION_NOT_MET";

// region: --- Client

struct GatewayClient {
    http: Client,
    base_url: String,
    credential: Credential,
}

impl GatewayClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ChainError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("SDK gateway request: GET {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.credential.expose())
            .send()
            .await?;

        decode(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ChainError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("SDK gateway request: POST {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.credential.expose())
            .json(body)
            .send()
            .await?;

        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ChainError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ChainError::MalformedResponse(e.to_string()));
    }

    let body = response.text().await.unwrap_or_default();
    Err(classify_failure(status.as_u16(), &body))
}

/// Map a non-success gateway reply to a [`ChainError`].
pub fn classify_failure(status: u16, body: &str) -> ChainError {
    if status == 401 || status == 403 {
        return ChainError::Unauthorized;
    }

    let (code, message) = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => (envelope.error.code, envelope.error.message),
        Err(_) => (String::new(), body.trim().to_string()),
    };

    match code.as_str() {
        CODE_SUPPLY_EXHAUSTED => ChainError::SupplyExhausted(message),
        CODE_CLAIM_CONDITION_NOT_MET => ChainError::ClaimRejected(message),
        _ => ChainError::Rejected { status, message },
    }
}

// endregion: --- Client

// region: --- Builder

pub struct GatewaySdkBuilder {
    base_url: String,
    credential: Credential,
    timeout: Duration,
}

impl GatewaySdkBuilder {
    /// Per-request timeout of the HTTP client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<GatewaySdk, ChainError> {
        let http = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ChainError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(GatewaySdk {
            client: Arc::new(GatewayClient {
                http,
                base_url: self.base_url.trim_end_matches('/').to_string(),
                credential: self.credential,
            }),
        })
    }
}

// endregion: --- Builder

// region: --- SDK

/// HTTP implementation of [`DropSdk`]. Cheap to clone.
#[derive(Clone)]
pub struct GatewaySdk {
    client: Arc<GatewayClient>,
}

impl GatewaySdk {
    pub fn builder(base_url: impl Into<String>, credential: Credential) -> GatewaySdkBuilder {
        GatewaySdkBuilder {
            base_url: base_url.into(),
            credential,
            timeout: DEFAULT_GATEWAY_TIMEOUT,
        }
    }

    pub fn from_config(config: &MintConfig) -> Result<Self, ChainError> {
        Self::builder(config.gateway_url.clone(), config.private_key.clone())
            .timeout(config.gateway_timeout)
            .build()
    }

    pub fn base_url(&self) -> &str {
        &self.client.base_url
    }
}

#[async_trait]
impl DropSdk for GatewaySdk {
    #[instrument(skip_all, fields(network = %network))]
    async fn session(&self, network: Network) -> Result<Box<dyn SdkSession>, ChainError> {
        let info: NetworkInfo = self
            .client
            .get(&format!("/v1/networks/{}", network))
            .await?;

        if info.chain_id != network.chain_id() {
            return Err(ChainError::ChainMismatch {
                network: network.to_string(),
                expected: network.chain_id(),
                found: info.chain_id,
            });
        }

        debug!("SDK session opened on {} (chain {})", network, info.chain_id);

        Ok(Box::new(GatewaySession {
            client: Arc::clone(&self.client),
            network,
        }))
    }
}

struct GatewaySession {
    client: Arc<GatewayClient>,
    network: Network,
}

#[async_trait]
impl SdkSession for GatewaySession {
    fn network(&self) -> Network {
        self.network
    }

    #[instrument(skip_all, fields(contract = %contract))]
    async fn nft_drop(&self, contract: &EvmAddress) -> Result<Box<dyn NftDrop>, ChainError> {
        let info: ContractInfo = self
            .client
            .get(&format!("/v1/{}/contracts/{}", self.network, contract))
            .await
            .map_err(|e| match e {
                ChainError::Rejected { status: 404, .. } => {
                    ChainError::ContractNotFound(contract.to_string())
                }
                other => other,
            })?;

        if info.contract_type != NFT_DROP_CONTRACT_TYPE {
            return Err(ChainError::WrongContractType {
                expected: NFT_DROP_CONTRACT_TYPE.to_string(),
                found: info.contract_type,
            });
        }

        Ok(Box::new(GatewayNftDrop {
            client: Arc::clone(&self.client),
            network: self.network,
            address: *contract,
        }))
    }
}

struct GatewayNftDrop {
    client: Arc<GatewayClient>,
    network: Network,
    address: EvmAddress,
}

#[async_trait]
impl NftDrop for GatewayNftDrop {
    fn address(&self) -> &EvmAddress {
        &self.address
    }

    #[instrument(skip_all, fields(receiver = %receiver, quantity = quantity))]
    async fn claim_to(
        &self,
        receiver: &EvmAddress,
        quantity: u32,
    ) -> Result<Vec<ClaimedToken>, ChainError> {
        let path = format!(
            "/v1/{}/contracts/{}/nft-drop/claim-to",
            self.network, self.address
        );
        let request = ClaimRequest {
            receiver: receiver.to_string(),
            quantity,
        };

        let response: ClaimResponse = self.client.post(&path, &request).await?;

        info!(
            "[MINT] Claimed {} token(s) to {} on {}",
            response.result.len(),
            receiver,
            self.network
        );

        Ok(response.result)
    }
}

// endregion: --- SDK
