//! Mint API client
//!
//! `POST /api/mint-nft` from the browser. [`MintApi`] is the seam the mint flow
//! is written against, [`HttpMintApi`] the gloo-net implementation.

use async_trait::async_trait;
use gloo_net::http::Request;
use shared::{ErrorResponse, MintRequest, NftMetadata};
use thiserror::Error;

use crate::utils::constants::MINT_API_BASE;

pub const MINT_PATH: &str = "/api/mint-nft";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MintClientError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server answered {status}: {message}")]
    Status { status: u16, message: String },

    /// 2xx whose body is not NFT metadata.
    #[error("unreadable response: {0}")]
    Decode(String),
}

#[async_trait(?Send)]
pub trait MintApi {
    async fn mint(&self, address: &str) -> Result<NftMetadata, MintClientError>;
}

pub struct HttpMintApi {
    base: String,
}

impl HttpMintApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Client for the compiled-in `MINT_API_BASE` (empty means same origin).
    pub fn from_build_env() -> Self {
        Self::new(MINT_API_BASE)
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base.trim().trim_end_matches('/'), MINT_PATH)
    }
}

#[async_trait(?Send)]
impl MintApi for HttpMintApi {
    async fn mint(&self, address: &str) -> Result<NftMetadata, MintClientError> {
        let url = self.endpoint();
        log::debug!("[MINT] POST {}", url);

        let response = Request::post(&url)
            .json(&MintRequest::new(address))
            .map_err(|e| MintClientError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| MintClientError::Transport(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => response.status_text(),
            };
            return Err(MintClientError::Status { status, message });
        }

        response
            .json::<NftMetadata>()
            .await
            .map_err(|e| MintClientError::Decode(e.to_string()))
    }
}
