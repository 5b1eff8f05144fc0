//! # Mint Data Transfer Objects
//!
//! Defines the request body of `POST /api/mint-nft`, the NFT metadata returned on
//! success, and the error payload returned on failure.
//!
//! The metadata shape follows what the NFT drop SDK reports for a claimed token:
//! an `id` and metadata `uri` are always present, every descriptive field is optional.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/mint-nft`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MintRequest {
    /// Destination wallet address (`0x` + 40 hex digits)
    pub address: String,
}

impl MintRequest {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

/// Metadata of a minted token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NftMetadata {
    /// Token id within the drop contract (decimal string)
    pub id: String,
    /// Metadata URI as stored on chain
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default)]
    pub attributes: Vec<NftAttribute>,
    /// Free-form properties some collections attach instead of `attributes`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
}

impl NftMetadata {
    /// Bare metadata with only an id and URI set.
    pub fn new(id: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            uri: uri.into(),
            name: None,
            description: None,
            image: None,
            external_url: None,
            animation_url: None,
            background_color: None,
            attributes: Vec::new(),
            properties: None,
        }
    }

    /// True if the token carries a usable identity.
    pub fn has_identity(&self) -> bool {
        !self.id.trim().is_empty()
    }

    /// Display name, falling back to `#<id>` when the collection sets none.
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("#{}", self.id),
        }
    }

    /// Media to render: the image, else the animation. Blank fields are skipped.
    pub fn media(&self) -> Option<(MediaKind, &str)> {
        let nonblank = |url: &&str| !url.trim().is_empty();
        self.image
            .as_deref()
            .filter(nonblank)
            .map(|url| (MediaKind::Image, url))
            .or_else(|| {
                self.animation_url
                    .as_deref()
                    .filter(nonblank)
                    .map(|url| (MediaKind::Animation, url))
            })
    }
}

/// How a token's media is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    /// `animation_url`, rendered as video
    Animation,
}

/// One trait of a token, as used by OpenSea-style metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NftAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trait_type: Option<String>,
    pub value: serde_json::Value,
}

/// Public facts about the configured drop, served by `GET /api/config`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicMintConfig {
    pub network: String,
    pub chain_id: u64,
    pub contract_address: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    /// Machine-readable error kind (`InvalidInput`, `SupplyExhausted`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}
