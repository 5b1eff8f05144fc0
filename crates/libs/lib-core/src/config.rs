//! # Mint Configuration
//!
//! This module manages the mint backend configuration loaded from environment variables.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! ## Environment
//!
//! | Variable            | Default                                      |
//! |---------------------|----------------------------------------------|
//! | `PRIVATE_KEY`       | required                                     |
//! | `SDK_GATEWAY_URL`   | required                                     |
//! | `NETWORK`           | `mumbai`                                     |
//! | `CONTRACT_ADDRESS`  | `0xBB1B8021e31Ac8A34ba5963e48f65d6a4B43aa42` |
//! | `MINT_TIMEOUT_SECS` | `120`                                        |
//! | `GATEWAY_TIMEOUT_SECS` | `60`                                      |
//!
//! ## Usage
//!
//! The config is built once at startup and handed to the server state explicitly:
//!
//! ```rust,no_run
//! use lib_core::config::MintConfig;
//!
//! let config = MintConfig::load()?;
//! println!("minting on {}", config.network);
//! # Ok::<(), lib_core::AppError>(())
//! ```

use crate::error::{AppError, Result};
use crate::model::{EvmAddress, Network};
use lib_utils::{get_env, get_env_opt, get_env_parse_or, validate_http_url, validate_range};
use std::fmt;
use std::time::Duration;

/// NFT drop minted from when `CONTRACT_ADDRESS` is unset.
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0xBB1B8021e31Ac8A34ba5963e48f65d6a4B43aa42";
pub const DEFAULT_NETWORK: Network = Network::Mumbai;
pub const DEFAULT_MINT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 60;
const MAX_TIMEOUT_SECS: u64 = 600;

/// Server-held signing credential.
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Raw secret, only for building the SDK's `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***REDACTED***)")
    }
}

/// Mint backend configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct MintConfig {
    /// Signing credential used by the SDK session
    pub private_key: Credential,

    /// Network the drop lives on
    pub network: Network,

    /// NFT drop contract that tokens are claimed from
    pub contract_address: EvmAddress,

    /// Base URL of the SDK gateway
    pub gateway_url: String,

    /// Budget for the whole session/resolve/claim sequence
    ///
    /// Valid range: 1-600 seconds
    pub mint_timeout: Duration,

    /// Per-request timeout of the gateway HTTP client
    pub gateway_timeout: Duration,
}

impl MintConfig {
    /// Read `.env` (if present), then load and validate.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let private_key = Credential::new(get_env("PRIVATE_KEY")?);

        let gateway_url = get_env("SDK_GATEWAY_URL")?.trim().trim_end_matches('/').to_string();

        let network = match get_env_opt("NETWORK") {
            Some(raw) => raw
                .parse::<Network>()
                .map_err(|e| AppError::Config(format!("NETWORK: {}", e)))?,
            None => DEFAULT_NETWORK,
        };

        let contract_address = get_env_opt("CONTRACT_ADDRESS")
            .unwrap_or_else(|| DEFAULT_CONTRACT_ADDRESS.to_string())
            .parse::<EvmAddress>()
            .map_err(|e| AppError::Config(format!("CONTRACT_ADDRESS: {}", e)))?;

        let mint_timeout_secs = get_env_parse_or("MINT_TIMEOUT_SECS", DEFAULT_MINT_TIMEOUT_SECS)?;
        let gateway_timeout_secs =
            get_env_parse_or("GATEWAY_TIMEOUT_SECS", DEFAULT_GATEWAY_TIMEOUT_SECS)?;

        Ok(Self {
            private_key,
            network,
            contract_address,
            gateway_url,
            mint_timeout: Duration::from_secs(mint_timeout_secs),
            gateway_timeout: Duration::from_secs(gateway_timeout_secs),
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.private_key.is_empty() {
            return Err(AppError::Config("PRIVATE_KEY cannot be empty".to_string()));
        }

        validate_http_url(&self.gateway_url, "SDK_GATEWAY_URL").map_err(AppError::Config)?;

        validate_range(self.mint_timeout.as_secs(), 1, MAX_TIMEOUT_SECS, "MINT_TIMEOUT_SECS")
            .map_err(AppError::Config)?;
        validate_range(self.gateway_timeout.as_secs(), 1, MAX_TIMEOUT_SECS, "GATEWAY_TIMEOUT_SECS")
            .map_err(AppError::Config)?;

        Ok(())
    }
}
