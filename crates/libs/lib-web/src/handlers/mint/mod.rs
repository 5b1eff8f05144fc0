//! # Mint Handlers
//!
//! ## Endpoints
//!
//! - `POST /api/mint-nft` - Claim one token of the configured drop to `address`
//! - `GET /api/config` - Network, chain id and contract address of the drop
//!
//! ## Request Examples
//!
//! ```bash
//! curl -X POST http://localhost:3001/api/mint-nft \
//!   -H 'content-type: application/json' \
//!   -d '{"address": "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"}'
//! ```
//!
//! ## Input Validation
//!
//! A body that is not JSON, lacks `address`, or carries an address that fails
//! EIP-55 parsing is answered with 400 before the SDK is touched.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use lib_chain::DropSdk;
use lib_core::{AppError, MintConfig, Result};
use shared::{MintRequest, NftMetadata, PublicMintConfig};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::services::MintService;

/// Claim one token to the address in the body.
///
/// **Route**: `POST /api/mint-nft`
///
/// # Returns
///
/// Success (200): `Json<NftMetadata>` of the claimed token
///
/// Error (400): `InvalidInput` - body or address rejected
/// Error (500): `Sdk`, `SupplyExhausted`, `ClaimRejected`, `Timeout`
#[instrument(skip_all)]
pub async fn mint_nft(
    State(config): State<Arc<MintConfig>>,
    State(sdk): State<Arc<dyn DropSdk>>,
    payload: std::result::Result<Json<MintRequest>, JsonRejection>,
) -> Result<Json<NftMetadata>> {
    let Json(request) = payload.map_err(rejection_to_input_error)?;
    debug!("Mint request for {}", request.address);

    let service = MintService::new(config, sdk);
    let metadata = service.mint(&request.address).await?;

    Ok(Json(metadata))
}

/// Public facts about the configured drop.
///
/// **Route**: `GET /api/config`
pub async fn public_config(State(config): State<Arc<MintConfig>>) -> Json<PublicMintConfig> {
    Json(PublicMintConfig {
        network: config.network.to_string(),
        chain_id: config.network.chain_id(),
        contract_address: config.contract_address.to_string(),
    })
}

fn rejection_to_input_error(rejection: JsonRejection) -> AppError {
    let message = match &rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Expected request with `Content-Type: application/json`".to_string()
        }
        JsonRejection::JsonSyntaxError(_) => "Request body is not valid JSON".to_string(),
        JsonRejection::JsonDataError(_) => {
            "Request body must be an object with an `address` string".to_string()
        }
        other => other.body_text(),
    };
    debug!("Rejected mint body: {}", rejection.body_text());
    AppError::InvalidInput(message)
}

#[cfg(test)]
mod tests;
