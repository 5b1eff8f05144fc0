//! Gateway wire types.

use serde::{Deserialize, Serialize};

use crate::sdk::ClaimedToken;

#[derive(Debug, Deserialize)]
pub(super) struct NetworkInfo {
    pub chain_id: u64,
}

#[derive(Debug, Deserialize)]
pub(super) struct ContractInfo {
    pub contract_type: String,
}

#[derive(Debug, Serialize)]
pub(super) struct ClaimRequest {
    pub receiver: String,
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub(super) struct ClaimResponse {
    pub result: Vec<ClaimedToken>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}
