//! # Chain Errors
//!
//! Failures reported by the SDK while opening a session, resolving the drop or claiming.

use lib_core::AppError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// The gateway refused the signing credential (401/403).
    #[error("SDK credential rejected")]
    Unauthorized,

    /// The gateway serves a different chain than the one requested.
    #[error("network {network} expects chain {expected}, gateway reports {found}")]
    ChainMismatch {
        network: String,
        expected: u64,
        found: u64,
    },

    #[error("contract {0} not found")]
    ContractNotFound(String),

    #[error("contract is a {found}, expected {expected}")]
    WrongContractType { expected: String, found: String },

    #[error("supply exhausted: {0}")]
    SupplyExhausted(String),

    /// Claim conditions (allowlist, wallet limit, price) refused the claim.
    #[error("claim rejected: {0}")]
    ClaimRejected(String),

    /// Any other non-success reply from the gateway.
    #[error("gateway returned {status}: {message}")]
    Rejected { status: u16, message: String },

    /// Transport failure: connect, TLS, client timeout.
    #[error("network error: {0}")]
    Network(String),

    #[error("malformed SDK response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for ChainError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ChainError::MalformedResponse(err.to_string())
        } else {
            ChainError::Network(err.to_string())
        }
    }
}

/// Supply and claim-condition failures keep their own codes, everything else is `Sdk`.
impl From<ChainError> for AppError {
    fn from(err: ChainError) -> Self {
        match err {
            ChainError::SupplyExhausted(msg) => AppError::SupplyExhausted(msg),
            ChainError::ClaimRejected(msg) => AppError::ClaimRejected(msg),
            other => AppError::Sdk(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_to_app_error() {
        let err: AppError = ChainError::SupplyExhausted("0 left".to_string()).into();
        assert_eq!(err.code(), "SupplyExhausted");

        let err: AppError = ChainError::ClaimRejected("not on allowlist".to_string()).into();
        assert_eq!(err.code(), "ClaimRejected");
        assert_eq!(err.user_message(), "not on allowlist");

        let err: AppError = ChainError::Unauthorized.into();
        assert_eq!(err.code(), "Sdk");
        assert_eq!(err.status_code().as_u16(), 500);
    }

    #[test]
    fn test_rejected_display() {
        let err = ChainError::Rejected {
            status: 502,
            message: "upstream rpc down".to_string(),
        };
        assert_eq!(err.to_string(), "gateway returned 502: upstream rpc down");
    }
}
