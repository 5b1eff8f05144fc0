//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`] used consistently
//! across the mint backend. It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Client Errors** (4xx) - User/input issues
//!    - [`InvalidInput`](AppError::InvalidInput) → 400 Bad Request
//!
//! 2. **External-dependency Errors** (5xx) - The SDK, chain or contract failed the claim
//!    - [`Sdk`](AppError::Sdk) → 500, generic message
//!    - [`SupplyExhausted`](AppError::SupplyExhausted) → 500, distinct code
//!    - [`ClaimRejected`](AppError::ClaimRejected) → 500, distinct code
//!    - [`Timeout`](AppError::Timeout) → 500
//!
//! 3. **Server Errors** (5xx) - Internal/system issues
//!    - [`Config`](AppError::Config) → 500 Internal Server Error
//!    - [`Internal`](AppError::Internal) → 500 Internal Server Error
//!
//! ## Wire Format
//!
//! Every error renders as `{"error": <user message>, "code": <variant name>}`.
//! The full error is logged, only the user message is returned.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require_address(addr: &str) -> Result<&str> {
//!     if addr.trim().is_empty() {
//!         return Err(AppError::InvalidInput("address cannot be empty".to_string()));
//!     }
//!     Ok(addr)
//! }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type covering all error scenarios.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input validation error.
    ///
    /// **HTTP Status**: 400 Bad Request
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// SDK, network or contract failure during the claim.
    #[error("SDK error: {0}")]
    Sdk(String),

    /// The drop has no tokens left to claim.
    #[error("Supply exhausted: {0}")]
    SupplyExhausted(String),

    /// The drop's claim conditions refused this claim (allowlist, per-wallet limit, price).
    #[error("Claim rejected: {0}")]
    ClaimRejected(String),

    /// The SDK sequence did not finish within the configured budget.
    #[error("Timed out: {0}")]
    Timeout(String),

    /// Internal server error (unexpected failures).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Sdk(_)
            | AppError::SupplyExhausted(_)
            | AppError::ClaimRejected(_)
            | AppError::Timeout(_)
            | AppError::Config(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Variant name, sent as the `code` field.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "Config",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Sdk(_) => "Sdk",
            AppError::SupplyExhausted(_) => "SupplyExhausted",
            AppError::ClaimRejected(_) => "ClaimRejected",
            AppError::Timeout(_) => "Timeout",
            AppError::Internal(_) => "Internal",
        }
    }

    /// Get a user-friendly error message.
    ///
    /// For internal and SDK errors, returns a generic message to avoid exposing implementation details.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::ClaimRejected(msg) => msg.clone(),
            AppError::SupplyExhausted(_) => "This drop has no tokens left to claim".to_string(),
            AppError::Timeout(_) => "Minting timed out, check your wallet before retrying".to_string(),
            AppError::Sdk(_) => "Minting failed, please try again later".to_string(),
            AppError::Config(_) | AppError::Internal(_) => "An internal error occurred".to_string(),
        }
    }
}

/// Implement Axum's `IntoResponse` for automatic error handling.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_client_error() {
            tracing::debug!("Client error: {}", self);
        } else {
            tracing::error!("Server error: {}", self);
        }

        let body = Json(json!({
            "error": self.user_message(),
            "code": self.code(),
        }));

        (status, body).into_response()
    }
}

/// Convert `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON error: {}", err))
    }
}

/// Convert env lookup failures to `AppError::Config`.
impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
