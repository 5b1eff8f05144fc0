//! # Shared Mint DTOs
//!
//! Wire types used on both sides of `POST /api/mint-nft`: the axum backend
//! deserializes [`MintRequest`] and serializes [`NftMetadata`] or
//! [`ErrorResponse`]; the Leptos page (compiled to WASM) does the reverse.
//! Keep this crate free of anything that does not build for `wasm32`.
//!
//! [`utils`] holds the address and media helpers the page renders with.
//!
//! ```rust
//! use shared::{truncate_address, MintRequest};
//!
//! let request = MintRequest::new("0xBB1B8021e31Ac8A34ba5963e48f65d6a4B43aa42");
//! assert_eq!(
//!     serde_json::to_string(&request).unwrap(),
//!     r#"{"address":"0xBB1B8021e31Ac8A34ba5963e48f65d6a4B43aa42"}"#
//! );
//! assert_eq!(truncate_address(&request.address), "0xBB1B...aa42");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
