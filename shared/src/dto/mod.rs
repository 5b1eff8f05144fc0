//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the mint page and the backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`mint`] - Mint request, minted NFT metadata, public mint configuration and error payloads
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ### Request/Response Pair
//!
//! ```text
//! POST /api/mint-nft
//! Content-Type: application/json
//!
//! {
//!   "address": "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "id": "17",
//!   "uri": "ipfs://QmYx.../17",
//!   "name": "Cool Cat #17",
//!   "image": "ipfs://QmZb.../17.png",
//!   "attributes": []
//! }
//! ```
//!
//! ### Error Response
//!
//! ```text
//! HTTP/1.1 400 Bad Request
//! Content-Type: application/json
//!
//! {
//!   "error": "address cannot be empty",
//!   "code": "InvalidInput"
//! }
//! ```

pub mod mint;

pub use mint::*;
