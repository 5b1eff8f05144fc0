//! # Services Layer
//!
//! Business logic between the HTTP handlers and the SDK.
//!
//! ```text
//! Handlers (HTTP) → MintService → DropSdk (lib-chain)
//! ```
//!
//! Services return `Result<T, AppError>` and convert `ChainError`s on the way out.

pub mod mint;

pub use mint::MintService;
