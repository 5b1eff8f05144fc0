//! # Core Library
//!
//! Configuration, domain value types and the application error type.

pub mod config;
pub mod error;
pub mod model;

// Re-export commonly used types
pub use config::{Credential, MintConfig};
pub use error::{AppError, Result};
pub use model::{AddressError, EvmAddress, Network};
