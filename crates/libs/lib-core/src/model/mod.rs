//! # Domain Model
//!
//! Value types shared by configuration, the chain layer and the web layer.

pub mod address;
pub mod network;

pub use address::{AddressError, EvmAddress};
pub use network::{Network, UnknownNetwork};
