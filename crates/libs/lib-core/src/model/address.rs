//! # EVM Addresses
//!
//! Parsing and display of 20-byte EVM account addresses with EIP-55 checksums.
//!
//! ## Accepted Input
//!
//! - `0x` (or `0X`) prefix followed by exactly 40 hex digits
//! - All-lowercase or all-uppercase digits are accepted without a checksum
//! - Mixed case must match the EIP-55 checksum exactly
//! - The zero address is rejected, a token minted there is burned
//!
//! ## Usage
//!
//! ```rust
//! use lib_core::model::EvmAddress;
//!
//! let addr: EvmAddress = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap();
//! assert_eq!(addr.to_string(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tiny_keccak::{Hasher, Keccak};

/// Length of an address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// A validated EVM address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EvmAddress([u8; ADDRESS_LEN]);

/// Why a string is not a usable address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address cannot be empty")]
    Empty,

    #[error("address must start with 0x")]
    MissingPrefix,

    #[error("address must have 40 hex digits, got {0}")]
    WrongLength(usize),

    #[error("address contains non-hex characters")]
    NonHex,

    #[error("address checksum mismatch (expected {expected})")]
    BadChecksum { expected: String },

    #[error("the zero address cannot receive tokens")]
    Zero,
}

impl EvmAddress {
    /// `0x` + 40 hex digits cased per EIP-55.
    pub fn to_checksum(&self) -> String {
        format!("0x{}", checksum_digits(&hex::encode(self.0)))
    }
}

/// Apply EIP-55 casing to 40 lowercase hex digits.
fn checksum_digits(lower: &str) -> String {
    let mut hash = [0u8; 32];
    let mut keccak = Keccak::v256();
    keccak.update(lower.as_bytes());
    keccak.finalize(&mut hash);

    lower
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let nibble = if i % 2 == 0 { hash[i / 2] >> 4 } else { hash[i / 2] & 0x0f };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

impl FromStr for EvmAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AddressError::Empty);
        }

        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(AddressError::MissingPrefix)?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AddressError::NonHex);
        }
        if digits.len() != ADDRESS_LEN * 2 {
            return Err(AddressError::WrongLength(digits.len()));
        }

        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| AddressError::NonHex)?;

        let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
        if has_lower && has_upper {
            let expected = checksum_digits(&digits.to_ascii_lowercase());
            if expected != digits {
                return Err(AddressError::BadChecksum {
                    expected: format!("0x{}", expected),
                });
            }
        }

        if bytes == [0u8; ADDRESS_LEN] {
            return Err(AddressError::Zero);
        }

        Ok(Self(bytes))
    }
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl fmt::Debug for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EvmAddress({})", self.to_checksum())
    }
}

impl Serialize for EvmAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_checksum())
    }
}

impl<'de> Deserialize<'de> for EvmAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
