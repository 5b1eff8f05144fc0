//! # Networks
//!
//! The chains an NFT drop can be minted on, identified the way the SDK gateway
//! names them (`mumbai`, `polygon`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported EVM networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Goerli,
    Sepolia,
    Polygon,
    Mumbai,
    Amoy,
    Localhost,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown network '{0}'")]
pub struct UnknownNetwork(pub String);

impl Network {
    pub const ALL: [Network; 7] = [
        Network::Mainnet,
        Network::Goerli,
        Network::Sepolia,
        Network::Polygon,
        Network::Mumbai,
        Network::Amoy,
        Network::Localhost,
    ];

    /// Identifier used on the wire and in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Goerli => "goerli",
            Network::Sepolia => "sepolia",
            Network::Polygon => "polygon",
            Network::Mumbai => "mumbai",
            Network::Amoy => "amoy",
            Network::Localhost => "localhost",
        }
    }

    /// EIP-155 chain id.
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Goerli => 5,
            Network::Sepolia => 11_155_111,
            Network::Polygon => 137,
            Network::Mumbai => 80_001,
            Network::Amoy => 80_002,
            Network::Localhost => 1337,
        }
    }

    pub fn is_testnet(&self) -> bool {
        !matches!(self, Network::Mainnet | Network::Polygon)
    }
}

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "ethereum" | "mainnet" => Ok(Network::Mainnet),
            "polygon-mumbai" => Ok(Network::Mumbai),
            "polygon-amoy" => Ok(Network::Amoy),
            other => Network::ALL
                .into_iter()
                .find(|n| n.as_str() == other)
                .ok_or_else(|| UnknownNetwork(s.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
