use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// EVM networks the campaign factory can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Sepolia,
    Localhost,
}

impl Network {
    pub fn is_mainnet(self) -> bool {
        matches!(self, Network::Mainnet)
    }

    pub fn chain_id(self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Sepolia => 11_155_111,
            Network::Localhost => 31_337,
        }
    }

    pub fn default_rpc_url(self) -> &'static str {
        match self {
            Network::Mainnet => "https://ethereum-rpc.publicnode.com",
            Network::Sepolia => "https://ethereum-sepolia-rpc.publicnode.com",
            Network::Localhost => "http://127.0.0.1:8545",
        }
    }

    /// Factory address used when none is configured.
    ///
    /// Only a local Hardhat node has a predictable one (first deployment of the
    /// default account).
    pub fn default_contract_address(self) -> Option<&'static str> {
        match self {
            Network::Localhost => Some("0x5FbDB2315678afecb367f032d93F642f64180aa3"),
            Network::Mainnet | Network::Sepolia => None,
        }
    }

    pub fn explorer_url(self) -> Option<&'static str> {
        match self {
            Network::Mainnet => Some("https://etherscan.io"),
            Network::Sepolia => Some("https://sepolia.etherscan.io"),
            Network::Localhost => None,
        }
    }

    /// Explorer page for a campaign (or any) address, if the network has an explorer.
    pub fn explorer_address_url(self, address: &Address) -> Option<String> {
        self.explorer_url()
            .map(|base| format!("{base}/address/{}", address.to_checksum(None)))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Sepolia => "sepolia",
            Network::Localhost => "localhost",
        }
    }
}

impl std::str::FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "ethereum" => Ok(Network::Mainnet),
            "sepolia" | "testnet" => Ok(Network::Sepolia),
            "localhost" | "hardhat" | "local" => Ok(Network::Localhost),
            _ => Err(format!("invalid network: {}", s)),
        }
    }
}
