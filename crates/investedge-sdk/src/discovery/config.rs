use std::time::Duration;

use alloy::primitives::Address;

use crate::error::{Error, Result};
use crate::network::Network;

use super::projection::DEFAULT_RECENCY_WINDOW;

/// Configuration for campaign discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// JSON-RPC endpoint.
    pub rpc_url: String,
    /// Address of the campaign factory emitting `CampaignCreated`.
    pub contract_address: Address,
    /// First block scanned by log queries.
    pub from_block: u64,
    /// Campaigns created earlier than `now - recency_window` are not listed.
    pub recency_window: Duration,
}

impl DiscoveryConfig {
    pub fn new(rpc_url: impl Into<String>, contract_address: Address) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            contract_address,
            from_block: 0,
            recency_window: DEFAULT_RECENCY_WINDOW,
        }
    }

    /// Resolve a configuration from network defaults and optional overrides.
    pub fn for_network(
        network: Network,
        rpc_url: Option<&str>,
        contract_address: Option<&str>,
    ) -> Result<Self> {
        let rpc_url = rpc_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(network.default_rpc_url());
        let contract_address = contract_address
            .filter(|addr| !addr.trim().is_empty())
            .or(network.default_contract_address())
            .ok_or_else(|| {
                Error::Config(format!(
                    "no campaign factory address configured for {}",
                    network.as_str()
                ))
            })?;
        let contract_address: Address = contract_address
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("invalid contract address {contract_address}: {e}")))?;

        Ok(Self::new(rpc_url.trim(), contract_address))
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    #[test]
    fn localhost_uses_defaults() {
        let config = DiscoveryConfig::for_network(Network::Localhost, None, None).unwrap();
        assert_eq!(config.rpc_url, "http://127.0.0.1:8545");
        assert_eq!(
            config.contract_address,
            address!("0x5FbDB2315678afecb367f032d93F642f64180aa3")
        );
        assert_eq!(config.from_block, 0);
        assert_eq!(config.recency_window, DEFAULT_RECENCY_WINDOW);
    }

    #[test]
    fn overrides_win() {
        let config = DiscoveryConfig::for_network(
            Network::Sepolia,
            Some("https://rpc.example.org"),
            Some("0x000000000000000000000000000000000000dEaD"),
        )
        .unwrap();
        assert_eq!(config.rpc_url, "https://rpc.example.org");
        assert_eq!(
            config.contract_address,
            address!("0x000000000000000000000000000000000000dEaD")
        );
    }

    #[test]
    fn blank_overrides_fall_back() {
        let config = DiscoveryConfig::for_network(Network::Localhost, Some("  "), Some("")).unwrap();
        assert_eq!(config.rpc_url, Network::Localhost.default_rpc_url());
    }

    #[test]
    fn missing_factory_is_a_config_error() {
        let err = DiscoveryConfig::for_network(Network::Sepolia, None, None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn malformed_factory_is_a_config_error() {
        let err = DiscoveryConfig::for_network(Network::Localhost, None, Some("0x1234")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
