use std::future::Future;

use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::transports::http::reqwest::Url;

use crate::error::{Error, Result};

use super::config::DiscoveryConfig;
use super::events::{RawCampaignEvent, parse_campaign_log};
use super::query::{CampaignQuery, build_campaign_filter};

/// Anything that can answer a historical `CampaignCreated` query.
pub trait CampaignEventSource: Send + Sync {
    /// Return every matching event in emission order.
    fn campaign_events(
        &self,
        query: &CampaignQuery,
    ) -> impl Future<Output = Result<Vec<RawCampaignEvent>>> + Send;
}

/// Event source backed by `eth_getLogs` on a JSON-RPC provider.
pub struct RpcEventSource {
    provider: DynProvider,
    contract_address: Address,
    from_block: u64,
}

impl RpcEventSource {
    /// Build an HTTP provider for the configured endpoint.
    pub fn connect(config: &DiscoveryConfig) -> Result<Self> {
        let url: Url = config
            .rpc_url
            .parse()
            .map_err(|e| Error::Config(format!("invalid rpc url {}: {e}", config.rpc_url)))?;
        let provider = ProviderBuilder::new().connect_http(url).erased();
        Ok(Self::with_provider(
            provider,
            config.contract_address,
            config.from_block,
        ))
    }

    pub fn with_provider(provider: DynProvider, contract_address: Address, from_block: u64) -> Self {
        Self {
            provider,
            contract_address,
            from_block,
        }
    }

    pub fn contract_address(&self) -> Address {
        self.contract_address
    }
}

impl CampaignEventSource for RpcEventSource {
    async fn campaign_events(&self, query: &CampaignQuery) -> Result<Vec<RawCampaignEvent>> {
        let filter = build_campaign_filter(query, self.contract_address, self.from_block);
        let logs = self
            .provider
            .get_logs(&filter)
            .await
            .map_err(|e| Error::EventSource(format!("eth_getLogs failed: {e}")))?;

        log::debug!(
            "fetched {} CampaignCreated logs from {} (category: {:?})",
            logs.len(),
            self.contract_address,
            query.category()
        );

        logs.iter().map(parse_campaign_log).collect()
    }
}
