use std::time::Duration;

use crate::category::CategorySelector;
use crate::error::Result;

use super::config::DiscoveryConfig;
use super::projection::{CampaignSummary, DEFAULT_RECENCY_WINDOW, project_campaigns};
use super::query::CampaignQuery;
use super::source::{CampaignEventSource, RpcEventSource};

/// Current wall-clock time in seconds since the epoch.
pub fn unix_now() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp()).unwrap_or(0)
}

/// Fetches campaign-creation events and projects them into listable summaries.
pub struct CampaignDiscovery<S: CampaignEventSource = RpcEventSource> {
    source: S,
    recency_window: Duration,
}

impl CampaignDiscovery<RpcEventSource> {
    /// Connect to the JSON-RPC endpoint named by `config`.
    pub fn connect(config: &DiscoveryConfig) -> Result<Self> {
        let source = RpcEventSource::connect(config)?;
        Ok(Self::with_window(source, config.recency_window))
    }
}

impl<S: CampaignEventSource> CampaignDiscovery<S> {
    pub fn new(source: S) -> Self {
        Self::with_window(source, DEFAULT_RECENCY_WINDOW)
    }

    pub fn with_window(source: S, recency_window: Duration) -> Self {
        Self {
            source,
            recency_window,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn recency_window(&self) -> Duration {
        self.recency_window
    }

    /// One-shot: query the source for `selector` and keep recent campaigns.
    pub async fn fetch_campaigns(
        &self,
        selector: &CategorySelector,
    ) -> Result<Vec<CampaignSummary>> {
        self.fetch_campaigns_at(selector, unix_now()).await
    }

    /// Same as [`fetch_campaigns`](Self::fetch_campaigns) with an explicit clock.
    pub async fn fetch_campaigns_at(
        &self,
        selector: &CategorySelector,
        now_unix: u64,
    ) -> Result<Vec<CampaignSummary>> {
        let query = CampaignQuery::for_selector(selector);
        let events = self.source.campaign_events(&query).await?;
        let campaigns = project_campaigns(&events, now_unix, self.recency_window);

        log::info!(
            "{selector} campaigns: {} events, {} within the last {} days",
            events.len(),
            campaigns.len(),
            self.recency_window.as_secs() / 86_400
        );

        Ok(campaigns)
    }
}
