//! Campaign discovery from on-chain `CampaignCreated` logs.
//!
//! The pipeline is: build a [`CampaignQuery`] from the user's category
//! selection, let a [`CampaignEventSource`] answer it, then project the raw
//! events into [`CampaignSummary`] values filtered by recency.

pub(crate) mod config;
pub(crate) mod events;
pub(crate) mod projection;
pub(crate) mod query;
pub(crate) mod service;
pub(crate) mod source;

pub use config::DiscoveryConfig;
pub use events::{
    CampaignCreated, MAX_TIMESTAMP_SECS, RawCampaignEvent, category_topic, parse_campaign_log,
};
pub use projection::{
    CampaignSummary, DEFAULT_RECENCY_WINDOW, project_campaigns, recency_cutoff,
};
pub use query::{CampaignQuery, build_campaign_filter};
pub use service::{CampaignDiscovery, unix_now};
pub use source::{CampaignEventSource, RpcEventSource};
