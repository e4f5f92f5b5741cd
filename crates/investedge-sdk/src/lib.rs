pub mod board;
pub mod category;
pub mod discovery;
pub mod draft;
pub mod error;
pub mod network;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod units;

// Re-export alloy for app-layer use
pub use alloy;

pub use board::{CampaignBoard, FetchTicket, Notice, Notifier, Settled, Severity, View};
pub use category::{Category, CategoryOption, CategorySelector, category_options};
pub use draft::{CampaignDraft, ValidatedDraft, validate_draft};
pub use error::{Error, Result};
pub use network::Network;
pub use units::{format_ether, parse_ether_amount};

// Discovery
pub use discovery::{
    // Types
    CampaignCreated,
    CampaignDiscovery,
    CampaignEventSource,
    CampaignQuery,
    CampaignSummary,
    DiscoveryConfig,
    RawCampaignEvent,
    RpcEventSource,
    // Constants
    DEFAULT_RECENCY_WINDOW,
    MAX_TIMESTAMP_SECS,
    // Functions
    build_campaign_filter,
    category_topic,
    parse_campaign_log,
    project_campaigns,
    recency_cutoff,
    unix_now,
};
