use alloy::primitives::{Address, B256};
use alloy::rpc::types::Filter;
use alloy::sol_types::SolEvent;

use crate::category::CategorySelector;

use super::events::{CampaignCreated, category_topic};

/// Filter criteria for one campaign event query.
///
/// Only the category argument can be constrained; every other positional
/// argument stays a wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignQuery {
    category: Option<String>,
}

impl CampaignQuery {
    /// Matches every `CampaignCreated` event.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
        }
    }

    pub fn for_selector(selector: &CategorySelector) -> Self {
        match selector.filter_value() {
            Some(category) => Self::for_category(category),
            None => Self::all(),
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn category_topic(&self) -> Option<B256> {
        self.category.as_deref().map(category_topic)
    }

    /// Whether an event with the given category topic satisfies this query.
    pub fn matches(&self, topic: &B256) -> bool {
        self.category_topic().is_none_or(|wanted| wanted == *topic)
    }
}

/// Build the `eth_getLogs` filter for a query against the factory contract.
pub fn build_campaign_filter(
    query: &CampaignQuery,
    contract_address: Address,
    from_block: u64,
) -> Filter {
    let mut filter = Filter::new()
        .address(contract_address)
        .event_signature(CampaignCreated::SIGNATURE_HASH)
        .from_block(from_block);

    // topic1 = owner, topic2 = timestamp, topic3 = category
    if let Some(topic) = query.category_topic() {
        filter = filter.topic3(topic);
    }

    filter
}
