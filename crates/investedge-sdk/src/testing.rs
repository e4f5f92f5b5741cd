//! Test utilities: an in-memory event source and campaign fixtures.
//!
//! `MemoryEventSource` answers queries the way a node does: the category
//! constraint is matched against the hashed topic, and events come back in
//! emission order.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use alloy::primitives::{Address, U256, keccak256};

use crate::discovery::{CampaignEventSource, CampaignQuery, RawCampaignEvent, category_topic};
use crate::error::{Error, Result};

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Build a campaign event created `age_days` before `now_unix`.
pub fn campaign_event(
    title: &str,
    category: &str,
    wei: &str,
    now_unix: u64,
    age_days: u64,
) -> RawCampaignEvent {
    RawCampaignEvent {
        title: title.to_string(),
        owner: Address::repeat_byte(0x11),
        required_amount: wei.parse::<U256>().expect("valid wei amount"),
        timestamp: now_unix - age_days * SECONDS_PER_DAY,
        campaign_address: Address::from_word(keccak256(title.as_bytes())),
        category_topic: category_topic(category),
    }
}

#[derive(Default)]
pub struct MemoryEventSource {
    events: Mutex<Vec<RawCampaignEvent>>,
    failure: Mutex<Option<String>>,
    queries: AtomicUsize,
}

impl MemoryEventSource {
    pub fn new(events: Vec<RawCampaignEvent>) -> Self {
        Self {
            events: Mutex::new(events),
            ..Default::default()
        }
    }

    /// A source whose every query fails with `message`.
    pub fn failing(message: &str) -> Self {
        let source = Self::default();
        source.fail_with(Some(message));
        source
    }

    pub fn push(&self, event: RawCampaignEvent) {
        self.events.lock().unwrap().push(event);
    }

    pub fn fail_with(&self, message: Option<&str>) {
        *self.failure.lock().unwrap() = message.map(str::to_string);
    }

    /// Number of queries answered (or rejected) so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl CampaignEventSource for MemoryEventSource {
    async fn campaign_events(&self, query: &CampaignQuery) -> Result<Vec<RawCampaignEvent>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(Error::EventSource(message));
        }
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| query.matches(&event.category_topic))
            .cloned()
            .collect())
    }
}
