use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::units::format_ether;

use super::events::RawCampaignEvent;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// How far back a campaign may have been created and still be listed.
pub const DEFAULT_RECENCY_WINDOW: Duration = Duration::from_secs(540 * SECONDS_PER_DAY);

/// What the frontend receives for one campaign card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSummary {
    pub title: String,
    pub owner: String,
    /// Required amount in ether.
    pub amount: String,
    /// Creation time in milliseconds since the epoch.
    pub date: u64,
    /// Address of the deployed campaign contract.
    pub id: String,
}

impl From<&RawCampaignEvent> for CampaignSummary {
    fn from(event: &RawCampaignEvent) -> Self {
        CampaignSummary {
            title: event.title.clone(),
            owner: event.owner.to_checksum(None),
            amount: format_ether(event.required_amount),
            // Decoded events never exceed MAX_TIMESTAMP_SECS; hand-built ones clamp.
            date: event.timestamp.saturating_mul(1000),
            id: event.campaign_address.to_checksum(None),
        }
    }
}

/// Oldest creation time (seconds) still considered recent at `now_unix`.
pub fn recency_cutoff(now_unix: u64, window: Duration) -> u64 {
    now_unix.saturating_sub(window.as_secs())
}

/// Project raw events into summaries, dropping those created before the cutoff.
///
/// Input order is preserved. An event created exactly at the cutoff is kept.
pub fn project_campaigns(
    events: &[RawCampaignEvent],
    now_unix: u64,
    window: Duration,
) -> Vec<CampaignSummary> {
    let cutoff = recency_cutoff(now_unix, window);
    events
        .iter()
        .filter(|event| event.timestamp >= cutoff)
        .map(CampaignSummary::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{Address, address};

    use super::*;
    use crate::discovery::events::category_topic;

    const NOW: u64 = 1_760_000_000;
    const DAY: u64 = SECONDS_PER_DAY;

    fn event(title: &str, timestamp: u64, wei: &str) -> RawCampaignEvent {
        RawCampaignEvent {
            title: title.to_string(),
            owner: address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8"),
            required_amount: wei.parse().unwrap(),
            timestamp,
            campaign_address: Address::repeat_byte(0x42),
            category_topic: category_topic("arts"),
        }
    }

    #[test]
    fn window_is_540_days() {
        assert_eq!(DEFAULT_RECENCY_WINDOW.as_secs(), 540 * 86_400);
        assert_eq!(recency_cutoff(NOW, DEFAULT_RECENCY_WINDOW), NOW - 46_656_000);
    }

    #[test]
    fn keeps_recent_and_drops_old() {
        let events = vec![
            event("recent", NOW - 10 * DAY, "2000000000000000000"),
            event("stale", NOW - 600 * DAY, "1000000000000000000"),
        ];

        let projected = project_campaigns(&events, NOW, DEFAULT_RECENCY_WINDOW);

        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].title, "recent");
        assert_eq!(projected[0].amount, "2");
        assert_eq!(projected[0].date, (NOW - 10 * DAY) * 1000);
    }

    #[test]
    fn cutoff_is_inclusive() {
        let cutoff = recency_cutoff(NOW, DEFAULT_RECENCY_WINDOW);
        let events = vec![
            event("at cutoff", cutoff, "1"),
            event("one second early", cutoff - 1, "1"),
        ];

        let projected = project_campaigns(&events, NOW, DEFAULT_RECENCY_WINDOW);

        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].title, "at cutoff");
    }

    #[test]
    fn preserves_input_order() {
        let events = vec![
            event("b", NOW - 3 * DAY, "1"),
            event("a", NOW - DAY, "1"),
            event("c", NOW - 3 * DAY, "1"),
        ];

        let titles: Vec<_> = project_campaigns(&events, NOW, DEFAULT_RECENCY_WINDOW)
            .into_iter()
            .map(|c| c.title)
            .collect();

        assert_eq!(titles, ["b", "a", "c"]);
    }

    #[test]
    fn addresses_are_checksummed() {
        let summary = CampaignSummary::from(&event("x", NOW, "1500000000000000000"));
        assert_eq!(summary.owner, "0x70997970C51812dc3A010C7d01b50e0d17dc79C8");
        assert_eq!(summary.id, Address::repeat_byte(0x42).to_checksum(None));
        assert_eq!(summary.amount, "1.5");
    }

    #[test]
    fn window_larger_than_clock_keeps_everything() {
        let events = vec![event("genesis", 0, "0")];
        let projected = project_campaigns(&events, 1_000, DEFAULT_RECENCY_WINDOW);
        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].date, 0);
    }

    #[test]
    fn projection_is_idempotent() {
        let events = vec![
            event("one", NOW - DAY, "123"),
            event("two", NOW - 700 * DAY, "456"),
        ];
        assert_eq!(
            project_campaigns(&events, NOW, DEFAULT_RECENCY_WINDOW),
            project_campaigns(&events, NOW, DEFAULT_RECENCY_WINDOW)
        );
    }

    #[test]
    fn summary_serializes_camel_case() {
        let summary = CampaignSummary::from(&event("x", 5, "0"));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["date"], 5000);
        assert_eq!(json["amount"], "0");
        assert!(json.get("id").is_some());
    }
}
