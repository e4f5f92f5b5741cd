use alloy::primitives::{Address, B256, U256, keccak256};
use alloy::rpc::types::Log;
use alloy::sol;

use crate::error::{Error, Result};

sol! {
    /// Emitted by the campaign factory once per deployed campaign.
    #[derive(Debug, PartialEq, Eq)]
    event CampaignCreated(
        string title,
        address indexed owner,
        uint256 requiredAmount,
        uint256 indexed timestamp,
        address campaignAddress,
        string indexed category
    );
}

/// Latest creation time (seconds) whose millisecond form still fits a `u64`.
pub const MAX_TIMESTAMP_SECS: u64 = u64::MAX / 1000;

/// Topic hash an indexed `category` string is stored under.
pub fn category_topic(category: &str) -> B256 {
    keccak256(category.as_bytes())
}

/// Decoded `CampaignCreated` log, as handed over by an event source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCampaignEvent {
    pub title: String,
    pub owner: Address,
    /// Required amount in wei.
    pub required_amount: U256,
    /// Creation time in seconds since the epoch.
    pub timestamp: u64,
    pub campaign_address: Address,
    /// Keccak-256 of the category string (indexed strings are hashed on-chain).
    pub category_topic: B256,
}

impl TryFrom<CampaignCreated> for RawCampaignEvent {
    type Error = Error;

    fn try_from(event: CampaignCreated) -> Result<Self> {
        let timestamp = u64::try_from(event.timestamp)
            .ok()
            .filter(|secs| *secs <= MAX_TIMESTAMP_SECS)
            .ok_or_else(|| Error::Decode(format!("timestamp out of range: {}", event.timestamp)))?;
        Ok(RawCampaignEvent {
            title: event.title,
            owner: event.owner,
            required_amount: event.requiredAmount,
            timestamp,
            campaign_address: event.campaignAddress,
            category_topic: event.category,
        })
    }
}

impl From<&RawCampaignEvent> for CampaignCreated {
    fn from(event: &RawCampaignEvent) -> Self {
        CampaignCreated {
            title: event.title.clone(),
            owner: event.owner,
            requiredAmount: event.required_amount,
            timestamp: U256::from(event.timestamp),
            campaignAddress: event.campaign_address,
            category: event.category_topic,
        }
    }
}

/// Decode an RPC log into a campaign event.
pub fn parse_campaign_log(log: &Log) -> Result<RawCampaignEvent> {
    let decoded = log
        .log_decode::<CampaignCreated>()
        .map_err(|e| Error::Decode(format!("CampaignCreated: {e}")))?;
    RawCampaignEvent::try_from(decoded.inner.data)
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;
    use alloy::sol_types::SolEvent;

    use super::*;

    fn sample() -> RawCampaignEvent {
        RawCampaignEvent {
            title: "Community studio".to_string(),
            owner: address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8"),
            required_amount: U256::from(2_000_000_000_000_000_000u64),
            timestamp: 1_700_000_000,
            campaign_address: address!("0xa16E02E87b7454126E5E10d957A927A7F5B5d2be"),
            category_topic: category_topic("arts"),
        }
    }

    #[test]
    fn decode_log_produced_by_factory() {
        let raw = sample();
        let log = Log {
            inner: alloy::primitives::Log {
                address: address!("0x5FbDB2315678afecb367f032d93F642f64180aa3"),
                data: CampaignCreated::from(&raw).encode_log_data(),
            },
            ..Default::default()
        };

        assert_eq!(parse_campaign_log(&log).unwrap(), raw);
    }

    #[test]
    fn category_is_third_indexed_topic() {
        let data = CampaignCreated::from(&sample()).encode_log_data();
        let topics = data.topics();
        assert_eq!(topics.len(), 4);
        assert_eq!(topics[0], CampaignCreated::SIGNATURE_HASH);
        assert_eq!(topics[3], category_topic("arts"));
    }

    #[test]
    fn timestamp_must_fit_in_milliseconds() {
        let with_timestamp = |secs: U256| CampaignCreated {
            timestamp: secs,
            ..CampaignCreated::from(&sample())
        };

        let at_limit = RawCampaignEvent::try_from(with_timestamp(U256::from(MAX_TIMESTAMP_SECS)));
        assert_eq!(at_limit.unwrap().timestamp, MAX_TIMESTAMP_SECS);

        let past_limit =
            RawCampaignEvent::try_from(with_timestamp(U256::from(MAX_TIMESTAMP_SECS + 1)));
        assert!(matches!(past_limit, Err(Error::Decode(_))));

        let beyond_u64 = RawCampaignEvent::try_from(with_timestamp(U256::MAX));
        assert!(matches!(beyond_u64, Err(Error::Decode(_))));
    }

    #[test]
    fn foreign_log_is_rejected() {
        let log = Log::default();
        assert!(matches!(parse_campaign_log(&log), Err(Error::Decode(_))));
    }
}
