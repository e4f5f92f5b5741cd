use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{Error, Result};
use crate::units::parse_ether_amount;

const MAX_TITLE_LEN: usize = 100;
const MAX_DESCRIPTION_LEN: usize = 1000;
const MAX_IMAGE_URI_LEN: usize = 500;

/// Fields of the "Start a Project" form, as typed by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDraft {
    pub title: String,
    pub description: String,
    /// Funding goal in ether, e.g. `"2.5"`.
    pub required_amount: String,
    pub category: String,
    pub image_uri: String,
}

/// A draft that passed validation, ready to be handed to a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedDraft {
    pub title: String,
    pub description: String,
    /// Funding goal in wei, as a decimal string.
    pub required_amount_wei: String,
    pub category: Category,
    pub image_uri: String,
}

fn bounded(field: &str, value: &str, max: usize) -> Result<String> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if len == 0 || len > max {
        return Err(Error::InvalidDraft(format!("{field} must be 1-{max} characters")));
    }
    Ok(trimmed.to_string())
}

pub fn validate_draft(draft: &CampaignDraft) -> Result<ValidatedDraft> {
    let title = bounded("title", &draft.title, MAX_TITLE_LEN)?;
    let description = bounded("description", &draft.description, MAX_DESCRIPTION_LEN)?;
    let image_uri = bounded("image_uri", &draft.image_uri, MAX_IMAGE_URI_LEN)?;

    let wei = parse_ether_amount(&draft.required_amount)?;
    if wei.is_zero() {
        return Err(Error::InvalidDraft("required_amount must be > 0".to_string()));
    }

    let category: Category = draft
        .category
        .trim()
        .parse()
        .map_err(Error::InvalidDraft)?;

    Ok(ValidatedDraft {
        title,
        description,
        required_amount_wei: wei.to_string(),
        category,
        image_uri,
    })
}
