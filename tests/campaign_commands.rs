use investedge_lib::commands::{list_categories, validate_campaign_draft};
use investedge_lib::discovery::CampaignDraft;
use investedge_sdk::Category;

fn draft() -> CampaignDraft {
    CampaignDraft {
        title: "Community darkroom".to_string(),
        description: "Film developing space open to everyone.".to_string(),
        required_amount: "1.25".to_string(),
        category: "arts".to_string(),
        image_uri: "ipfs://bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi".to_string(),
    }
}

#[test]
fn category_menu_starts_with_all() {
    let options = list_categories();
    let values: Vec<&str> = options.iter().map(|o| o.value).collect();
    assert_eq!(
        values,
        ["all", "arts", "music", "health", "finance", "education"]
    );
}

#[test]
fn valid_draft_is_converted_to_wei() {
    let validated = validate_campaign_draft(draft()).unwrap();
    assert_eq!(validated.required_amount_wei, "1250000000000000000");
    assert_eq!(validated.category, Category::Arts);
}

#[test]
fn invalid_drafts_report_a_reason() {
    let mut no_title = draft();
    no_title.title = "   ".to_string();
    let err = validate_campaign_draft(no_title).unwrap_err();
    assert!(err.contains("title"), "{err}");

    let mut free = draft();
    free.required_amount = "0".to_string();
    assert!(validate_campaign_draft(free).is_err());

    let mut unknown = draft();
    unknown.category = "gaming".to_string();
    assert!(validate_campaign_draft(unknown).is_err());
}

#[test]
fn landing_tagline_rotates_brand_strings() {
    let page = include_str!("../ui/index.html");
    assert!(page.contains("const taglines = ['Welcome to InvestEdge', 'Invest in Your Future'];"));
}
