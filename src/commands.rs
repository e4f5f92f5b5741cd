use std::sync::Mutex;

use investedge_sdk::alloy::primitives::Address;
use tauri::{AppHandle, Manager};
use tauri_plugin_opener::OpenerExt;

use crate::discovery::{
    self, CampaignDiscovery, CampaignDraft, CampaignSummary, CategoryOption, CategorySelector,
    TauriNotifier, ValidatedDraft, View,
};
use crate::emit_state;
use crate::state::AppStateManager;

/// Run one fetch for `view`: open a ticket under the state lock, query the
/// chain without holding it, then settle the ticket and publish the result.
///
/// Returns the list the view shows afterwards, which is the previous one when
/// the fetch failed or was superseded.
async fn fetch_into_board(
    app: AppHandle,
    view: View,
    selector: CategorySelector,
) -> Result<Vec<CampaignSummary>, String> {
    let app_ref = app.clone();
    let (ticket, config) = tokio::task::spawn_blocking(move || {
        let manager = app_ref.state::<Mutex<AppStateManager>>();
        let mut mgr = manager.lock().map_err(|_| "state lock failed".to_string())?;
        let ticket = mgr.board_mut(view).begin_fetch(selector);
        let config = mgr.discovery_config();
        mgr.bump_revision();
        let state = mgr.snapshot();
        emit_state(&app_ref, &state);
        Ok::<_, String>((ticket, config))
    })
    .await
    .map_err(|e| format!("{view:?} fetch task failed: {e}"))??;

    let outcome = match config.and_then(|c| CampaignDiscovery::connect(&c)) {
        Ok(discovery) => discovery.fetch_campaigns(ticket.selector()).await,
        Err(e) => Err(e),
    };

    let app_ref = app.clone();
    tokio::task::spawn_blocking(move || {
        let manager = app_ref.state::<Mutex<AppStateManager>>();
        let mut mgr = manager.lock().map_err(|_| "state lock failed".to_string())?;
        let notifier = TauriNotifier::new(&app_ref);
        mgr.board_mut(view).settle(ticket, outcome, &notifier);
        mgr.bump_revision();
        let state = mgr.snapshot();
        emit_state(&app_ref, &state);
        Ok(mgr.board(view).campaigns().to_vec())
    })
    .await
    .map_err(|e| format!("{view:?} settle task failed: {e}"))?
}

#[tauri::command]
pub async fn load_landing_campaigns(app: AppHandle) -> Result<Vec<CampaignSummary>, String> {
    fetch_into_board(app, View::Landing, CategorySelector::All).await
}

#[tauri::command]
pub async fn browse_campaigns(
    category: String,
    app: AppHandle,
) -> Result<Vec<CampaignSummary>, String> {
    let selector = CategorySelector::from(category.as_str());
    fetch_into_board(app, View::Browse, selector).await
}

#[tauri::command]
pub async fn get_campaigns(view: View, app: AppHandle) -> Result<Vec<CampaignSummary>, String> {
    tokio::task::spawn_blocking(move || {
        let manager = app.state::<Mutex<AppStateManager>>();
        let mgr = manager.lock().map_err(|_| "state lock failed".to_string())?;
        Ok(mgr.board(view).campaigns().to_vec())
    })
    .await
    .map_err(|e| format!("get_campaigns task failed: {e}"))?
}

#[tauri::command]
pub fn list_categories() -> Vec<CategoryOption> {
    discovery::category_options()
}

#[tauri::command]
pub fn validate_campaign_draft(draft: CampaignDraft) -> Result<ValidatedDraft, String> {
    discovery::validate_draft(&draft).map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn open_campaign_in_explorer(id: String, app: AppHandle) -> Result<String, String> {
    let address: Address = id
        .trim()
        .parse()
        .map_err(|e| format!("invalid campaign address {id}: {e}"))?;

    let app_ref = app.clone();
    let network = tokio::task::spawn_blocking(move || {
        let manager = app_ref.state::<Mutex<AppStateManager>>();
        let mgr = manager.lock().map_err(|_| "state lock failed".to_string())?;
        mgr.network()
            .ok_or("Not initialized - select a network first".to_string())
    })
    .await
    .map_err(|e| format!("explorer task failed: {e}"))??;

    let url = network
        .explorer_address_url(&address)
        .ok_or_else(|| format!("{} has no block explorer", network.as_str()))?;
    app.opener()
        .open_url(url.as_str(), None::<&str>)
        .map_err(|e| format!("failed to open {url}: {e}"))?;
    Ok(url)
}
