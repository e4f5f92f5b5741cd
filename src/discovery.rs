use tauri::{AppHandle, Emitter};

// Re-export SDK-owned types and functions for use by the app layer.
pub use investedge_sdk::{
    // Types
    CampaignDiscovery, CampaignDraft, CampaignSummary, CategoryOption, CategorySelector,
    DiscoveryConfig, Notice, Notifier, Severity, ValidatedDraft, View,
    // Functions
    category_options, validate_draft,
};

/// Event carrying a transient notification (toast) to the frontend.
pub const CAMPAIGN_NOTICE_EVENT: &str = "campaign_notice";

/// Delivers notices to the webview as `campaign_notice` events.
pub struct TauriNotifier<'a> {
    app: &'a AppHandle,
}

impl<'a> TauriNotifier<'a> {
    pub fn new(app: &'a AppHandle) -> Self {
        Self { app }
    }
}

impl Notifier for TauriNotifier<'_> {
    fn notify(&self, notice: &Notice) {
        match notice.severity {
            Severity::Error => log::error!("[{:?}] {}", notice.view, notice.message),
            Severity::Info | Severity::Success => {
                log::info!("[{:?}] {}", notice.view, notice.message)
            }
        }
        if let Err(e) = self.app.emit(CAMPAIGN_NOTICE_EVENT, notice) {
            log::warn!("failed to emit {CAMPAIGN_NOTICE_EVENT}: {e}");
        }
    }
}
