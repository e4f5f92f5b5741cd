pub mod commands;
pub mod discovery;
mod state;

use std::sync::Mutex;

use investedge_sdk::Network;
use tauri::{AppHandle, Emitter, Manager};

use state::{AppState, AppStateManager, NetworkSettings};

const APP_STATE_UPDATED_EVENT: &str = "app_state_updated";

// ============================================================================
// Network Commands
// ============================================================================

#[tauri::command]
async fn is_first_launch(app: AppHandle) -> Result<bool, String> {
    tokio::task::spawn_blocking(move || {
        let manager = app.state::<Mutex<AppStateManager>>();
        let mgr = manager.lock().map_err(|_| "state lock failed".to_string())?;
        Ok(mgr.is_first_launch())
    })
    .await
    .map_err(|e| format!("first_launch task failed: {e}"))?
}

#[tauri::command]
async fn set_network(
    network: Network,
    rpc_url: Option<String>,
    contract_address: Option<String>,
    app: AppHandle,
) -> Result<AppState, String> {
    let app_handle = app.clone();
    tokio::task::spawn_blocking(move || {
        let manager = app_handle.state::<Mutex<AppStateManager>>();
        let mut mgr = manager.lock().map_err(|_| "state lock failed".to_string())?;
        log::info!("switching to {}", network.as_str());
        let state = mgr.set_network(NetworkSettings {
            network,
            rpc_url,
            contract_address,
        });
        emit_state(&app_handle, &state);
        Ok(state)
    })
    .await
    .map_err(|e| format!("set_network task failed: {e}"))?
}

// ============================================================================
// App State Commands
// ============================================================================

#[tauri::command]
async fn get_app_state(app: AppHandle) -> Result<AppState, String> {
    tokio::task::spawn_blocking(move || {
        let manager = app.state::<Mutex<AppStateManager>>();
        let mgr = manager.lock().map_err(|_| "state lock failed".to_string())?;
        if !mgr.is_initialized() {
            return Err("Not initialized - select a network first".to_string());
        }
        Ok(mgr.snapshot())
    })
    .await
    .map_err(|e| format!("state task failed: {e}"))?
}

// ============================================================================
// Helpers
// ============================================================================

pub(crate) fn emit_state(app: &AppHandle, state: &AppState) {
    let _ = app.emit(APP_STATE_UPDATED_EVENT, state);
}

// ============================================================================
// App Entry Point
// ============================================================================

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(
            tauri_plugin_log::Builder::default()
                .level(log::LevelFilter::Info)
                .level_for("hyper", log::LevelFilter::Warn)
                .level_for("hyper_util", log::LevelFilter::Warn)
                .level_for("reqwest", log::LevelFilter::Warn)
                .level_for("alloy_transport_http", log::LevelFilter::Warn)
                .level_for("tao", log::LevelFilter::Warn)
                .build(),
        )
        .setup(|app| {
            let app_data_dir = app.path().app_data_dir()?;

            let mut manager = AppStateManager::new(app_data_dir);
            manager.initialize();

            // Default to a local node on first launch
            if manager.is_first_launch() {
                log::info!("First launch detected - defaulting to localhost network");
                manager.set_network(NetworkSettings::new(Network::Localhost));
            }

            app.manage(Mutex::new(manager));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Network
            is_first_launch,
            set_network,
            // App state
            get_app_state,
            // Campaigns
            commands::load_landing_campaigns,
            commands::browse_campaigns,
            commands::get_campaigns,
            commands::list_categories,
            commands::validate_campaign_draft,
            commands::open_campaign_in_explorer,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
