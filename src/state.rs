use std::fs;
use std::path::{Path, PathBuf};

use investedge_sdk::{
    CampaignBoard, CampaignSummary, DiscoveryConfig, Error as SdkError, Network, View,
};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "network_config.json";

// ============================================================================
// Persisted network settings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSettings {
    pub network: Network,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
}

impl NetworkSettings {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            rpc_url: None,
            contract_address: None,
        }
    }

    pub fn discovery_config(&self) -> Result<DiscoveryConfig, SdkError> {
        DiscoveryConfig::for_network(
            self.network,
            self.rpc_url.as_deref(),
            self.contract_address.as_deref(),
        )
    }
}

// ============================================================================
// Network status & app state (sent to frontend)
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStatus {
    pub network: String,
    pub is_mainnet: bool,
    pub chain_id: Option<u64>,
    pub rpc_url: String,
    pub contract_address: Option<String>,
    pub explorer_url: Option<String>,
    /// Why campaigns cannot be fetched with the current settings, if they cannot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub campaigns: Vec<CampaignSummary>,
    pub category: String,
    pub loaded: bool,
    pub fetching: bool,
}

impl From<&CampaignBoard> for BoardState {
    fn from(board: &CampaignBoard) -> Self {
        Self {
            campaigns: board.campaigns().to_vec(),
            category: board.selector().to_string(),
            loaded: board.is_loaded(),
            fetching: board.is_fetching(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub revision: u64,
    pub network_status: NetworkStatus,
    pub landing: BoardState,
    pub browse: BoardState,
}

// ============================================================================
// App state manager
// ============================================================================

pub struct AppStateManager {
    app_data_dir: PathBuf,
    settings: Option<NetworkSettings>,
    landing: CampaignBoard,
    browse: CampaignBoard,
    revision: u64,
}

impl AppStateManager {
    pub fn new(app_data_dir: PathBuf) -> Self {
        Self {
            app_data_dir,
            settings: None,
            landing: CampaignBoard::new(View::Landing),
            browse: CampaignBoard::new(View::Browse),
            revision: 0,
        }
    }

    /// Load saved network settings, if any.
    pub fn initialize(&mut self) {
        self.settings = Self::load_network_config(&self.app_data_dir);
    }

    pub fn is_first_launch(&self) -> bool {
        !self.app_data_dir.join(CONFIG_FILE).exists()
    }

    pub fn is_initialized(&self) -> bool {
        self.settings.is_some()
    }

    pub fn network(&self) -> Option<Network> {
        self.settings.as_ref().map(|s| s.network)
    }

    pub fn settings(&self) -> Option<&NetworkSettings> {
        self.settings.as_ref()
    }

    /// Switch network. Displayed lists belong to the previous network, so both
    /// boards are cleared and their in-flight fetches invalidated.
    pub fn set_network(&mut self, settings: NetworkSettings) -> AppState {
        self.save_network_config(&settings);
        self.settings = Some(settings);
        self.landing.reset();
        self.browse.reset();
        self.bump_revision();
        self.snapshot()
    }

    pub fn discovery_config(&self) -> Result<DiscoveryConfig, SdkError> {
        self.settings
            .as_ref()
            .ok_or_else(|| SdkError::Config("no network selected".to_string()))?
            .discovery_config()
    }

    pub fn board(&self, view: View) -> &CampaignBoard {
        match view {
            View::Landing => &self.landing,
            View::Browse => &self.browse,
        }
    }

    pub fn board_mut(&mut self, view: View) -> &mut CampaignBoard {
        match view {
            View::Landing => &mut self.landing,
            View::Browse => &mut self.browse,
        }
    }

    pub fn network_status(&self) -> NetworkStatus {
        let network = self.network();
        let config = self.discovery_config();
        NetworkStatus {
            network: network
                .map(|n| n.as_str().to_string())
                .unwrap_or_else(|| "unknown".into()),
            is_mainnet: network.map(|n| n.is_mainnet()).unwrap_or(false),
            chain_id: network.map(|n| n.chain_id()),
            rpc_url: config
                .as_ref()
                .map(|c| c.rpc_url.clone())
                .unwrap_or_default(),
            contract_address: config
                .as_ref()
                .ok()
                .map(|c| c.contract_address.to_checksum(None)),
            explorer_url: network.and_then(|n| n.explorer_url()).map(str::to_string),
            config_error: config.err().map(|e| e.to_string()),
        }
    }

    pub fn snapshot(&self) -> AppState {
        AppState {
            revision: self.revision,
            network_status: self.network_status(),
            landing: BoardState::from(&self.landing),
            browse: BoardState::from(&self.browse),
        }
    }

    pub fn bump_revision(&mut self) {
        self.revision += 1;
    }

    // --- Persistence helpers ---

    fn load_network_config(dir: &Path) -> Option<NetworkSettings> {
        let path = dir.join(CONFIG_FILE);
        let contents = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("ignoring unreadable {CONFIG_FILE}: {e}");
                None
            }
        }
    }

    fn save_network_config(&self, settings: &NetworkSettings) {
        let path = self.app_data_dir.join(CONFIG_FILE);
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(settings) {
            Ok(json) => {
                if let Err(e) = fs::write(&path, json) {
                    log::warn!("failed to write {}: {e}", path.display());
                }
            }
            Err(e) => log::warn!("failed to serialize network settings: {e}"),
        }
    }
}
