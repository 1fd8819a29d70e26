use serde::{Deserialize, Serialize};

/// User configuration from `Pathshala Settings.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    #[serde(rename = "Pathshala_Settings")]
    pub settings: Settings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path to the catalog document.
    #[serde(rename = "Catalog File", default = "default_catalog_file")]
    pub catalog_file: String,

    /// Directory holding the persisted state files.
    #[serde(rename = "State Dir", default = "default_state_dir")]
    pub state_dir: String,

    #[serde(rename = "Log Dir", default = "default_log_dir")]
    pub log_dir: String,

    #[serde(rename = "Debug Mode", default)]
    pub debug_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_file: default_catalog_file(),
            state_dir: default_state_dir(),
            log_dir: default_log_dir(),
            debug_mode: false,
        }
    }
}

fn default_catalog_file() -> String {
    "data/guides.json".to_string()
}

fn default_state_dir() -> String {
    "Pathshala Data/state".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}
