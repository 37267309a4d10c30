use serde::{Deserialize, Serialize};

/// Presentation settings for the role shells.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    #[serde(default = "default_brand")]
    pub brand: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
        }
    }
}

fn default_brand() -> String {
    "PrintDesk".to_string()
}

/// Where the persisted session lives.
///
/// `file: None` means the platform data directory chosen by the client.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SessionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Top-level config file structure matching `config.toml`.
///
/// Every section defaults so a missing or partial file still loads.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub session: SessionConfig,
}
