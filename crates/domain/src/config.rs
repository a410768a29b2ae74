//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_DETECT_URL, DEFAULT_TIMEOUT_SECS};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QiwiConfig {
    /// Access token issued at <https://qiwi.com/api>
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
    #[serde(default)]
    pub client: QiwiClientConfig,
}

/// Endpoints and transport settings for the API client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QiwiClientConfig {
    /// Origin every API path is resolved against (trailing slash included)
    pub api_base_url: String,
    /// Absolute URL of the mobile carrier detection endpoint
    pub detect_url: String,
    pub timeout_secs: u64,
    pub user_agent: Option<String>,
}

impl Default for QiwiClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            detect_url: DEFAULT_DETECT_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}
