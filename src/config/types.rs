// Configuration type definitions

use serde::Deserialize;

use crate::api::DEFAULT_ENDPOINT;

/// Search API configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            endpoint: default_endpoint(),
        }
    }
}

/// Search behavior configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct SearchConfig {
    /// Query submitted automatically on startup when no query was given on
    /// the command line. Empty means start idle.
    #[serde(default)]
    pub default_query: String,
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
}
