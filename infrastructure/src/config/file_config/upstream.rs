//! Upstream configuration from TOML (`[upstream]` section)

use super::check_http_url;
use serde::{Deserialize, Serialize};
use sugar_signal_domain::ConfigIssue;

/// The hosted prediction service
pub const DEFAULT_UPSTREAM_URL: &str = "https://sugarsignal-production.up.railway.app/predict";

/// Raw upstream configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUpstreamConfig {
    /// Prediction endpoint the proxy forwards to
    pub url: String,
}

impl Default for FileUpstreamConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_UPSTREAM_URL.to_string(),
        }
    }
}

impl FileUpstreamConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        check_http_url("upstream.url", &self.url).into_iter().collect()
    }
}
