//! Form configuration from TOML (`[form]` section)

use super::check_http_url;
use serde::{Deserialize, Serialize};
use sugar_signal_domain::ConfigIssue;

pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:3000/api/predict";

/// Raw form configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFormConfig {
    /// Proxy endpoint the form submits to
    pub proxy_url: String,
}

impl Default for FileFormConfig {
    fn default() -> Self {
        Self {
            proxy_url: DEFAULT_PROXY_URL.to_string(),
        }
    }
}

impl FileFormConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues: Vec<_> = check_http_url("form.proxy_url", &self.proxy_url)
            .into_iter()
            .collect();

        if issues.is_empty() && !self.proxy_url.trim_end_matches('/').ends_with("/api/predict") {
            issues.push(ConfigIssue::warning(
                "form.proxy_url",
                format!(
                    "'{}' does not end in /api/predict; is it really the proxy route?",
                    self.proxy_url
                ),
            ));
        }

        issues
    }
}
