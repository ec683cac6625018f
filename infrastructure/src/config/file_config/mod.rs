//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod form;
mod logging;
mod server;
mod upstream;

pub use form::{DEFAULT_PROXY_URL, FileFormConfig};
pub use logging::FileLoggingConfig;
pub use server::{DEFAULT_BIND, FileServerConfig};
pub use upstream::{DEFAULT_UPSTREAM_URL, FileUpstreamConfig};

use reqwest::Url;
use serde::{Deserialize, Serialize};
use sugar_signal_domain::ConfigIssue;
use thiserror::Error;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote prediction service
    pub upstream: FileUpstreamConfig,
    /// Local proxy listener
    pub server: FileServerConfig,
    /// Terminal form settings
    pub form: FileFormConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

/// The configuration sections a command actually reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// `serve`: `[upstream]` and `[server]`
    Serve,
    /// `form`: `[form]` (logging settings need no validation)
    Form,
}

/// Raised when a configuration contains error-severity issues
#[derive(Error, Debug)]
#[error("invalid configuration:\n{}", format_issues(.issues))]
pub struct ConfigValidationError {
    pub issues: Vec<ConfigIssue>,
}

fn format_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("  - {}", i))
        .collect::<Vec<_>>()
        .join("\n")
}

impl FileConfig {
    /// Validate the sections used by `scope`, returning all detected issues.
    ///
    /// Sections outside the scope are not checked, so a broken `[server]`
    /// never blocks the form.
    pub fn validate(&self, scope: ConfigScope) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        match scope {
            ConfigScope::Serve => {
                issues.extend(self.upstream.validate());
                issues.extend(self.server.parse_bind().1);
            }
            ConfigScope::Form => issues.extend(self.form.validate()),
        }
        issues
    }

    /// Fail if any error-severity issue is present; warnings are returned.
    pub fn ensure_valid(
        &self,
        scope: ConfigScope,
    ) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate(scope).into_iter().partition(|i| i.is_error());
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError { issues: errors })
        }
    }
}

/// Check that `value` is an absolute http(s) URL
pub(crate) fn check_http_url(field: &str, value: &str) -> Option<ConfigIssue> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => None,
        Ok(url) => Some(ConfigIssue::error(
            field,
            format!("unsupported scheme '{}' in '{}'", url.scheme(), value),
        )),
        Err(e) => Some(ConfigIssue::error(
            field,
            format!("'{}' is not a valid URL: {}", value, e),
        )),
    }
}
