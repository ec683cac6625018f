//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
///
/// Only consulted by the terminal form, which cannot log to the terminal
/// it draws on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for the form's log file (default: platform cache dir)
    pub directory: Option<PathBuf>,
    /// Log file name inside `directory`
    pub file_name: String,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: "sugar-signal.log".to_string(),
        }
    }
}

impl FileLoggingConfig {
    /// Directory the form logs to
    ///
    /// Falls back to `<cache dir>/sugar-signal`, then the working directory.
    pub fn resolved_directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .map(|d| d.join("sugar-signal"))
                .unwrap_or_else(|| PathBuf::from("."))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_directory_wins() {
        let config = FileLoggingConfig {
            directory: Some(PathBuf::from("/var/log/sugar")),
            ..Default::default()
        };
        assert_eq!(config.resolved_directory(), PathBuf::from("/var/log/sugar"));
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(FileLoggingConfig::default().file_name, "sugar-signal.log");
    }
}
