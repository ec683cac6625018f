//! Proxy server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use sugar_signal_domain::ConfigIssue;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Raw server configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Address the proxy listens on
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl FileServerConfig {
    /// Parse the bind address, reporting an issue if it is malformed
    pub fn parse_bind(&self) -> (Option<SocketAddr>, Vec<ConfigIssue>) {
        match self.bind.parse::<SocketAddr>() {
            Ok(addr) => (Some(addr), Vec::new()),
            Err(e) => (
                None,
                vec![ConfigIssue::error(
                    "server.bind",
                    format!("'{}' is not a socket address: {}", self.bind, e),
                )],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_parses() {
        let (addr, issues) = FileServerConfig::default().parse_bind();
        assert_eq!(addr, Some("127.0.0.1:3000".parse().unwrap()));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_hostname_is_rejected() {
        let config = FileServerConfig {
            bind: "localhost:3000".to_string(),
        };
        let (addr, issues) = config.parse_bind();
        assert!(addr.is_none());
        assert_eq!(issues[0].field, "server.bind");
    }
}
