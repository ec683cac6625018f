//! Configuration file loading for sugar-signal
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `SUGAR_SIGNAL_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./sugar-signal.toml` or `./.sugar-signal.toml`
//! 4. Global: `$XDG_CONFIG_HOME/sugar-signal/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigScope, ConfigValidationError, DEFAULT_BIND, DEFAULT_PROXY_URL, DEFAULT_UPSTREAM_URL, FileConfig,
    FileFormConfig, FileLoggingConfig, FileServerConfig, FileUpstreamConfig,
};
pub use loader::{ConfigLoader, ConfigSource};
