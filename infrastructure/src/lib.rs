//! Infrastructure layer for sugar-signal
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigScope, ConfigSource, ConfigValidationError, FileConfig, FileFormConfig,
    FileLoggingConfig, FileServerConfig, FileUpstreamConfig,
};
pub use http::{
    error::{HttpError, Result},
    gateway::HttpPredictionGateway,
};
