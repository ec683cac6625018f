//! Error types for the HTTP adapter

use thiserror::Error;

/// Result type alias for HTTP adapter construction
pub type Result<T> = std::result::Result<T, HttpError>;

/// Errors that can occur while building an HTTP gateway
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
