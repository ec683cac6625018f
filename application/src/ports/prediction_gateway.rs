//! Prediction gateway port
//!
//! Defines the interface for reaching a prediction endpoint over the network.
//! The same contract serves both hops: the proxy talks to the remote model
//! through it, and the form talks to the proxy through it.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while requesting a prediction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Endpoint returned HTTP {0}")]
    Status(u16),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Gateway to a prediction endpoint
///
/// Implementations POST the body as JSON and hand back the `prediction`
/// field of the JSON response, or `Value::Null` when the field is absent.
/// They must not retry and must not impose a timeout.
#[async_trait]
pub trait PredictionGateway: Send + Sync {
    /// Send one request and return the raw `prediction` value
    async fn request_prediction(&self, body: &Value) -> Result<Value, GatewayError>;

    /// Endpoint this gateway talks to (for logging)
    fn endpoint(&self) -> &str;
}
