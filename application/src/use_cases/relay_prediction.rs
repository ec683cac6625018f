//! Relay Prediction use case.
//!
//! The proxy hop: forwards whatever JSON the caller sent to the remote
//! prediction service and returns its `prediction` value unchanged.
//!
//! The body is not validated. Missing or malformed fields reach the remote
//! service as-is and any rejection comes back as an upstream failure.

use crate::ports::prediction_gateway::{GatewayError, PredictionGateway};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while relaying a prediction request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Upstream failure: {0}")]
    UpstreamFailure(#[from] GatewayError),
}

/// Use case for relaying one request to the remote prediction service.
#[derive(Clone)]
pub struct RelayPredictionUseCase {
    upstream: Arc<dyn PredictionGateway>,
}

impl RelayPredictionUseCase {
    pub fn new(upstream: Arc<dyn PredictionGateway>) -> Self {
        Self { upstream }
    }

    /// Forward `body` verbatim and return the upstream `prediction` value.
    pub async fn execute(&self, body: &Value) -> Result<Value, RelayError> {
        debug!("Relaying prediction request to {}", self.upstream.endpoint());

        match self.upstream.request_prediction(body).await {
            Ok(prediction) => {
                info!("Upstream prediction: {}", prediction);
                Ok(prediction)
            }
            Err(e) => {
                warn!("Upstream prediction failed: {}", e);
                Err(RelayError::UpstreamFailure(e))
            }
        }
    }
}
