//! Submit Assessment use case.
//!
//! The form hop: serializes the full [`AssessmentInput`] and issues exactly
//! one request to the proxy. Every failure collapses into
//! [`SubmitError::UpstreamFailure`]; callers show a single retry message.

use crate::ports::prediction_gateway::{GatewayError, PredictionGateway};
use sugar_signal_domain::{AssessmentInput, DomainError, Prediction};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Message shown to the user for any failed submission
pub const RETRY_MESSAGE: &str = "Failed to get prediction. Please try again.";

/// Errors that can occur while submitting an assessment
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("Upstream failure: {0}")]
    UpstreamFailure(String),
}

impl SubmitError {
    /// The text displayed to the user for this error
    pub fn user_message(&self) -> &'static str {
        RETRY_MESSAGE
    }
}

impl From<GatewayError> for SubmitError {
    fn from(e: GatewayError) -> Self {
        SubmitError::UpstreamFailure(e.to_string())
    }
}

impl From<DomainError> for SubmitError {
    fn from(e: DomainError) -> Self {
        SubmitError::UpstreamFailure(e.to_string())
    }
}

/// Use case for submitting one assessment and reading back its prediction.
#[derive(Clone)]
pub struct SubmitAssessmentUseCase {
    proxy: Arc<dyn PredictionGateway>,
}

impl SubmitAssessmentUseCase {
    pub fn new(proxy: Arc<dyn PredictionGateway>) -> Self {
        Self { proxy }
    }

    /// Submit `input` and interpret the returned value as a [`Prediction`].
    pub async fn execute(&self, input: &AssessmentInput) -> Result<Prediction, SubmitError> {
        let body = input.to_json();
        debug!("Submitting assessment to {}: {}", self.proxy.endpoint(), body);

        let value = self.proxy.request_prediction(&body).await.map_err(|e| {
            warn!("Prediction request failed: {}", e);
            SubmitError::from(e)
        })?;

        let prediction = Prediction::from_json(&value).map_err(|e| {
            warn!("Unusable prediction in response: {}", e);
            SubmitError::from(e)
        })?;

        info!(
            "Prediction received: {} ({} risk)",
            prediction.value(),
            prediction.risk_level()
        );
        Ok(prediction)
    }
}
