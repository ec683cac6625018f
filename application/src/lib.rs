//! Application layer for sugar-signal
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::prediction_gateway::{GatewayError, PredictionGateway};
pub use use_cases::relay_prediction::{RelayError, RelayPredictionUseCase};
pub use use_cases::submit_assessment::{RETRY_MESSAGE, SubmitAssessmentUseCase, SubmitError};
