//! HTTP adapters
//!
//! [`gateway::HttpPredictionGateway`] implements the application's
//! `PredictionGateway` port on top of `reqwest`.

pub mod error;
pub mod gateway;
