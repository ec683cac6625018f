//! Use cases
//!
//! - [`relay_prediction`]: the proxy hop: forward a body to the remote model
//! - [`submit_assessment`]: the form hop: submit an assessment to the proxy

pub mod relay_prediction;
pub mod submit_assessment;
