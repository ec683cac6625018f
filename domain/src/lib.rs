//! Domain layer for sugar-signal
//!
//! This crate contains the core entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Assessment Input
//!
//! The eight health metrics a user enters into the form. Each metric carries
//! a [`FieldSpec`] describing its label and plausible range. Ranges are
//! input affordances only and are never enforced.
//!
//! ## Prediction
//!
//! The binary risk classification returned by the remote model:
//!
//! - **Low**: the prediction equals zero
//! - **Elevated**: any other value
//!
//! Each [`RiskLevel`] maps to a fixed [`Outcome`] panel with guidance bullets.

pub mod assessment;
pub mod config;
pub mod core;
pub mod prediction;

// Re-export commonly used types
pub use assessment::{
    input::AssessmentInput,
    metric::{FieldKind, FieldSpec, Metric},
    parse::{format_metric_value, parse_metric_value},
};
pub use config::validation::{ConfigIssue, Severity};
pub use core::error::DomainError;
pub use prediction::{
    outcome::Outcome,
    value_objects::{Prediction, RiskLevel},
};
