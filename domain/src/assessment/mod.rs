//! Assessment input and the metadata describing its fields.
//!
//! - [`metric::Metric`]: the eight health metrics and their [`metric::FieldSpec`]s
//! - [`input::AssessmentInput`]: the record submitted for prediction
//! - [`parse`]: permissive text-to-number coercion used by the form

pub mod input;
pub mod metric;
pub mod parse;
