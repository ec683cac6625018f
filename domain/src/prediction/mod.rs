//! Prediction results and the outcome panels they select.

pub mod outcome;
pub mod value_objects;
