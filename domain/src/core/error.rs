//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid prediction value: {0}")]
    InvalidPrediction(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_prediction_display() {
        let error = DomainError::InvalidPrediction("\"yes\"".to_string());
        assert_eq!(error.to_string(), "Invalid prediction value: \"yes\"");
    }
}
