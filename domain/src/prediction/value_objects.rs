//! Prediction value objects

use super::outcome::Outcome;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Risk classification derived from a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// The model returned exactly zero
    Low,
    /// The model returned any nonzero value
    Elevated,
}

impl RiskLevel {
    /// The fixed outcome panel shown for this level
    pub fn outcome(&self) -> &'static Outcome {
        match self {
            RiskLevel::Low => &Outcome::LOW,
            RiskLevel::Elevated => &Outcome::ELEVATED,
        }
    }

    pub fn is_elevated(&self) -> bool {
        matches!(self, RiskLevel::Elevated)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Elevated => write!(f, "elevated"),
        }
    }
}

/// Value returned by the remote model for one assessment (Value Object)
///
/// Only held for the lifetime of one rendered response. The value is not
/// interpreted beyond its equality to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prediction(f64);

impl Prediction {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Zero selects the low-risk panel; anything else selects the elevated one
    pub fn risk_level(&self) -> RiskLevel {
        if self.0 == 0.0 {
            RiskLevel::Low
        } else {
            RiskLevel::Elevated
        }
    }

    /// Build from the `prediction` value of a service response.
    ///
    /// Only JSON numbers are accepted.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, DomainError> {
        value
            .as_f64()
            .map(Self)
            .ok_or_else(|| DomainError::InvalidPrediction(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_zero_is_low_risk() {
        assert_eq!(Prediction::new(0.0).risk_level(), RiskLevel::Low);
        assert_eq!(Prediction::new(-0.0).risk_level(), RiskLevel::Low);
    }

    #[test]
    fn test_any_nonzero_is_elevated() {
        for value in [1.0, 2.0, -1.0, 0.0001] {
            assert_eq!(Prediction::new(value).risk_level(), RiskLevel::Elevated);
        }
    }

    #[test]
    fn test_from_json_numbers() {
        assert_eq!(Prediction::from_json(&json!(0)).unwrap().value(), 0.0);
        assert_eq!(Prediction::from_json(&json!(1)).unwrap().value(), 1.0);
        assert_eq!(Prediction::from_json(&json!(0.75)).unwrap().value(), 0.75);
    }

    #[test]
    fn test_from_json_rejects_non_numbers() {
        for value in [json!(null), json!("1"), json!(true), json!([1]), json!({"v": 1})] {
            assert!(matches!(
                Prediction::from_json(&value),
                Err(DomainError::InvalidPrediction(_))
            ));
        }
    }

    #[test]
    fn test_outcome_selection() {
        assert_eq!(RiskLevel::Low.outcome().headline, "Low Diabetes Risk");
        assert_eq!(
            RiskLevel::Elevated.outcome().headline,
            "Higher Diabetes Risk Detected"
        );
        assert!(RiskLevel::Elevated.is_elevated());
    }
}
