//! Outcome panel content.
//!
//! The text shown for each [`RiskLevel`](super::value_objects::RiskLevel).
//! It is guidance, never a diagnosis.

/// Fixed content of one outcome panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub title: &'static str,
    pub headline: &'static str,
    pub message: &'static str,
    pub guidance: [&'static str; 4],
}

impl Outcome {
    pub const LOW: Outcome = Outcome {
        title: "Excellent News!",
        headline: "Low Diabetes Risk",
        message: "Based on your health information, our AI model indicates you have a low risk \
                  of diabetes. Keep up the great work with your healthy lifestyle!",
        guidance: [
            "Continue regular physical activity",
            "Maintain a balanced diet",
            "Schedule regular health check-ups",
            "Monitor your weight and blood pressure",
        ],
    };

    pub const ELEVATED: Outcome = Outcome {
        title: "Important Health Alert",
        headline: "Higher Diabetes Risk Detected",
        message: "Based on your health information, our AI model indicates you may have a \
                  higher risk of diabetes. This is not a diagnosis, but we strongly recommend \
                  consulting with a healthcare professional.",
        guidance: [
            "Schedule an appointment with your doctor",
            "Request comprehensive diabetes screening",
            "Discuss lifestyle modifications",
            "Consider dietary consultation",
        ],
    };
}
