//! Health metric identifiers and their field descriptors

use serde::{Deserialize, Serialize};

/// Whether a metric is entered as a count or a continuous measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Whole-number value (counts, mg/dL, years)
    Int,
    /// Continuous value
    Float,
}

/// Presentation metadata for one metric.
///
/// `min`/`max` describe a plausible range for input affordances. They are
/// hints only: out-of-range values are still stored and submitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
    pub min: f64,
    pub max: f64,
}

impl FieldSpec {
    /// Check whether a value lies within the declared plausible range
    pub fn in_range(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Human-readable range hint, e.g. `0–300`
    pub fn range_hint(&self) -> String {
        match self.kind {
            FieldKind::Int => format!("{}–{}", self.min, self.max),
            FieldKind::Float => format!("{:.1}–{:.1}", self.min, self.max),
        }
    }
}

/// One of the eight health metrics collected by the assessment form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Pregnancies,
    Glucose,
    BloodPressure,
    SkinThickness,
    Insulin,
    #[serde(rename = "BMI")]
    Bmi,
    DiabetesPedigreeFunction,
    Age,
}

impl Metric {
    /// All metrics in form display order
    pub const ALL: [Metric; 8] = [
        Metric::Pregnancies,
        Metric::Glucose,
        Metric::BloodPressure,
        Metric::SkinThickness,
        Metric::Insulin,
        Metric::Bmi,
        Metric::DiabetesPedigreeFunction,
        Metric::Age,
    ];

    /// JSON key used on the wire
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Pregnancies => "Pregnancies",
            Metric::Glucose => "Glucose",
            Metric::BloodPressure => "BloodPressure",
            Metric::SkinThickness => "SkinThickness",
            Metric::Insulin => "Insulin",
            Metric::Bmi => "BMI",
            Metric::DiabetesPedigreeFunction => "DiabetesPedigreeFunction",
            Metric::Age => "Age",
        }
    }

    /// Position of this metric in [`Metric::ALL`]
    pub fn index(&self) -> usize {
        Metric::ALL
            .iter()
            .position(|m| m == self)
            .unwrap_or_default()
    }

    /// Field descriptor for this metric
    pub fn spec(&self) -> &'static FieldSpec {
        match self {
            Metric::Pregnancies => &PREGNANCIES,
            Metric::Glucose => &GLUCOSE,
            Metric::BloodPressure => &BLOOD_PRESSURE,
            Metric::SkinThickness => &SKIN_THICKNESS,
            Metric::Insulin => &INSULIN,
            Metric::Bmi => &BMI,
            Metric::DiabetesPedigreeFunction => &PEDIGREE,
            Metric::Age => &AGE,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

const PREGNANCIES: FieldSpec = FieldSpec {
    label: "Pregnancies",
    description: "Number of times pregnant",
    kind: FieldKind::Int,
    min: 0.0,
    max: 20.0,
};

const GLUCOSE: FieldSpec = FieldSpec {
    label: "Glucose Level",
    description: "Plasma glucose concentration (mg/dL)",
    kind: FieldKind::Int,
    min: 0.0,
    max: 300.0,
};

const BLOOD_PRESSURE: FieldSpec = FieldSpec {
    label: "Blood Pressure",
    description: "Diastolic blood pressure (mmHg)",
    kind: FieldKind::Int,
    min: 0.0,
    max: 200.0,
};

const SKIN_THICKNESS: FieldSpec = FieldSpec {
    label: "Skin Thickness",
    description: "Triceps skin fold thickness (mm)",
    kind: FieldKind::Int,
    min: 0.0,
    max: 100.0,
};

const INSULIN: FieldSpec = FieldSpec {
    label: "Insulin",
    description: "2-Hour serum insulin (μU/mL)",
    kind: FieldKind::Int,
    min: 0.0,
    max: 1000.0,
};

const BMI: FieldSpec = FieldSpec {
    label: "BMI",
    description: "Body mass index (weight in kg/(height in m)²)",
    kind: FieldKind::Float,
    min: 0.0,
    max: 70.0,
};

const PEDIGREE: FieldSpec = FieldSpec {
    label: "Diabetes Pedigree Function",
    description: "Diabetes pedigree function score",
    kind: FieldKind::Float,
    min: 0.0,
    max: 3.0,
};

const AGE: FieldSpec = FieldSpec {
    label: "Age",
    description: "Age in years",
    kind: FieldKind::Int,
    min: 1.0,
    max: 120.0,
};
