//! Assessment input entity

use super::metric::Metric;
use serde::{Deserialize, Serialize};

/// The eight health metrics describing one user (Entity)
///
/// Built fresh with fixed defaults whenever the form starts, mutated in place
/// as fields are edited and discarded after submission. Serializes with the
/// wire keys expected by the prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    #[serde(rename = "Pregnancies")]
    pub pregnancies: f64,
    #[serde(rename = "Glucose")]
    pub glucose: f64,
    #[serde(rename = "BloodPressure")]
    pub blood_pressure: f64,
    #[serde(rename = "SkinThickness")]
    pub skin_thickness: f64,
    #[serde(rename = "Insulin")]
    pub insulin: f64,
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "DiabetesPedigreeFunction")]
    pub diabetes_pedigree_function: f64,
    #[serde(rename = "Age")]
    pub age: f64,
}

impl Default for AssessmentInput {
    fn default() -> Self {
        Self {
            pregnancies: 1.0,
            glucose: 120.0,
            blood_pressure: 80.0,
            skin_thickness: 20.0,
            insulin: 80.0,
            bmi: 25.0,
            diabetes_pedigree_function: 0.5,
            age: 30.0,
        }
    }
}

impl AssessmentInput {
    /// Read the value stored for a metric
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Pregnancies => self.pregnancies,
            Metric::Glucose => self.glucose,
            Metric::BloodPressure => self.blood_pressure,
            Metric::SkinThickness => self.skin_thickness,
            Metric::Insulin => self.insulin,
            Metric::Bmi => self.bmi,
            Metric::DiabetesPedigreeFunction => self.diabetes_pedigree_function,
            Metric::Age => self.age,
        }
    }

    /// Overwrite the value stored for a metric
    pub fn set(&mut self, metric: Metric, value: f64) {
        let slot = match metric {
            Metric::Pregnancies => &mut self.pregnancies,
            Metric::Glucose => &mut self.glucose,
            Metric::BloodPressure => &mut self.blood_pressure,
            Metric::SkinThickness => &mut self.skin_thickness,
            Metric::Insulin => &mut self.insulin,
            Metric::Bmi => &mut self.bmi,
            Metric::DiabetesPedigreeFunction => &mut self.diabetes_pedigree_function,
            Metric::Age => &mut self.age,
        };
        *slot = value;
    }

    /// Iterate over `(metric, value)` pairs in display order
    pub fn values(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.into_iter().map(move |m| (m, self.get(m)))
    }

    /// Metrics whose value lies outside the declared plausible range
    pub fn out_of_range(&self) -> Vec<Metric> {
        self.values()
            .filter(|(m, v)| !m.spec().in_range(*v))
            .map(|(m, _)| m)
            .collect()
    }

    /// Serialize into the JSON object sent to the prediction service
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .values()
            .map(|(m, v)| (m.key().to_string(), serde_json::Value::from(v)))
            .collect();
        serde_json::Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let input = AssessmentInput::default();
        assert_eq!(input.get(Metric::Pregnancies), 1.0);
        assert_eq!(input.get(Metric::Glucose), 120.0);
        assert_eq!(input.get(Metric::BloodPressure), 80.0);
        assert_eq!(input.get(Metric::SkinThickness), 20.0);
        assert_eq!(input.get(Metric::Insulin), 80.0);
        assert_eq!(input.get(Metric::Bmi), 25.0);
        assert_eq!(input.get(Metric::DiabetesPedigreeFunction), 0.5);
        assert_eq!(input.get(Metric::Age), 30.0);
    }

    #[test]
    fn test_set_only_touches_one_field() {
        let mut input = AssessmentInput::default();
        input.set(Metric::Bmi, 31.4);
        assert_eq!(input.bmi, 31.4);
        assert_eq!(input.glucose, 120.0);
        assert_eq!(input.age, 30.0);
    }

    #[test]
    fn test_to_json_has_all_wire_keys() {
        let json = AssessmentInput::default().to_json();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 8);
        for metric in Metric::ALL {
            assert!(obj.contains_key(metric.key()), "missing {}", metric);
        }
        assert_eq!(obj["BMI"], serde_json::json!(25.0));
        assert_eq!(obj["DiabetesPedigreeFunction"], serde_json::json!(0.5));
    }

    #[test]
    fn test_to_json_keeps_display_order() {
        let json = AssessmentInput::default().to_json();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        let expected: Vec<&str> = Metric::ALL.iter().map(|m| m.key()).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_serde_matches_to_json() {
        let input = AssessmentInput::default();
        assert_eq!(serde_json::to_value(input).unwrap(), input.to_json());
    }

    #[test]
    fn test_deserialize_wire_format() {
        let json = r#"{"Pregnancies":2,"Glucose":150,"BloodPressure":70,"SkinThickness":30,
            "Insulin":0,"BMI":33.6,"DiabetesPedigreeFunction":0.627,"Age":50}"#;
        let input: AssessmentInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.glucose, 150.0);
        assert_eq!(input.bmi, 33.6);
    }

    #[test]
    fn test_out_of_range_is_reported_not_rejected() {
        let mut input = AssessmentInput::default();
        assert!(input.out_of_range().is_empty());
        input.set(Metric::Age, 0.0);
        input.set(Metric::Glucose, 450.0);
        assert_eq!(input.out_of_range(), vec![Metric::Glucose, Metric::Age]);
        assert_eq!(input.age, 0.0);
    }
}
