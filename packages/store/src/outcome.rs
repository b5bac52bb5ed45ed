//! Outcome interpretation: one classifier call, one interpreted label.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classifier::Classifier;
use crate::features::FeatureVector;

/// Interpreted screening outcome shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Positive => "Positive",
            Label::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single screening. Derived per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionResult {
    pub label: Label,
    /// The classifier's raw output label.
    pub raw: i64,
}

/// A classifier call failed. Carries a display message only; the caller
/// recovers by showing it and waiting for a resubmission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error during prediction: {message}")]
pub struct PredictionError {
    pub message: String,
}

/// Run one screening: a single-vector batch through `model`, with output `1`
/// mapped to [`Label::Positive`] and anything else to [`Label::Negative`].
/// Every classifier failure is surfaced here as a [`PredictionError`]; this
/// function never panics on model misbehavior.
pub fn run_model(
    model: &dyn Classifier,
    features: &FeatureVector,
) -> Result<PredictionResult, PredictionError> {
    let batch = vec![features.values().to_vec()];
    let labels = model.predict(&batch).map_err(|e| PredictionError {
        message: e.to_string(),
    })?;
    let raw = labels.first().copied().ok_or_else(|| PredictionError {
        message: "classifier returned an empty batch".to_string(),
    })?;
    let label = if raw == 1 {
        Label::Positive
    } else {
        Label::Negative
    };
    Ok(PredictionResult { label, raw })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ClassifierError;
    use crate::features::{DiabetesForm, PredictionForm};

    /// Test double returning a fixed response.
    struct Fixed(Result<Vec<i64>, fn() -> ClassifierError>);

    impl Classifier for Fixed {
        fn predict(&self, _batch: &[Vec<f64>]) -> Result<Vec<i64>, ClassifierError> {
            match &self.0 {
                Ok(labels) => Ok(labels.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    fn vector() -> FeatureVector {
        DiabetesForm {
            pregnancies: "2".into(),
            glucose: "120".into(),
            blood_pressure: "70".into(),
            skin_thickness: "20".into(),
            insulin: "79".into(),
            bmi: "25.5".into(),
            diabetes_pedigree_function: "0.5".into(),
            age: "33".into(),
        }
        .feature_vector()
        .unwrap()
    }

    #[test]
    fn one_maps_to_positive() {
        let result = run_model(&Fixed(Ok(vec![1])), &vector()).unwrap();
        assert_eq!(result.label, Label::Positive);
        assert_eq!(result.raw, 1);
    }

    #[test]
    fn zero_maps_to_negative() {
        let result = run_model(&Fixed(Ok(vec![0])), &vector()).unwrap();
        assert_eq!(result.label, Label::Negative);
    }

    #[test]
    fn any_other_output_maps_to_negative() {
        let result = run_model(&Fixed(Ok(vec![-3])), &vector()).unwrap();
        assert_eq!(result.label, Label::Negative);
    }

    #[test]
    fn classifier_failure_becomes_a_prediction_error() {
        let err = run_model(
            &Fixed(Err(|| ClassifierError::ShapeMismatch {
                expected: 8,
                got: 3,
            })),
            &vector(),
        )
        .unwrap_err();
        assert_eq!(
            err.message,
            "expected 8 features, got 3",
        );
    }

    #[test]
    fn empty_batch_output_is_an_error_not_a_panic() {
        let err = run_model(&Fixed(Ok(vec![])), &vector()).unwrap_err();
        assert!(err.message.contains("empty batch"));
    }
}
