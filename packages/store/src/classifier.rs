//! # Classifiers — the opaque model seam
//!
//! Every screening runs through the [`Classifier`] trait, which exposes the
//! single operation the rest of the pipeline is allowed to depend on: score a
//! batch of fixed-length numeric vectors and return one integer label per
//! vector. Everything else about a model (how it was trained, what its
//! parameters mean) stays behind the trait, so a model can be swapped without
//! touching the forms, the handlers, or the report.
//!
//! ## [`LinearClassifier`]
//!
//! The shipped implementation: a logistic-regression scorer whose parameters
//! are exported to a TOML file, one file per disease:
//!
//! ```toml
//! weights = [0.12, -0.03, 0.4]
//! bias = -1.5
//! threshold = 0.5   # optional, defaults to 0.5
//! ```
//!
//! [`LinearClassifier::from_path`] loads and validates a parameter file;
//! `predict` rejects vectors whose length differs from `weights.len()` and
//! vectors containing non-finite values.
//!
//! ## [`ModelSet`]
//!
//! The three loaded classifiers, routed by [`Disease`]. Built once at
//! startup from the configured model paths and passed by reference into the
//! handlers.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::Disease;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("expected {expected} features, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
    #[error("feature {index} is not a finite number")]
    NotNumeric { index: usize },
    #[error("failed to read model file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse model file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("model file {path} is invalid: {reason}")]
    Invalid { path: String, reason: String },
}

/// A trained binary classifier: a batch of feature vectors in, one integer
/// label (`0` or `1`) per vector out.
pub trait Classifier: Send + Sync {
    fn predict(&self, batch: &[Vec<f64>]) -> Result<Vec<i64>, ClassifierError>;
}

/// Logistic-regression classifier with parameters loaded from a TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearClassifier {
    weights: Vec<f64>,
    bias: f64,
    #[serde(default = "default_threshold")]
    threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

impl LinearClassifier {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ClassifierError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw, &path.display().to_string())
    }

    /// Parse parameters from TOML. `origin` labels the source in errors.
    pub fn from_toml_str(raw: &str, origin: &str) -> Result<Self, ClassifierError> {
        let model: LinearClassifier =
            toml::from_str(raw).map_err(|source| ClassifierError::Parse {
                path: origin.to_string(),
                source,
            })?;
        model.validate(origin)?;
        Ok(model)
    }

    pub fn feature_count(&self) -> usize {
        self.weights.len()
    }

    fn validate(&self, origin: &str) -> Result<(), ClassifierError> {
        let invalid = |reason: &str| ClassifierError::Invalid {
            path: origin.to_string(),
            reason: reason.to_string(),
        };
        if self.weights.is_empty() {
            return Err(invalid("weights must not be empty"));
        }
        if self.weights.iter().any(|w| !w.is_finite()) {
            return Err(invalid("weights must be finite"));
        }
        if !self.bias.is_finite() {
            return Err(invalid("bias must be finite"));
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(invalid("threshold must lie in [0, 1]"));
        }
        Ok(())
    }

    fn score_one(&self, features: &[f64]) -> Result<i64, ClassifierError> {
        if features.len() != self.weights.len() {
            return Err(ClassifierError::ShapeMismatch {
                expected: self.weights.len(),
                got: features.len(),
            });
        }
        if let Some(index) = features.iter().position(|v| !v.is_finite()) {
            return Err(ClassifierError::NotNumeric { index });
        }
        let z: f64 = self
            .weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias;
        let probability = 1.0 / (1.0 + (-z).exp());
        Ok(if probability >= self.threshold { 1 } else { 0 })
    }
}

impl Classifier for LinearClassifier {
    fn predict(&self, batch: &[Vec<f64>]) -> Result<Vec<i64>, ClassifierError> {
        batch.iter().map(|v| self.score_one(v)).collect()
    }
}

/// The loaded classifiers for all three screenings.
pub struct ModelSet {
    diabetes: Box<dyn Classifier>,
    heart_disease: Box<dyn Classifier>,
    parkinsons: Box<dyn Classifier>,
}

impl ModelSet {
    pub fn new(
        diabetes: impl Classifier + 'static,
        heart_disease: impl Classifier + 'static,
        parkinsons: impl Classifier + 'static,
    ) -> Self {
        Self {
            diabetes: Box::new(diabetes),
            heart_disease: Box::new(heart_disease),
            parkinsons: Box::new(parkinsons),
        }
    }

    pub fn for_disease(&self, disease: Disease) -> &dyn Classifier {
        match disease {
            Disease::Diabetes => self.diabetes.as_ref(),
            Disease::HeartDisease => self.heart_disease.as_ref(),
            Disease::Parkinsons => self.parkinsons.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> LinearClassifier {
        // Fires iff the single feature exceeds 5.
        LinearClassifier::from_toml_str("weights = [1.0]\nbias = -5.0\n", "test").unwrap()
    }

    #[test]
    fn threshold_defaults_to_half() {
        let model = gate();
        assert_eq!(model.threshold, 0.5);
        assert_eq!(model.feature_count(), 1);
    }

    #[test]
    fn labels_flip_around_the_decision_boundary() {
        let model = gate();
        let labels = model.predict(&[vec![6.0], vec![4.0]]).unwrap();
        assert_eq!(labels, vec![1, 0]);
    }

    #[test]
    fn wrong_vector_length_is_a_shape_mismatch() {
        let err = gate().predict(&[vec![1.0, 2.0]]).unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::ShapeMismatch { expected: 1, got: 2 }
        ));
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let err = gate().predict(&[vec![f64::NAN]]).unwrap_err();
        assert!(matches!(err, ClassifierError::NotNumeric { index: 0 }));
    }

    #[test]
    fn malformed_toml_surfaces_the_origin() {
        let err = LinearClassifier::from_toml_str("weights = \"no\"", "diabetes.toml").unwrap_err();
        match err {
            ClassifierError::Parse { path, .. } => assert_eq!(path, "diabetes.toml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_weights_are_invalid() {
        let err = LinearClassifier::from_toml_str("weights = []\nbias = 0.0\n", "m").unwrap_err();
        assert!(matches!(err, ClassifierError::Invalid { .. }));
    }

    #[test]
    fn model_set_routes_by_disease() {
        let set = ModelSet::new(
            LinearClassifier::from_toml_str("weights = [1.0]\nbias = 10.0\n", "d").unwrap(),
            LinearClassifier::from_toml_str("weights = [1.0]\nbias = -10.0\n", "h").unwrap(),
            LinearClassifier::from_toml_str("weights = [1.0]\nbias = -10.0\n", "p").unwrap(),
        );
        let positive = set.for_disease(Disease::Diabetes).predict(&[vec![0.0]]).unwrap();
        let negative = set
            .for_disease(Disease::HeartDisease)
            .predict(&[vec![0.0]])
            .unwrap();
        assert_eq!(positive, vec![1]);
        assert_eq!(negative, vec![0]);
    }
}
