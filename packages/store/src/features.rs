//! # Prediction forms and feature vectors
//!
//! One form struct per screening, each holding the raw string values exactly
//! as the UI submitted them. [`PredictionForm::feature_vector`] parses every
//! field into an ordered [`FeatureVector`] matching the layout the disease's
//! classifier was trained on.
//!
//! The field order inside each `entries` implementation is the training
//! order. There is no runtime check tying it to a particular model file, so
//! reordering entries silently breaks predictions; treat the order as part
//! of each form's public contract.
//!
//! A blank field fails with [`FieldError::Missing`] and an unparsable one
//! with [`FieldError::NotNumeric`]; no default value is ever substituted, so
//! an incomplete form never reaches a classifier.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Disease;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("the {field} field is required")]
    Missing { field: &'static str },
    #[error("the {field} field must be a number")]
    NotNumeric { field: &'static str },
}

/// Ordered numeric input for one classifier call.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    disease: Disease,
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn disease(&self) -> Disease {
        self.disease
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::Missing { field });
    }
    raw.parse::<f64>()
        .map_err(|_| FieldError::NotNumeric { field })
}

/// A submitted screening form that can be turned into classifier input.
pub trait PredictionForm {
    fn disease(&self) -> Disease;

    /// Ordered `(label, raw value)` pairs in the classifier's input layout.
    fn entries(&self) -> Vec<(&'static str, &str)>;

    /// Parse every field, in order, into a [`FeatureVector`].
    fn feature_vector(&self) -> Result<FeatureVector, FieldError> {
        let disease = self.disease();
        let mut values = Vec::with_capacity(disease.feature_count());
        for (label, raw) in self.entries() {
            values.push(parse_field(label, raw)?);
        }
        Ok(FeatureVector { disease, values })
    }
}

/// Diabetes screening inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiabetesForm {
    pub pregnancies: String,
    pub glucose: String,
    pub blood_pressure: String,
    pub skin_thickness: String,
    pub insulin: String,
    pub bmi: String,
    pub diabetes_pedigree_function: String,
    pub age: String,
}

impl PredictionForm for DiabetesForm {
    fn disease(&self) -> Disease {
        Disease::Diabetes
    }

    fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Pregnancies", &self.pregnancies),
            ("Glucose", &self.glucose),
            ("Blood Pressure", &self.blood_pressure),
            ("Skin Thickness", &self.skin_thickness),
            ("Insulin", &self.insulin),
            ("BMI", &self.bmi),
            ("Diabetes Pedigree Function", &self.diabetes_pedigree_function),
            ("Age", &self.age),
        ]
    }
}

/// Heart disease screening inputs. Field names follow the Cleveland dataset
/// columns the classifier was trained on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeartDiseaseForm {
    pub age: String,
    /// 0 = female, 1 = male.
    pub sex: String,
    pub cp: String,
    pub trestbps: String,
    pub chol: String,
    /// 1 if fasting blood sugar > 120 mg/dl.
    pub fbs: String,
    pub restecg: String,
    pub thalach: String,
    pub exang: String,
    pub oldpeak: String,
    pub slope: String,
    pub ca: String,
    pub thal: String,
}

impl PredictionForm for HeartDiseaseForm {
    fn disease(&self) -> Disease {
        Disease::HeartDisease
    }

    fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Age", &self.age),
            ("Sex", &self.sex),
            ("Chest Pain Type", &self.cp),
            ("Resting Blood Pressure", &self.trestbps),
            ("Cholestoral", &self.chol),
            ("Fasting Blood Sugar", &self.fbs),
            ("Resting Electrocardiographic", &self.restecg),
            ("Max Heart Rate", &self.thalach),
            ("Exercise Angina", &self.exang),
            ("ST Depression", &self.oldpeak),
            ("Peak ST Slope", &self.slope),
            ("Major Vessels", &self.ca),
            ("Thalassemia", &self.thal),
        ]
    }
}

/// Parkinson's screening inputs: the full 22-measure voice recording set,
/// including every jitter and shimmer sub-measure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParkinsonsForm {
    pub fo: String,
    pub fhi: String,
    pub flo: String,
    pub jitter_percent: String,
    pub jitter_abs: String,
    pub rap: String,
    pub ppq: String,
    pub ddp: String,
    pub shimmer: String,
    pub shimmer_db: String,
    pub apq3: String,
    pub apq5: String,
    pub apq: String,
    pub dda: String,
    pub nhr: String,
    pub hnr: String,
    pub rpde: String,
    pub dfa: String,
    pub spread1: String,
    pub spread2: String,
    pub d2: String,
    pub ppe: String,
}

impl PredictionForm for ParkinsonsForm {
    fn disease(&self) -> Disease {
        Disease::Parkinsons
    }

    fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("MDVP:Fo(Hz)", &self.fo),
            ("MDVP:Fhi(Hz)", &self.fhi),
            ("MDVP:Flo(Hz)", &self.flo),
            ("MDVP:Jitter(%)", &self.jitter_percent),
            ("MDVP:Jitter(Abs)", &self.jitter_abs),
            ("MDVP:RAP", &self.rap),
            ("MDVP:PPQ", &self.ppq),
            ("Jitter:DDP", &self.ddp),
            ("MDVP:Shimmer", &self.shimmer),
            ("MDVP:Shimmer(dB)", &self.shimmer_db),
            ("Shimmer:APQ3", &self.apq3),
            ("Shimmer:APQ5", &self.apq5),
            ("MDVP:APQ", &self.apq),
            ("Shimmer:DDA", &self.dda),
            ("NHR", &self.nhr),
            ("HNR", &self.hnr),
            ("RPDE", &self.rpde),
            ("DFA", &self.dfa),
            ("spread1", &self.spread1),
            ("spread2", &self.spread2),
            ("D2", &self.d2),
            ("PPE", &self.ppe),
        ]
    }
}
