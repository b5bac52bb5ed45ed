pub mod classifier;
pub mod features;
pub mod models;
pub mod outcome;
pub mod report;

pub use classifier::{Classifier, ClassifierError, LinearClassifier, ModelSet};
pub use features::{
    DiabetesForm, FeatureVector, FieldError, HeartDiseaseForm, ParkinsonsForm, PredictionForm,
};
pub use models::Disease;
pub use outcome::{run_model, Label, PredictionError, PredictionResult};
pub use report::{Report, ReportRow};
