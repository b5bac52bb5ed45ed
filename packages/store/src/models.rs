//! Core data types shared across the prediction pipeline.

use serde::{Deserialize, Serialize};

/// The three screenings the application offers. Each one is backed by an
/// independently loaded classifier with its own input layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disease {
    Diabetes,
    HeartDisease,
    Parkinsons,
}

impl Disease {
    /// Number of values the disease's classifier was trained on.
    pub fn feature_count(&self) -> usize {
        match self {
            Disease::Diabetes => 8,
            Disease::HeartDisease => 13,
            Disease::Parkinsons => 22,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Disease::Diabetes => "Diabetes",
            Disease::HeartDisease => "Heart Disease",
            Disease::Parkinsons => "Parkinson's Disease",
        }
    }
}

impl std::fmt::Display for Disease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
