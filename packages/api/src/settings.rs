use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use store::{ClassifierError, LinearClassifier, ModelSet};

#[derive(Debug, Deserialize)]
#[allow(unused)]
pub struct Database {
    /// Path of the SQLite database file.
    pub path: String,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            path: "screening.db".into(),
        }
    }
}

/// Paths of the three classifier parameter files.
#[derive(Debug, Deserialize)]
#[allow(unused)]
pub struct Models {
    pub diabetes: String,
    pub heart_disease: String,
    pub parkinsons: String,
}

impl Default for Models {
    fn default() -> Self {
        Self {
            diabetes: "models/diabetes.toml".into(),
            heart_disease: "models/heart_disease.toml".into(),
            parkinsons: "models/parkinsons.toml".into(),
        }
    }
}

impl Models {
    /// Load all three classifiers from the configured paths.
    pub fn load(&self) -> Result<ModelSet, ClassifierError> {
        Ok(ModelSet::new(
            LinearClassifier::from_path(&self.diabetes)?,
            LinearClassifier::from_path(&self.heart_disease)?,
            LinearClassifier::from_path(&self.parkinsons)?,
        ))
    }
}

#[derive(Debug, Deserialize, Default)]
#[allow(unused)]
pub struct Settings {
    pub database: Database,
    pub models: Models,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("database.path", "screening.db")?
            .set_default("models.diabetes", "models/diabetes.toml")?
            .set_default("models.heart_disease", "models/heart_disease.toml")?
            .set_default("models.parkinsons", "models/parkinsons.toml")?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::default().separator("_"))
            .build()?;

        config.try_deserialize()
    }
}
