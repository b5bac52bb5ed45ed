//! Typed errors for the account and prediction paths. Every variant's
//! display string is the message shown to the user; all of them are
//! recovered at the triggering action and none are fatal.

use thiserror::Error;

use store::{FieldError, PredictionError};

/// Failure talking to the backing user table.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("This email is already registered. Please login.")]
    DuplicateEmail,
    #[error("account store error: {0}")]
    Store(#[from] sqlx::Error),
}

/// Signup and login failures.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Please enter a valid Gmail address (e.g., example@gmail.com).")]
    InvalidEmailFormat,
    #[error("Passwords do not match. Please try again.")]
    PasswordMismatch,
    #[error("This email is already registered. Please login.")]
    DuplicateEmail,
    #[error("Invalid email or password. Please try again.")]
    InvalidCredentials,
    #[error("account store error: {0}")]
    Store(String),
}

impl From<RegistryError> for AuthError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::DuplicateEmail => AuthError::DuplicateEmail,
            RegistryError::Store(e) => AuthError::Store(e.to_string()),
        }
    }
}

/// A screening request failed before or during the classifier call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

/// Feedback form failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Please fill in all fields before submitting.")]
    MissingField { field: &'static str },
}
