//! # API crate — application core for the disease screening app
//!
//! This crate is the seam between the UI layer and the domain logic in the
//! `store` crate. It owns the account registry, the per-client session, and
//! the handlers a frontend calls in response to button presses. Every
//! handler takes its collaborators explicitly, so there is no global state
//! and each test builds its own isolated world.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`db`] | SQLite pool on the configured database file, create-if-absent schema |
//! | [`error`] | Typed failures for the account, prediction, and feedback paths |
//! | [`models`] | The `users` table row ([`User`]) and its client-safe projection ([`UserInfo`]) |
//! | [`registry`] | Email rules and the [`Registry`] over a pluggable [`UserStore`] |
//! | [`session`] | Login state machine, page selection, report flag |
//! | [`settings`] | Database path and model file paths, with file/env overrides |
//!
//! ## Handlers exposed here
//!
//! - **Accounts**: [`signup`], [`login`], [`logout`], [`current_user`]
//! - **Screenings**: [`run_test`], [`test_report`]
//! - **Feedback**: [`submit_feedback`]

pub mod db;
pub mod error;
pub mod models;
pub mod registry;
pub mod session;
pub mod settings;

pub use error::{AuthError, FeedbackError, PredictError, RegistryError};
pub use models::{User, UserInfo};
pub use registry::{
    validate_email, MemoryUserStore, Registry, SqliteUserStore, UserStore,
};
pub use session::{Page, Session, SessionError};
pub use settings::Settings;

pub use store::{
    Classifier, DiabetesForm, Disease, HeartDiseaseForm, Label, ModelSet, ParkinsonsForm,
    PredictionForm, PredictionResult, Report,
};

/// Create an account and log the session in.
///
/// Checks run in form order: email shape, password confirmation, then the
/// duplicate check inside the registry. The new user is logged in
/// immediately, exactly as if they had signed in.
pub async fn signup<S: UserStore>(
    registry: &Registry<S>,
    session: &mut Session,
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<UserInfo, AuthError> {
    if !validate_email(email) {
        return Err(AuthError::InvalidEmailFormat);
    }
    if password != confirm_password {
        return Err(AuthError::PasswordMismatch);
    }

    let user = registry.register(name, email, password).await?;
    let info = user.to_info();
    session.log_in(info.clone());
    tracing::info!(email = %info.email, "account created");
    Ok(info)
}

/// Log in with email and password.
pub async fn login<S: UserStore>(
    registry: &Registry<S>,
    session: &mut Session,
    email: &str,
    password: &str,
) -> Result<UserInfo, AuthError> {
    if !validate_email(email) {
        return Err(AuthError::InvalidEmailFormat);
    }

    let Some(user) = registry.authenticate(email, password).await? else {
        return Err(AuthError::InvalidCredentials);
    };

    let info = user.to_info();
    session.log_in(info.clone());
    tracing::info!(email = %info.email, "login successful");
    Ok(info)
}

/// Log out and reset the session to its defaults.
pub fn logout(session: &mut Session) {
    if let Some(user) = session.user() {
        tracing::info!(email = %user.email, "logged out");
    }
    session.log_out();
}

/// The authenticated user, if any.
pub fn current_user(session: &Session) -> Option<&UserInfo> {
    session.user()
}

/// Run one screening: build the feature vector from the submitted form,
/// invoke the classifier, and on success make the detailed report available
/// on the session.
///
/// A blank or non-numeric field fails before the model is touched; a model
/// failure comes back as an error message, never a panic. Either way the
/// report flag keeps its previous value.
pub fn run_test(
    session: &mut Session,
    model: &dyn Classifier,
    form: &dyn PredictionForm,
) -> Result<PredictionResult, PredictError> {
    let features = form.feature_vector()?;
    let outcome = store::run_model(model, &features)?;
    session.mark_report_available();
    tracing::info!(
        disease = %features.disease(),
        label = %outcome.label,
        "screening completed"
    );
    Ok(outcome)
}

/// The detailed test report, built lazily and only while the session's
/// report flag is set (i.e. after a successful prediction and before the
/// next logout).
pub fn test_report(session: &Session, build: impl FnOnce() -> Report) -> Option<Report> {
    session.report_visible().then(build)
}

/// Accept a feedback submission. All three fields are required; delivery is
/// not part of this crate.
pub fn submit_feedback(name: &str, email: &str, message: &str) -> Result<(), FeedbackError> {
    for (field, value) in [
        ("Your Name", name),
        ("Your Email", email),
        ("Your Feedback", message),
    ] {
        if value.trim().is_empty() {
            return Err(FeedbackError::MissingField { field });
        }
    }
    tracing::info!("feedback received");
    Ok(())
}
