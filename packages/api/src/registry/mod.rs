//! # Account registry — signup and login over an abstract user store
//!
//! [`Registry`] owns the account rules (email normalization, duplicate
//! refusal, credential matching) and delegates row storage to the
//! [`UserStore`] trait, so the same logic works against the in-memory store
//! used in tests and the SQLite store used in deployments. Implementations
//! live in sibling modules ([`memory`], [`sqlite`]).
//!
//! ## [`UserStore`] trait
//!
//! An async interface with two methods — `insert`, which must refuse a row
//! whose normalized email is already present, and `find_by_email`, a point
//! lookup on the normalized key.
//!
//! ## Operations
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`validate_email`] | Shape check plus the exact `gmail.com` domain rule. Fails closed. |
//! | [`Registry::register`](Registry::register) | Normalize, insert, return the new [`User`]. `DuplicateEmail` if the key exists, regardless of case. |
//! | [`Registry::authenticate`](Registry::authenticate) | Normalize, look up, compare the password byte-for-byte. `Ok(None)` on any mismatch. |
//!
//! Passwords are compared in plaintext and there is no rate limiting or
//! lockout; both are recorded in DESIGN.md rather than silently changed
//! here.

mod email;
mod memory;
mod sqlite;

pub use email::{normalize_email, validate_email};
pub use memory::MemoryUserStore;
pub use sqlite::SqliteUserStore;

use uuid::Uuid;

use crate::error::RegistryError;
use crate::models::User;

/// Async trait for the backing user table.
pub trait UserStore {
    /// Insert a new row. Must fail with [`RegistryError::DuplicateEmail`]
    /// when the normalized email is already present, leaving the existing
    /// row untouched.
    fn insert(
        &self,
        user: User,
    ) -> impl std::future::Future<Output = Result<(), RegistryError>>;

    /// Point lookup by normalized email.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, RegistryError>>;
}

/// Account registry over an injected [`UserStore`].
#[derive(Clone, Debug)]
pub struct Registry<S> {
    store: S,
}

impl<S: UserStore> Registry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create an account. The email is stored normalized; a duplicate
    /// normalized email is refused, never overwritten.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, RegistryError> {
        let user = User {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            email: normalize_email(email),
            password: password.to_string(),
        };
        self.store.insert(user.clone()).await?;
        Ok(user)
    }

    /// `Some(user)` iff a stored record matches the normalized email and the
    /// exact password.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, RegistryError> {
        let email = normalize_email(email);
        match self.store.find_by_email(&email).await? {
            Some(user) if user.password == password => Ok(Some(user)),
            _ => Ok(None),
        }
    }
}
