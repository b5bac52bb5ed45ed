//! # User model for registered accounts
//!
//! Two representations of an account holder:
//!
//! - [`User`] — the complete row from the `users` table (derives
//!   [`sqlx::FromRow`] so it loads directly from queries). The email is
//!   stored normalized (trimmed, lower-cased) and is the uniqueness key.
//!   The password column is plaintext; see DESIGN.md.
//! - [`UserInfo`] — the client-safe subset that crosses the core/UI seam.
//!   It omits the password and converts the `Uuid` to a `String`.
//!   [`UserInfo::display_name`] returns the name or falls back to the email.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Full user record from the account store.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}
