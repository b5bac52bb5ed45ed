use sqlx::SqlitePool;

use crate::error::RegistryError;
use crate::models::User;
use crate::registry::UserStore;

/// SQLite-backed UserStore. Duplicate emails are refused by the UNIQUE
/// constraint on the email column, which also serializes concurrent
/// signups racing on the same address.
#[derive(Clone, Debug)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserStore for SqliteUserStore {
    async fn insert(&self, user: User) -> Result<(), RegistryError> {
        let result = sqlx::query(
            "INSERT INTO users (id, name, email, password) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(RegistryError::DuplicateEmail)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RegistryError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password FROM users WHERE email = ?1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}
