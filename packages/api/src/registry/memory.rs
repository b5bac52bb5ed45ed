use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::RegistryError;
use crate::models::User;
use crate::registry::UserStore;

/// In-memory UserStore for tests and ephemeral sessions. Rows are keyed by
/// normalized email and checked for duplicates before insertion; everything
/// is lost when the process exits.
#[derive(Clone, Debug, Default)]
pub struct MemoryUserStore {
    users: Arc<Mutex<HashMap<String, User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for MemoryUserStore {
    async fn insert(&self, user: User) -> Result<(), RegistryError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.email) {
            return Err(RegistryError::DuplicateEmail);
        }
        users.insert(user.email.clone(), user);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RegistryError> {
        Ok(self.users.lock().unwrap().get(email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user(email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Test".into(),
            email: email.into(),
            password: "pw".into(),
        }
    }

    #[tokio::test]
    async fn insert_and_lookup() {
        let store = MemoryUserStore::new();
        store.insert(user("a@gmail.com")).await.unwrap();

        let found = store.find_by_email("a@gmail.com").await.unwrap();
        assert_eq!(found.unwrap().email, "a@gmail.com");
        assert!(store.find_by_email("b@gmail.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_insert_is_refused() {
        let store = MemoryUserStore::new();
        store.insert(user("a@gmail.com")).await.unwrap();

        let err = store.insert(user("a@gmail.com")).await.unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateEmail));
    }
}
