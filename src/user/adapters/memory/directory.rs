//! In-memory user directory for tests and local wiring.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::user::{
    domain::{User, UserId},
    ports::{UserDirectory, UserDirectoryError, UserDirectoryResult},
};

/// Thread-safe in-memory user directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Arc<RwLock<BTreeMap<UserId, User>>>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory pre-populated with the given users.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let map = users.into_iter().map(|user| (user.id(), user)).collect();
        Self {
            users: Arc::new(RwLock::new(map)),
        }
    }

    /// Adds or replaces a user.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Unavailable`] when the directory lock is
    /// poisoned.
    pub fn insert(&self, user: User) -> UserDirectoryResult<()> {
        let mut users = self.users.write().map_err(|err| {
            UserDirectoryError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        users.insert(user.id(), user);
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn resolve(&self, id: UserId) -> UserDirectoryResult<Option<User>> {
        let users = self.users.read().map_err(|err| {
            UserDirectoryError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(users.get(&id).cloned())
    }

    async fn list_users(&self) -> UserDirectoryResult<Vec<User>> {
        let users = self.users.read().map_err(|err| {
            UserDirectoryError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(users.values().cloned().collect())
    }
}
