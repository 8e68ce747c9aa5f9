//! Directory port resolving user identifiers to user records.

use crate::user::domain::{User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user directory operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// User lookup contract.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolves a user by identifier.
    ///
    /// Returns `None` when the directory has no such user. Absence is a
    /// normal outcome and must not be reported as an error.
    async fn resolve(&self, id: UserId) -> UserDirectoryResult<Option<User>>;

    /// Returns every known user ordered by identifier.
    async fn list_users(&self) -> UserDirectoryResult<Vec<User>>;
}

/// Errors returned by user directory implementations.
#[derive(Debug, Clone, Error)]
pub enum UserDirectoryError {
    /// The directory backend failed.
    #[error("user directory unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserDirectoryError {
    /// Wraps a backend error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
