//! Repository port for issue persistence and lookup.

use crate::issue::domain::{Issue, IssueId, IssueRecord, IssueStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for issue repository operations.
pub type IssueRepositoryResult<T> = Result<T, IssueRepositoryError>;

/// Issue persistence contract.
///
/// Implementations own identity and timestamps. Concurrent updates to the
/// same issue must be serialised by the implementation; the issue service
/// performs an unguarded read-modify-write.
#[async_trait]
pub trait IssueRepository: Send + Sync {
    /// Stores a new issue, assigning its identifier and timestamps.
    async fn create(&self, issue: &Issue) -> IssueRepositoryResult<IssueRecord>;

    /// Finds an issue by identifier.
    ///
    /// Returns `None` when the issue does not exist.
    async fn find_by_id(&self, id: IssueId) -> IssueRepositoryResult<Option<IssueRecord>>;

    /// Replaces the stored issue, keeping its creation timestamp and
    /// refreshing its update timestamp.
    ///
    /// Returns `None` when the issue does not exist.
    async fn update(
        &self,
        id: IssueId,
        issue: &Issue,
    ) -> IssueRepositoryResult<Option<IssueRecord>>;

    /// Returns all issues in creation order.
    async fn list_all(&self) -> IssueRepositoryResult<Vec<IssueRecord>>;

    /// Returns the issues in `status`, in creation order.
    async fn find_by_status(&self, status: IssueStatus) -> IssueRepositoryResult<Vec<IssueRecord>>;
}

/// Errors returned by issue repository implementations.
#[derive(Debug, Clone, Error)]
pub enum IssueRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl IssueRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
