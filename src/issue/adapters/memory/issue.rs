//! In-memory repository for issue tracking tests and local wiring.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::issue::{
    domain::{Issue, IssueId, IssueRecord, IssueStatus},
    ports::{IssueRepository, IssueRepositoryError, IssueRepositoryResult},
};

/// Thread-safe in-memory issue repository.
///
/// Identifiers are allocated sequentially from 1. Because they only grow,
/// iterating the id-keyed map yields issues in creation order.
pub struct InMemoryIssueRepository<C>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<InMemoryIssueState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryIssueState {
    issues: BTreeMap<IssueId, IssueRecord>,
    last_id: u64,
}

impl<C> InMemoryIssueRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty repository stamping records with `clock`.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryIssueState::default())),
            clock,
        }
    }
}

impl<C> Clone for InMemoryIssueRepository<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

fn poisoned(err: impl std::fmt::Display) -> IssueRepositoryError {
    IssueRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<C> IssueRepository for InMemoryIssueRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn create(&self, issue: &Issue) -> IssueRepositoryResult<IssueRecord> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.last_id += 1;
        let id = IssueId::new(state.last_id);
        let timestamp = self.clock.utc();

        let record = IssueRecord::new(id, issue.clone(), timestamp, timestamp);
        state.issues.insert(id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: IssueId) -> IssueRepositoryResult<Option<IssueRecord>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.issues.get(&id).cloned())
    }

    async fn update(
        &self,
        id: IssueId,
        issue: &Issue,
    ) -> IssueRepositoryResult<Option<IssueRecord>> {
        let mut state = self.state.write().map_err(poisoned)?;
        let Some(existing) = state.issues.get_mut(&id) else {
            return Ok(None);
        };

        let record = IssueRecord::new(id, issue.clone(), existing.created_at(), self.clock.utc());
        existing.clone_from(&record);
        Ok(Some(record))
    }

    async fn list_all(&self) -> IssueRepositoryResult<Vec<IssueRecord>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.issues.values().cloned().collect())
    }

    async fn find_by_status(
        &self,
        status: IssueStatus,
    ) -> IssueRepositoryResult<Vec<IssueRecord>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .issues
            .values()
            .filter(|record| record.issue().status() == status)
            .cloned()
            .collect())
    }
}
