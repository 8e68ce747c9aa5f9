//! Persisted issue snapshot.

use super::{Issue, IssueId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An issue together with the identity and timestamps assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRecord {
    id: IssueId,
    #[serde(flatten)]
    issue: Issue,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl IssueRecord {
    /// Assembles a record from stored parts.
    #[must_use]
    pub const fn new(
        id: IssueId,
        issue: Issue,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            issue,
            created_at,
            updated_at,
        }
    }

    /// Returns the issue identifier.
    #[must_use]
    pub const fn id(&self) -> IssueId {
        self.id
    }

    /// Returns the stored issue.
    #[must_use]
    pub const fn issue(&self) -> &Issue {
        &self.issue
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the latest write.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Consumes the record, returning the issue for modification.
    #[must_use]
    pub fn into_issue(self) -> Issue {
        self.issue
    }
}
