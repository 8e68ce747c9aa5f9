//! Error types for issue domain validation and parsing.

use super::IssueStatus;
use thiserror::Error;

/// Errors returned when an issue rule is violated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IssueDomainError {
    /// The issue title is empty.
    #[error("issue title must not be empty")]
    EmptyTitle,

    /// The issue is completed or cancelled and can no longer change.
    #[error("issue in {0} state cannot be modified")]
    NotUpdatable(IssueStatus),

    /// The status literal is not one of the known issue states.
    #[error("invalid issue status: {0}")]
    InvalidStatus(String),

    /// The target status needs an assignee but the issue has none.
    #[error("issue cannot move to {0} without an assignee")]
    AssigneeRequired(IssueStatus),
}

/// Error returned while parsing an issue status literal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown issue status: {0}")]
pub struct ParseIssueStatusError(pub String);

impl From<ParseIssueStatusError> for IssueDomainError {
    fn from(err: ParseIssueStatusError) -> Self {
        Self::InvalidStatus(err.0)
    }
}
