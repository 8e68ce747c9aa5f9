//! Issue lifecycle states.

use super::ParseIssueStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueStatus {
    /// Nobody is working on the issue yet.
    Pending,
    /// An assignee is working on the issue.
    InProgress,
    /// The issue has been resolved.
    Completed,
    /// The issue has been dropped.
    Cancelled,
}

impl IssueStatus {
    /// Every issue state, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Returns whether the state locks the issue against further change.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Returns whether an issue must have an assignee to be in this state.
    #[must_use]
    pub const fn requires_assignee(self) -> bool {
        matches!(self, Self::InProgress | Self::Completed)
    }
}

impl TryFrom<&str> for IssueStatus {
    type Error = ParseIssueStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "PENDING" => Ok(Self::Pending),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(ParseIssueStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<IssueStatus> for String {
    fn from(status: IssueStatus) -> Self {
        status.as_str().to_owned()
    }
}
