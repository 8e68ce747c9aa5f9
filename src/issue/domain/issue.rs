//! Issue entity and its lifecycle rules.

use super::{IssueDomainError, IssueStatus};
use crate::user::domain::{User, UserId};
use serde::{Deserialize, Serialize};

/// Tracked work item.
///
/// Every mutator checks [`Issue::is_updatable`] before touching any field,
/// so a completed or cancelled issue is never modified. Mutators validate
/// their input before writing, so a rejected call leaves the issue as it
/// was. Deserialisation goes through the same title and assignee checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredIssue")]
pub struct Issue {
    title: String,
    description: String,
    status: IssueStatus,
    assignee: Option<UserId>,
}

impl Issue {
    /// Creates a new issue.
    ///
    /// The issue starts [`IssueStatus::InProgress`] when an assignee is
    /// given and [`IssueStatus::Pending`] otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::EmptyTitle`] if the title is empty.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        assignee: Option<&User>,
    ) -> Result<Self, IssueDomainError> {
        let raw_title = title.into();
        validate_title(&raw_title)?;

        let assignee_id = assignee.map(User::id);
        let status = if assignee_id.is_some() {
            IssueStatus::InProgress
        } else {
            IssueStatus::Pending
        };

        Ok(Self {
            title: raw_title,
            description: description.into(),
            status,
            assignee: assignee_id,
        })
    }

    /// Returns the issue title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the issue description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn status(&self) -> IssueStatus {
        self.status
    }

    /// Returns the assigned user, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<UserId> {
        self.assignee
    }

    /// Returns whether the issue can still be modified.
    #[must_use]
    pub const fn is_updatable(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Assigns the issue to `user`.
    ///
    /// A pending issue with no previous assignee moves to
    /// [`IssueStatus::InProgress`]. Reassigning keeps the current state.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::NotUpdatable`] if the issue is locked.
    pub fn assign(&mut self, user: &User) -> Result<(), IssueDomainError> {
        self.ensure_updatable()?;

        if self.assignee.is_none() && self.status == IssueStatus::Pending {
            self.status = IssueStatus::InProgress;
        }
        self.assignee = Some(user.id());
        Ok(())
    }

    /// Clears the assignee and returns the issue to
    /// [`IssueStatus::Pending`], whatever its current state.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::NotUpdatable`] if the issue is locked.
    pub fn unassign(&mut self) -> Result<(), IssueDomainError> {
        self.ensure_updatable()?;

        self.assignee = None;
        self.status = IssueStatus::Pending;
        Ok(())
    }

    /// Moves the issue to `status`.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::NotUpdatable`] if the issue is locked, or
    /// [`IssueDomainError::AssigneeRequired`] if `status` needs an assignee
    /// and none is set.
    pub fn change_status(&mut self, status: IssueStatus) -> Result<(), IssueDomainError> {
        self.ensure_updatable()?;

        if status.requires_assignee() && self.assignee.is_none() {
            return Err(IssueDomainError::AssigneeRequired(status));
        }
        self.status = status;
        Ok(())
    }

    /// Replaces the title and/or description.
    ///
    /// `None` leaves the field untouched. An empty description is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::NotUpdatable`] if the issue is locked, or
    /// [`IssueDomainError::EmptyTitle`] if an empty title is supplied. Neither
    /// field is written when an error is returned.
    pub fn update_details(
        &mut self,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<(), IssueDomainError> {
        self.ensure_updatable()?;

        if let Some(new_title) = title.as_deref() {
            validate_title(new_title)?;
        }
        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(new_description) = description {
            self.description = new_description;
        }
        Ok(())
    }

    const fn ensure_updatable(&self) -> Result<(), IssueDomainError> {
        if self.is_updatable() {
            Ok(())
        } else {
            Err(IssueDomainError::NotUpdatable(self.status))
        }
    }
}

/// Raw field layout accepted when decoding an [`Issue`].
#[derive(Deserialize)]
struct StoredIssue {
    title: String,
    description: String,
    status: IssueStatus,
    assignee: Option<UserId>,
}

impl TryFrom<StoredIssue> for Issue {
    type Error = IssueDomainError;

    fn try_from(stored: StoredIssue) -> Result<Self, Self::Error> {
        validate_title(&stored.title)?;
        if stored.status.requires_assignee() && stored.assignee.is_none() {
            return Err(IssueDomainError::AssigneeRequired(stored.status));
        }

        Ok(Self {
            title: stored.title,
            description: stored.description,
            status: stored.status,
            assignee: stored.assignee,
        })
    }
}

fn validate_title(title: &str) -> Result<(), IssueDomainError> {
    if title.is_empty() {
        return Err(IssueDomainError::EmptyTitle);
    }
    Ok(())
}
