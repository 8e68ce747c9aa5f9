//! Batched issue updates.

use super::{Issue, IssueDomainError, IssueStatus};
use crate::user::domain::{User, UserId};
use tracing::debug;

/// Requested change to an issue's assignee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssigneeDirective {
    /// Remove the current assignee.
    Unassign,
    /// Assign a user resolved from the directory.
    Assign {
        /// Identifier the caller asked for.
        requested: UserId,
        /// The resolved user record.
        user: User,
    },
}

/// A set of field changes applied to an issue in a fixed order.
///
/// Holds at most one pending change per field. Built fresh for each update
/// and consumed by [`UpdateCommand::apply_to`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCommand {
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
    assignee: Option<AssigneeDirective>,
}

impl UpdateCommand {
    /// Creates a command with no changes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the new description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the requested status literal. It is validated on application.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Assigns the issue to `user`, resolved from `requested`.
    #[must_use]
    pub fn with_user(mut self, requested: UserId, user: User) -> Self {
        self.assignee = Some(AssigneeDirective::Assign { requested, user });
        self
    }

    /// Clears the assignee.
    #[must_use]
    pub fn without_user(mut self) -> Self {
        self.assignee = Some(AssigneeDirective::Unassign);
        self
    }

    /// Returns the pending assignee directive, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&AssigneeDirective> {
        self.assignee.as_ref()
    }

    /// Returns whether the command carries no changes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.assignee.is_none()
    }

    /// Applies the changes to `issue`.
    ///
    /// Order: lock check, title and description, assignee, then status. The
    /// assignee goes before the status so that assigning a user and moving
    /// to an active state in one command succeeds.
    ///
    /// The issue is modified in place. When a later step fails, earlier
    /// steps have already been written to `issue`; callers must discard it
    /// rather than persist it.
    ///
    /// # Errors
    ///
    /// Returns the first [`IssueDomainError`] raised by any step.
    pub fn apply_to(self, issue: &mut Issue) -> Result<(), IssueDomainError> {
        if !issue.is_updatable() {
            return Err(IssueDomainError::NotUpdatable(issue.status()));
        }

        issue.update_details(self.title, self.description)?;

        match self.assignee {
            Some(AssigneeDirective::Unassign) => {
                debug!("clearing issue assignee");
                issue.unassign()?;
            }
            Some(AssigneeDirective::Assign { requested, user }) => {
                debug!(requested = %requested, assignee = %user.id(), "assigning issue");
                issue.assign(&user)?;
            }
            None => {}
        }

        if let Some(raw_status) = self.status {
            let status = IssueStatus::try_from(raw_status.as_str())?;
            debug!(from = %issue.status(), to = %status, "changing issue status");
            issue.change_status(status)?;
        }

        Ok(())
    }
}
