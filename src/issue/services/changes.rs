//! Request payloads accepted by the issue service.
//!
//! Both types deserialise from the JSON bodies a transport layer receives:
//! `{"title", "description", "userId"}` for creation and any subset of
//! `{"title", "description", "status", "userId"}` for updates.

use crate::user::domain::UserId;
use serde::{Deserialize, Deserializer};

/// Request payload for creating an issue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateIssueRequest {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default, rename = "userId")]
    assignee: Option<UserId>,
}

impl CreateIssueRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            assignee: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the user to assign on creation.
    #[must_use]
    pub const fn with_assignee(mut self, user_id: UserId) -> Self {
        self.assignee = Some(user_id);
        self
    }

    pub(super) fn into_parts(self) -> (String, String, Option<UserId>) {
        (self.title, self.description, self.assignee)
    }
}

/// Requested change to the assignee of an issue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssigneeChange {
    /// Leave the assignee as it is.
    #[default]
    Unchanged,
    /// Remove the assignee.
    Unassign,
    /// Assign the user with this identifier.
    AssignTo(UserId),
}

/// Field changes requested for an existing issue.
///
/// A `None` field, or [`AssigneeChange::Unchanged`], leaves that field as it
/// is. On the wire, `"userId": null` means unassign and a missing `userId`
/// means no change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IssueChanges {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default, rename = "userId", deserialize_with = "deserialize_assignee")]
    assignee: AssigneeChange,
}

impl IssueChanges {
    /// Creates an empty change set.
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

    /// Sets the requested status literal.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Requests assignment to `user_id`.
    #[must_use]
    pub const fn assign_to(mut self, user_id: UserId) -> Self {
        self.assignee = AssigneeChange::AssignTo(user_id);
        self
    }

    /// Requests removal of the assignee.
    #[must_use]
    pub const fn unassign(mut self) -> Self {
        self.assignee = AssigneeChange::Unassign;
        self
    }

    /// Returns the requested assignee change.
    #[must_use]
    pub const fn assignee(&self) -> AssigneeChange {
        self.assignee
    }

    /// Returns whether no field change is requested.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && matches!(self.assignee, AssigneeChange::Unchanged)
    }

    pub(super) fn into_parts(
        self,
    ) -> (Option<String>, Option<String>, Option<String>, AssigneeChange) {
        (self.title, self.description, self.status, self.assignee)
    }
}

/// Maps a present `userId` key: `null` unassigns, a number assigns.
fn deserialize_assignee<'de, D>(deserializer: D) -> Result<AssigneeChange, D::Error>
where
    D: Deserializer<'de>,
{
    let user_id = Option::<UserId>::deserialize(deserializer)?;
    Ok(user_id.map_or(AssigneeChange::Unassign, AssigneeChange::AssignTo))
}
