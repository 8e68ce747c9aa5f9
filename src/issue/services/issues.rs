//! Service layer for issue creation, lookup, and update.

use crate::issue::{
    domain::{Issue, IssueDomainError, IssueId, IssueRecord, IssueStatus, UpdateCommand},
    ports::{IssueRepository, IssueRepositoryError},
};
use crate::user::{
    domain::{User, UserId},
    ports::{UserDirectory, UserDirectoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::{AssigneeChange, CreateIssueRequest, IssueChanges};

/// Service-level errors for issue operations.
#[derive(Debug, Error)]
pub enum IssueServiceError {
    /// An issue rule rejected the operation.
    #[error(transparent)]
    Domain(#[from] IssueDomainError),
    /// The referenced user is not in the directory.
    #[error("user not found: {0}")]
    UserNotFound(UserId),
    /// The referenced issue does not exist.
    #[error("issue not found: {0}")]
    IssueNotFound(IssueId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] IssueRepositoryError),
    /// User directory lookup failed.
    #[error(transparent)]
    Directory(#[from] UserDirectoryError),
}

impl IssueServiceError {
    /// Returns whether the failure came from a collaborator rather than
    /// from the request itself.
    #[must_use]
    pub const fn is_infrastructure(&self) -> bool {
        matches!(self, Self::Repository(_) | Self::Directory(_))
    }
}

/// Result type for issue service operations.
pub type IssueServiceResult<T> = Result<T, IssueServiceError>;

/// Issue tracking orchestration service.
///
/// Resolves assignee references through the user directory, lets the
/// [`Issue`] entity enforce its rules, and persists only on success.
#[derive(Clone)]
pub struct IssueService<R, U>
where
    R: IssueRepository,
    U: UserDirectory,
{
    issues: Arc<R>,
    users: Arc<U>,
}

impl<R, U> IssueService<R, U>
where
    R: IssueRepository,
    U: UserDirectory,
{
    /// Creates a new issue service.
    #[must_use]
    pub const fn new(issues: Arc<R>, users: Arc<U>) -> Self {
        Self { issues, users }
    }

    /// Creates and stores a new issue.
    ///
    /// # Errors
    ///
    /// Returns [`IssueServiceError::UserNotFound`] when the requested
    /// assignee does not exist, [`IssueServiceError::Domain`] when the title
    /// is empty, or a collaborator error.
    pub async fn create_issue(&self, request: CreateIssueRequest) -> IssueServiceResult<IssueRecord> {
        let (title, description, assignee_id) = request.into_parts();

        let assignee = match assignee_id {
            Some(user_id) => Some(self.resolve_user(user_id).await?),
            None => None,
        };

        let issue = Issue::new(title, description, assignee.as_ref())
            .inspect_err(|err| warn!(error = %err, "issue creation rejected"))?;
        let record = self.issues.create(&issue).await?;

        info!(
            issue_id = %record.id(),
            status = %record.issue().status(),
            "issue created"
        );
        Ok(record)
    }

    /// Returns every issue in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`IssueServiceError::Repository`] when the listing fails.
    pub async fn get_all_issues(&self) -> IssueServiceResult<Vec<IssueRecord>> {
        Ok(self.issues.list_all().await?)
    }

    /// Retrieves an issue by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IssueServiceError::IssueNotFound`] when no issue has the
    /// identifier.
    pub async fn get_issue_by_id(&self, id: IssueId) -> IssueServiceResult<IssueRecord> {
        self.issues
            .find_by_id(id)
            .await?
            .ok_or(IssueServiceError::IssueNotFound(id))
    }

    /// Applies `changes` to an existing issue and stores the result.
    ///
    /// Nothing is stored unless every change succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`IssueServiceError::IssueNotFound`],
    /// [`IssueServiceError::UserNotFound`], or the [`IssueDomainError`]
    /// raised while applying the changes.
    pub async fn update_issue(
        &self,
        id: IssueId,
        changes: IssueChanges,
    ) -> IssueServiceResult<IssueRecord> {
        let existing = self.get_issue_by_id(id).await?;
        let command = self.build_update_command(changes).await?;

        let mut issue = existing.into_issue();
        command
            .apply_to(&mut issue)
            .inspect_err(|err| warn!(issue_id = %id, error = %err, "issue update rejected"))?;

        let record = self
            .issues
            .update(id, &issue)
            .await?
            .ok_or(IssueServiceError::IssueNotFound(id))?;

        info!(
            issue_id = %id,
            status = %record.issue().status(),
            "issue updated"
        );
        Ok(record)
    }

    /// Returns the issues whose status is the literal `status`.
    ///
    /// # Errors
    ///
    /// Returns [`IssueServiceError::Domain`] with
    /// [`IssueDomainError::InvalidStatus`] when `status` is not a known
    /// state literal.
    pub async fn get_issues_by_status(&self, status: &str) -> IssueServiceResult<Vec<IssueRecord>> {
        let parsed = IssueStatus::try_from(status).map_err(IssueDomainError::from)?;
        Ok(self.issues.find_by_status(parsed).await?)
    }

    async fn build_update_command(&self, changes: IssueChanges) -> IssueServiceResult<UpdateCommand> {
        let (title, description, status, assignee) = changes.into_parts();

        let mut command = UpdateCommand::new();
        if let Some(new_title) = title {
            command = command.with_title(new_title);
        }
        if let Some(new_description) = description {
            command = command.with_description(new_description);
        }
        if let Some(new_status) = status {
            command = command.with_status(new_status);
        }

        match assignee {
            AssigneeChange::Unchanged => {}
            AssigneeChange::Unassign => command = command.without_user(),
            AssigneeChange::AssignTo(user_id) => {
                let user = self.resolve_user(user_id).await?;
                command = command.with_user(user_id, user);
            }
        }

        Ok(command)
    }

    async fn resolve_user(&self, user_id: UserId) -> IssueServiceResult<User> {
        let resolved = self.users.resolve(user_id).await?;
        if resolved.is_none() {
            debug!(user_id = %user_id, "assignee lookup found no user");
        }
        resolved.ok_or(IssueServiceError::UserNotFound(user_id))
    }
}
