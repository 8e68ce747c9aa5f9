//! Application services for issue tracking.

mod changes;
mod issues;

pub use changes::{AssigneeChange, CreateIssueRequest, IssueChanges};
pub use issues::{IssueService, IssueServiceError, IssueServiceResult};
