//! Domain model for issue tracking.
//!
//! The issue entity owns every lifecycle rule: title presence, the
//! assignee requirement of active states, and the terminal-state lock.
//! Identity and timestamps are assigned by persistence and live on
//! [`IssueRecord`], outside the entity.

mod command;
mod error;
mod ids;
mod issue;
mod record;
mod status;

pub use command::{AssigneeDirective, UpdateCommand};
pub use error::{IssueDomainError, ParseIssueStatusError};
pub use ids::IssueId;
pub use issue::Issue;
pub use record::IssueRecord;
pub use status::IssueStatus;
