//! Port contracts for issue tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by the issue
//! service.

pub mod repository;

pub use repository::{IssueRepository, IssueRepositoryError, IssueRepositoryResult};
