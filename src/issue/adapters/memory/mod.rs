//! In-memory issue storage.

mod issue;

pub use issue::InMemoryIssueRepository;
