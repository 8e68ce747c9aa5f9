//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tracker::{
    issue::{adapters::memory::InMemoryIssueRepository, services::IssueService},
    user::{
        adapters::memory::InMemoryUserDirectory,
        domain::{User, UserId},
    },
};

/// Service type wired to in-memory adapters.
pub type TestService = IssueService<InMemoryIssueRepository<DefaultClock>, InMemoryUserDirectory>;

/// Users known to the directory in every integration test.
pub fn roster() -> Vec<User> {
    vec![
        User::new(UserId::new(1), "alice"),
        User::new(UserId::new(2), "bob"),
        User::new(UserId::new(3), "carol"),
    ]
}

/// Provides a service backed by fresh in-memory adapters.
#[fixture]
pub fn service() -> TestService {
    IssueService::new(
        Arc::new(InMemoryIssueRepository::new(Arc::new(DefaultClock))),
        Arc::new(InMemoryUserDirectory::with_users(roster())),
    )
}
