//! Then steps for issue update BDD scenarios.

use super::world::{IssueWorld, run_async};
use rstest_bdd_macros::then;
use tracker::{
    issue::{
        domain::{IssueDomainError, IssueStatus},
        services::IssueServiceError,
    },
    user::domain::UserId,
};

fn last_error(world: &IssueWorld) -> Result<&IssueServiceError, eyre::Report> {
    world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the last operation to fail"))
}

#[then(r#"the issue status is "{status}""#)]
fn issue_status_is(world: &IssueWorld, status: String) -> Result<(), eyre::Report> {
    let expected = IssueStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let actual = world.issue()?.issue().status();

    if actual != expected {
        return Err(eyre::eyre!("expected status {expected}, found {actual}"));
    }
    Ok(())
}

#[then("the issue is assigned to user {user_id:u64}")]
fn issue_assigned_to(world: &IssueWorld, user_id: u64) -> Result<(), eyre::Report> {
    let assignee = world.issue()?.issue().assignee();
    if assignee != Some(UserId::new(user_id)) {
        return Err(eyre::eyre!("expected assignee {user_id}, found {assignee:?}"));
    }
    Ok(())
}

#[then("the issue has no assignee")]
fn issue_unassigned(world: &IssueWorld) -> Result<(), eyre::Report> {
    let assignee = world.issue()?.issue().assignee();
    if assignee.is_some() {
        return Err(eyre::eyre!("expected no assignee, found {assignee:?}"));
    }
    Ok(())
}

#[then("the operation fails with an empty title error")]
fn fails_with_empty_title(world: &IssueWorld) -> Result<(), eyre::Report> {
    let err = last_error(world)?;
    if !matches!(err, IssueServiceError::Domain(IssueDomainError::EmptyTitle)) {
        return Err(eyre::eyre!("expected EmptyTitle error, got {err:?}"));
    }
    Ok(())
}

#[then("the operation fails with a user not found error")]
fn fails_with_user_not_found(world: &IssueWorld) -> Result<(), eyre::Report> {
    let err = last_error(world)?;
    if !matches!(err, IssueServiceError::UserNotFound(_)) {
        return Err(eyre::eyre!("expected UserNotFound error, got {err:?}"));
    }
    Ok(())
}

#[then("the operation fails with a not updatable error")]
fn fails_with_not_updatable(world: &IssueWorld) -> Result<(), eyre::Report> {
    let err = last_error(world)?;
    if !matches!(
        err,
        IssueServiceError::Domain(IssueDomainError::NotUpdatable(_))
    ) {
        return Err(eyre::eyre!("expected NotUpdatable error, got {err:?}"));
    }
    Ok(())
}

#[then("the operation fails with an invalid status error")]
fn fails_with_invalid_status(world: &IssueWorld) -> Result<(), eyre::Report> {
    let err = last_error(world)?;
    if !matches!(
        err,
        IssueServiceError::Domain(IssueDomainError::InvalidStatus(_))
    ) {
        return Err(eyre::eyre!("expected InvalidStatus error, got {err:?}"));
    }
    Ok(())
}

#[then("no issues are stored")]
fn no_issues_stored(world: &IssueWorld) -> Result<(), eyre::Report> {
    let issues = run_async(world.service.get_all_issues())?;
    if !issues.is_empty() {
        return Err(eyre::eyre!("expected no issues, found {}", issues.len()));
    }
    Ok(())
}

#[then(r#"the stored issue has status "{status}" and title "{title}""#)]
fn stored_issue_unchanged(
    world: &IssueWorld,
    status: String,
    title: String,
) -> Result<(), eyre::Report> {
    let id = world.issue()?.id();
    let stored = run_async(world.service.get_issue_by_id(id))?;

    if stored.issue().status().as_str() != status || stored.issue().title() != title {
        return Err(eyre::eyre!(
            "expected {status} \"{title}\", found {} \"{}\"",
            stored.issue().status(),
            stored.issue().title()
        ));
    }
    Ok(())
}
