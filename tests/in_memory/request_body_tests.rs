//! Service calls driven by JSON request bodies.

use super::helpers::{TestService, service};
use rstest::rstest;
use tracker::{
    issue::{
        domain::IssueStatus,
        services::{CreateIssueRequest, IssueChanges, IssueServiceError},
    },
    user::domain::UserId,
};

fn changes(body: &str) -> Result<IssueChanges, eyre::Report> {
    Ok(serde_json::from_str(body)?)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assign_and_clear_through_user_id_key(service: TestService) -> Result<(), eyre::Report> {
    let request: CreateIssueRequest =
        serde_json::from_str(r#"{"title": "Fix bug", "description": "", "userId": null}"#)?;
    let created = service.create_issue(request).await?;
    eyre::ensure!(created.issue().status() == IssueStatus::Pending);

    let assigned = service
        .update_issue(created.id(), changes(r#"{"userId": 1}"#)?)
        .await?;
    eyre::ensure!(assigned.issue().status() == IssueStatus::InProgress);
    eyre::ensure!(assigned.issue().assignee() == Some(UserId::new(1)));

    let cleared = service
        .update_issue(created.id(), changes(r#"{"userId": null}"#)?)
        .await?;
    eyre::ensure!(cleared.issue().status() == IssueStatus::Pending);
    eyre::ensure!(cleared.issue().assignee().is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn body_without_user_id_keeps_assignee(service: TestService) -> Result<(), eyre::Report> {
    let request: CreateIssueRequest = serde_json::from_str(r#"{"title": "Keep", "userId": 2}"#)?;
    let created = service.create_issue(request).await?;

    let renamed = service
        .update_issue(created.id(), changes(r#"{"title": "Kept"}"#)?)
        .await?;

    eyre::ensure!(renamed.issue().title() == "Kept");
    eyre::ensure!(renamed.issue().assignee() == Some(UserId::new(2)));
    eyre::ensure!(renamed.issue().status() == IssueStatus::InProgress);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_status_literal_in_body_is_rejected(
    service: TestService,
) -> Result<(), eyre::Report> {
    let created = service
        .create_issue(serde_json::from_str(r#"{"title": "Status"}"#)?)
        .await?;

    let result = service
        .update_issue(created.id(), changes(r#"{"status": "DONE"}"#)?)
        .await;

    let Err(err) = result else {
        eyre::bail!("expected an invalid status error");
    };
    eyre::ensure!(
        matches!(err, IssueServiceError::Domain(_)),
        "unexpected error {err:?}"
    );
    eyre::ensure!(err.to_string() == "invalid issue status: DONE");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn response_body_uses_wire_names(service: TestService) -> Result<(), eyre::Report> {
    let created = service
        .create_issue(serde_json::from_str(r#"{"title": "Wire", "userId": 1}"#)?)
        .await?;

    let body = serde_json::to_value(&created)?;

    eyre::ensure!(body["id"] == created.id().value());
    eyre::ensure!(body["status"] == "IN_PROGRESS");
    eyre::ensure!(body["assignee"] == 1);
    eyre::ensure!(body.get("createdAt").is_some() && body.get("updatedAt").is_some());
    Ok(())
}
