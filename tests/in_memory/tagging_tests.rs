//! In-memory integration tests for tagging.

use super::helpers::{ALICE, BOB, create_tag, create_task, service_for, store};
use orchestra::task::{
    adapters::memory::InMemoryTaskStore,
    domain::EntityKind,
    services::{CreateTaskRequest, TaskServiceError},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tags_follow_assignment_and_removal(store: InMemoryTaskStore) -> Result<(), eyre::Report> {
    let service = service_for(&store);
    let (_, task_id) = create_task(&service, CreateTaskRequest::new(ALICE, "Buy milk")).await?;
    let groceries = create_tag(&store, ALICE, "groceries").await?;
    let urgent = create_tag(&store, ALICE, "urgent").await?;

    eyre::ensure!(service.get_tags(task_id, ALICE).await?.is_empty());

    service.assign_tag(task_id, groceries, ALICE).await?;
    service.assign_tag(task_id, urgent, ALICE).await?;
    service.assign_tag(task_id, groceries, ALICE).await?;
    eyre::ensure!(service.get_tags(task_id, ALICE).await?.len() == 2);

    service.remove_tag(task_id, urgent, ALICE).await?;
    service.remove_tag(task_id, urgent, ALICE).await?;
    let remaining = service.get_tags(task_id, ALICE).await?;
    let names: Vec<&str> = remaining.iter().map(|tag| tag.name().as_str()).collect();
    eyre::ensure!(names == ["groceries"], "unexpected tags {names:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tags_of_other_users_cannot_be_assigned(
    store: InMemoryTaskStore,
) -> Result<(), eyre::Report> {
    let service = service_for(&store);
    let (_, task_id) = create_task(&service, CreateTaskRequest::new(ALICE, "Buy milk")).await?;
    let bobs_tag = create_tag(&store, BOB, "groceries").await?;

    let result = service.assign_tag(task_id, bobs_tag, ALICE).await;

    eyre::ensure!(
        matches!(
            result,
            Err(TaskServiceError::NotFound {
                entity: EntityKind::Tag,
                ..
            })
        ),
        "expected tag not found, got {result:?}"
    );
    eyre::ensure!(service.get_tags(task_id, ALICE).await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_task_releases_its_tags(store: InMemoryTaskStore) -> Result<(), eyre::Report> {
    let service = service_for(&store);
    let (_, doomed) = create_task(&service, CreateTaskRequest::new(ALICE, "doomed")).await?;
    let (_, kept) = create_task(&service, CreateTaskRequest::new(ALICE, "kept")).await?;
    let tag = create_tag(&store, ALICE, "shared").await?;
    service.assign_tag(doomed, tag, ALICE).await?;
    service.assign_tag(kept, tag, ALICE).await?;

    service.delete_task(doomed, ALICE).await?;

    eyre::ensure!(service.get_tags(kept, ALICE).await?.len() == 1);
    eyre::ensure!(
        service
            .get_tags(doomed, ALICE)
            .await
            .is_err_and(|err| err.is_not_found())
    );
    Ok(())
}
