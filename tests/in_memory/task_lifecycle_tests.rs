//! In-memory integration tests for task lifecycle operations.

use super::helpers::{ALICE, BOB, TestService, create_task, in_days, service_for, store};
use orchestra::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{PageRequest, Task, TaskStatus},
    services::{CreateTaskRequest, UpdateTaskRequest},
};
use rstest::rstest;

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.title().as_str()).collect()
}

async fn seed_week(service: &TestService) -> Result<(), eyre::Report> {
    create_task(service, CreateTaskRequest::new(ALICE, "inbox")).await?;
    for (title, days) in [("monday", 1), ("wednesday", 3), ("friday", 5)] {
        create_task(
            service,
            CreateTaskRequest::new(ALICE, title).with_deadline(in_days(days)),
        )
        .await?;
    }
    create_task(
        service,
        CreateTaskRequest::new(BOB, "bob's chore").with_deadline(in_days(2)),
    )
    .await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_views_partition_a_users_tasks(
    store: InMemoryTaskStore,
) -> Result<(), eyre::Report> {
    let service = service_for(&store);
    seed_week(&service).await?;

    eyre::ensure!(service.count_unprocessed(ALICE).await? == 1);
    eyre::ensure!(service.count_processed(ALICE).await? == 3);
    eyre::ensure!(service.count_uncompleted(ALICE).await? == 4);
    eyre::ensure!(service.count_uncompleted(BOB).await? == 1);

    let processed = service.list_processed(ALICE, None).await?;
    eyre::ensure!(
        titles(&processed) == ["monday", "wednesday", "friday"],
        "unexpected processed order: {:?}",
        titles(&processed)
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deadline_window_and_paging_combine(
    store: InMemoryTaskStore,
) -> Result<(), eyre::Report> {
    let service = service_for(&store);
    seed_week(&service).await?;
    let (from, to) = (Some(in_days(2)), Some(in_days(6)));

    let total = service.count_processed_by_deadline(ALICE, from, to).await?;
    let first_page = service
        .list_processed_by_deadline(ALICE, from, to, Some(PageRequest::new(0, 1)?))
        .await?;
    let second_page = service
        .list_processed_by_deadline(ALICE, from, to, Some(PageRequest::new(1, 1)?))
        .await?;

    eyre::ensure!(total == 2, "expected two tasks in window, found {total}");
    eyre::ensure!(titles(&first_page) == ["wednesday"]);
    eyre::ensure!(titles(&second_page) == ["friday"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unbounded_deadline_query_selects_tasks_without_deadline(
    store: InMemoryTaskStore,
) -> Result<(), eyre::Report> {
    let service = service_for(&store);
    seed_week(&service).await?;
    create_task(
        &service,
        CreateTaskRequest::new(ALICE, "someday").with_status(TaskStatus::Processed),
    )
    .await?;

    let listed = service
        .list_processed_by_deadline(ALICE, None, None, None)
        .await?;

    eyre::ensure!(titles(&listed) == ["someday"], "got {:?}", titles(&listed));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn scheduling_then_completing_moves_task_between_views(
    store: InMemoryTaskStore,
) -> Result<(), eyre::Report> {
    let service = service_for(&store);
    let (created, id) = create_task(&service, CreateTaskRequest::new(ALICE, "Buy milk")).await?;
    eyre::ensure!(created.status() == TaskStatus::Unprocessed);

    let deadline = in_days(1);
    let scheduled = service
        .update_task(UpdateTaskRequest::new(id, ALICE, "Buy milk").with_deadline(deadline))
        .await?;
    eyre::ensure!(scheduled.status() == TaskStatus::Processed);
    eyre::ensure!(scheduled.deadline() == Some(deadline));
    eyre::ensure!(scheduled.created_at() == created.created_at());
    eyre::ensure!(service.count_unprocessed(ALICE).await? == 0);

    service.complete_task(id, ALICE).await?;
    eyre::ensure!(service.count_processed(ALICE).await? == 0);
    eyre::ensure!(service.count_uncompleted(ALICE).await? == 0);
    eyre::ensure!(service.get_task(id, ALICE).await?.status() == TaskStatus::Completed);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn other_users_cannot_touch_a_task(store: InMemoryTaskStore) -> Result<(), eyre::Report> {
    let service = service_for(&store);
    let (created, id) = create_task(&service, CreateTaskRequest::new(ALICE, "private")).await?;

    let update = service
        .update_task(UpdateTaskRequest::new(id, BOB, "mine now"))
        .await;
    let complete = service.complete_task(id, BOB).await;
    let delete = service.delete_task(id, BOB).await;

    eyre::ensure!(update.is_err_and(|err| err.is_not_found()));
    eyre::ensure!(complete.is_err_and(|err| err.is_not_found()));
    eyre::ensure!(delete.is_err_and(|err| err.is_not_found()));
    eyre::ensure!(service.get_task(id, ALICE).await? == created);
    Ok(())
}
