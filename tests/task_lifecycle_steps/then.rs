//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use orchestra::task::{
    domain::{EntityKind, TaskStatus, UserId},
    services::TaskServiceError,
};
use rstest_bdd_macros::then;

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let actual = world.task()?.status();

    eyre::ensure!(
        actual == expected,
        "expected status {}, found {}",
        expected.as_str(),
        actual.as_str()
    );
    Ok(())
}

#[then("the task keeps its deadline and creation time")]
fn task_keeps_deadline_and_creation_time(
    world: &TaskLifecycleWorld,
) -> Result<(), eyre::Report> {
    let before = world
        .task_before_update
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing pre-update snapshot"))?;
    let after = world.task()?;
    let stored = run_async(world.service.get_task(world.task_id()?, after.user_id()))
        .wrap_err("reload updated task")?;

    eyre::ensure!(after.deadline().is_some(), "updated task lost its deadline");
    eyre::ensure!(
        stored.deadline() == after.deadline(),
        "stored deadline differs from the update result"
    );
    eyre::ensure!(
        stored.created_at() == before.created_at(),
        "creation time changed on update"
    );
    Ok(())
}

#[then("the operation fails with a task not found error")]
fn fails_with_task_not_found(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let err = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the operation to fail"))?;

    eyre::ensure!(
        matches!(
            err,
            TaskServiceError::NotFound {
                entity: EntityKind::Task,
                ..
            }
        ),
        "expected task NotFound error, got {err:?}"
    );
    Ok(())
}

#[then(r#"user {user_id:i64} has {count:u64} uncompleted task"#)]
fn uncompleted_count(
    world: &TaskLifecycleWorld,
    user_id: i64,
    count: u64,
) -> Result<(), eyre::Report> {
    let actual = run_async(world.service.count_uncompleted(UserId::new(user_id)))
        .wrap_err("count uncompleted tasks")?;
    eyre::ensure!(actual == count, "expected {count} uncompleted, found {actual}");
    Ok(())
}

#[then(r#"user {user_id:i64} has {count:u64} processed tasks"#)]
fn processed_count(
    world: &TaskLifecycleWorld,
    user_id: i64,
    count: u64,
) -> Result<(), eyre::Report> {
    let actual = run_async(world.service.count_processed(UserId::new(user_id)))
        .wrap_err("count processed tasks")?;
    eyre::ensure!(actual == count, "expected {count} processed, found {actual}");
    Ok(())
}

#[then(r#"the task has exactly the tags "{names}""#)]
fn task_has_tags(world: &TaskLifecycleWorld, names: String) -> Result<(), eyre::Report> {
    let task = world.task()?;
    let tags = run_async(world.service.get_tags(world.task_id()?, task.user_id()))
        .wrap_err("load task tags")?;
    let actual: Vec<&str> = tags.iter().map(|tag| tag.name().as_str()).collect();
    let expected: Vec<&str> = names.split(',').map(str::trim).collect();

    eyre::ensure!(actual == expected, "expected tags {expected:?}, found {actual:?}");
    Ok(())
}
