//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use chrono::{Duration, Utc};
use eyre::WrapErr;
use orchestra::task::{
    domain::UserId,
    services::{AddCommentRequest, UpdateTaskRequest},
};
use rstest_bdd_macros::when;

#[when(r#"user {user_id:i64} updates the task with a deadline tomorrow and no status"#)]
fn update_with_deadline(world: &mut TaskLifecycleWorld, user_id: i64) -> Result<(), eyre::Report> {
    let task = world.task()?.clone();
    let task_id = world.task_id()?;
    let request = UpdateTaskRequest::new(task_id, UserId::new(user_id), task.title().as_str())
        .with_deadline(Utc::now() + Duration::days(1));

    let updated = run_async(world.service.update_task(request)).wrap_err("update task")?;
    world.task_before_update = Some(task);
    world.current_task = Some(updated);
    Ok(())
}

#[when(r#"user {user_id:i64} comments "{text}" on the task"#)]
fn comment_on_task(
    world: &mut TaskLifecycleWorld,
    user_id: i64,
    text: String,
) -> Result<(), eyre::Report> {
    let request = AddCommentRequest::new(world.task_id()?, UserId::new(user_id), text);
    if let Err(err) = run_async(world.service.add_comment(request)) {
        world.last_error = Some(err);
    }
    Ok(())
}

#[when(r#"user {user_id:i64} completes the task"#)]
fn complete_task(world: &mut TaskLifecycleWorld, user_id: i64) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    run_async(world.service.complete_task(task_id, UserId::new(user_id)))
        .wrap_err("complete task")?;
    Ok(())
}

#[when(r#"user {user_id:i64} assigns the tag to the task twice"#)]
fn assign_tag_twice(world: &mut TaskLifecycleWorld, user_id: i64) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let tag_id = world.tag_id()?;
    for attempt in 1..=2 {
        run_async(
            world
                .service
                .assign_tag(task_id, tag_id, UserId::new(user_id)),
        )
        .wrap_err_with(|| format!("assign tag, attempt {attempt}"))?;
    }
    Ok(())
}
