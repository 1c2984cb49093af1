//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use chrono::{Duration, Utc};
use eyre::WrapErr;
use orchestra::task::{
    domain::{Tag, TagName, UserId},
    ports::TagRepository,
    services::CreateTaskRequest,
};
use rstest_bdd_macros::given;

#[given(r#"user {user_id:i64} creates a task titled "{title}" without a deadline"#)]
fn task_without_deadline(
    world: &mut TaskLifecycleWorld,
    user_id: i64,
    title: String,
) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(UserId::new(user_id), title);
    let created = run_async(world.service.create_task(request))
        .wrap_err("create task without deadline")?;
    world.current_task = Some(created);
    Ok(())
}

#[given(r#"user {user_id:i64} creates a task titled "{title}" due in {days:i64} days"#)]
fn task_due_in_days(
    world: &mut TaskLifecycleWorld,
    user_id: i64,
    title: String,
    days: i64,
) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(UserId::new(user_id), title)
        .with_deadline(Utc::now() + Duration::days(days));
    let created =
        run_async(world.service.create_task(request)).wrap_err("create task with deadline")?;
    world.current_task = Some(created);
    Ok(())
}

#[given(r#"user {user_id:i64} owns a tag named "{name}""#)]
fn user_owns_tag(
    world: &mut TaskLifecycleWorld,
    user_id: i64,
    name: String,
) -> Result<(), eyre::Report> {
    let tag_name = TagName::new(name).wrap_err("tag name in scenario")?;
    let tags = world.store.tags();
    let saved = run_async(tags.save(Tag::new(UserId::new(user_id), tag_name)))
        .wrap_err("store tag for scenario")?;
    world.current_tag = Some(saved);
    Ok(())
}
