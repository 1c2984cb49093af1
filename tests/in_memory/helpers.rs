//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use mockable::DefaultClock;
use orchestra::task::{
    adapters::memory::{
        InMemoryTagRepository, InMemoryTaskCommentRepository, InMemoryTaskRepository,
        InMemoryTaskStore, InMemoryTaskTagRelationRepository,
    },
    domain::{Tag, TagId, TagName, Task, TaskId, UserId},
    ports::TagRepository,
    services::{CreateTaskRequest, TaskService},
};
use rstest::fixture;

/// Service wired to in-memory repositories and the system clock.
pub type TestService = TaskService<
    InMemoryTaskRepository,
    InMemoryTagRepository,
    InMemoryTaskTagRelationRepository,
    InMemoryTaskCommentRepository,
    DefaultClock,
>;

/// Owner used by most scenarios.
pub const ALICE: UserId = UserId::new(1);
/// Second user whose data must stay invisible to [`ALICE`].
pub const BOB: UserId = UserId::new(2);

/// Provides a fresh store for each test.
#[fixture]
pub fn store() -> InMemoryTaskStore {
    InMemoryTaskStore::new()
}

/// Builds a service over `store`.
pub fn service_for(store: &InMemoryTaskStore) -> TestService {
    TaskService::new(
        Arc::new(store.tasks()),
        Arc::new(store.tags()),
        Arc::new(store.relations()),
        Arc::new(store.comments()),
        Arc::new(DefaultClock),
    )
}

/// Returns a deadline `days` days from now.
pub fn in_days(days: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(days)
}

/// Creates a task and returns its identifier.
///
/// # Errors
///
/// Returns an error if creation fails or the task has no identifier.
pub async fn create_task(
    service: &TestService,
    request: CreateTaskRequest,
) -> Result<(Task, TaskId), eyre::Report> {
    let task = service.create_task(request).await?;
    let id = task
        .id()
        .ok_or_else(|| eyre::eyre!("created task has no identifier"))?;
    Ok((task, id))
}

/// Stores a tag owned by `owner` and returns its identifier.
///
/// # Errors
///
/// Returns an error if the name is invalid or storage fails.
pub async fn create_tag(
    store: &InMemoryTaskStore,
    owner: UserId,
    name: &str,
) -> Result<TagId, eyre::Report> {
    let tag = store
        .tags()
        .save(Tag::new(owner, TagName::new(name)?))
        .await?;
    tag.id()
        .ok_or_else(|| eyre::eyre!("stored tag has no identifier"))
}
