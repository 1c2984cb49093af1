//! Shared world state for task lifecycle BDD scenarios.

use std::sync::Arc;

use orchestra::task::{
    adapters::memory::{
        InMemoryTagRepository, InMemoryTaskCommentRepository, InMemoryTaskRepository,
        InMemoryTaskStore, InMemoryTaskTagRelationRepository,
    },
    domain::{Tag, TagId, Task, TaskId},
    services::{TaskService, TaskServiceError},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<
    InMemoryTaskRepository,
    InMemoryTagRepository,
    InMemoryTaskTagRelationRepository,
    InMemoryTaskCommentRepository,
    DefaultClock,
>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    pub store: InMemoryTaskStore,
    pub service: TestTaskService,
    pub current_task: Option<Task>,
    pub task_before_update: Option<Task>,
    pub current_tag: Option<Tag>,
    pub last_error: Option<TaskServiceError>,
}

impl TaskLifecycleWorld {
    /// Creates a world over an empty store.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryTaskStore::new();
        let service = TaskService::new(
            Arc::new(store.tasks()),
            Arc::new(store.tags()),
            Arc::new(store.relations()),
            Arc::new(store.comments()),
            Arc::new(DefaultClock),
        );

        Self {
            store,
            service,
            current_task: None,
            task_before_update: None,
            current_tag: None,
            last_error: None,
        }
    }

    /// Returns the task the scenario is working on.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.current_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))
    }

    /// Returns the identifier of the current task.
    ///
    /// # Errors
    ///
    /// Returns an error when no persisted task is available.
    pub fn task_id(&self) -> Result<TaskId, eyre::Report> {
        self.task()?
            .id()
            .ok_or_else(|| eyre::eyre!("current task has not been persisted"))
    }

    /// Returns the identifier of the current tag.
    ///
    /// # Errors
    ///
    /// Returns an error when no persisted tag is available.
    pub fn tag_id(&self) -> Result<TagId, eyre::Report> {
        self.current_tag
            .as_ref()
            .and_then(Tag::id)
            .ok_or_else(|| eyre::eyre!("missing current tag in scenario world"))
    }
}

impl Default for TaskLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    TaskLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
