//! Repository port for task persistence and owner-scoped queries.

use crate::task::domain::{
    EntityKind, PageBounds, Task, TaskId, TaskQuery, TaskTagRelation, UserId,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Task persistence contract.
///
/// Implementations store what they are given: status normalization,
/// timestamps and ownership checks belong to the service layer.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Finds a task by identifier within the owner's tasks.
    ///
    /// Returns `None` when the task does not exist or belongs to another
    /// user.
    async fn find_by_id_and_user(
        &self,
        id: TaskId,
        user_id: UserId,
    ) -> RepositoryResult<Option<Task>>;

    /// Returns the tasks selected by `query`, ordered by creation time
    /// ascending, restricted to `bounds`.
    async fn find(&self, query: &TaskQuery, bounds: PageBounds) -> RepositoryResult<Vec<Task>>;

    /// Counts the tasks selected by `query`.
    async fn count(&self, query: &TaskQuery) -> RepositoryResult<u64>;

    /// Inserts a task without an identifier or updates the task with the
    /// given identifier, returning the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::MissingRecord`] when updating a task that
    /// does not exist.
    async fn save(&self, task: Task) -> RepositoryResult<Task>;

    /// Deletes a task together with its tag relations and comments. Deleting
    /// an absent task is not an error.
    async fn delete(&self, id: TaskId) -> RepositoryResult<()>;
}

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// An update addressed a record that does not exist.
    #[error("{entity} with id {id} does not exist")]
    MissingRecord {
        /// Kind of the addressed record.
        entity: EntityKind,
        /// Identifier of the addressed record.
        id: i64,
    },

    /// The task/tag pair is already related.
    #[error("task {} is already tagged with tag {}", .0.task_id, .0.tag_id)]
    DuplicateRelation(TaskTagRelation),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
