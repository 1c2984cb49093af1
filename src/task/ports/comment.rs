//! Repository port for task comments.

use super::RepositoryResult;
use crate::task::domain::{PageBounds, TaskComment, TaskId};
use async_trait::async_trait;

/// Task comment persistence contract.
#[async_trait]
pub trait TaskCommentRepository: Send + Sync {
    /// Returns the task's comments, newest first, restricted to `bounds`.
    async fn find_by_task_id(
        &self,
        task_id: TaskId,
        bounds: PageBounds,
    ) -> RepositoryResult<Vec<TaskComment>>;

    /// Inserts a comment without an identifier or updates the comment with
    /// the given identifier, returning the stored value.
    async fn save(&self, comment: TaskComment) -> RepositoryResult<TaskComment>;
}
