//! In-memory task comment repository.

use super::InMemoryTaskStore;
use crate::task::{
    domain::{EntityKind, PageBounds, TaskComment, TaskId},
    ports::{RepositoryError, RepositoryResult, TaskCommentRepository},
};
use async_trait::async_trait;
use std::cmp::Reverse;

/// Thread-safe in-memory comment repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskCommentRepository {
    store: InMemoryTaskStore,
}

impl InMemoryTaskCommentRepository {
    /// Creates a repository over the given store.
    #[must_use]
    pub const fn new(store: InMemoryTaskStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TaskCommentRepository for InMemoryTaskCommentRepository {
    async fn find_by_task_id(
        &self,
        task_id: TaskId,
        bounds: PageBounds,
    ) -> RepositoryResult<Vec<TaskComment>> {
        let state = self.store.read()?;
        let mut selected: Vec<&TaskComment> = state
            .comments
            .values()
            .filter(|comment| comment.task_id() == task_id)
            .collect();
        selected.sort_by_key(|comment| (Reverse(comment.created_at()), Reverse(comment.id())));
        Ok(bounds.apply(selected.into_iter().cloned()))
    }

    async fn save(&self, comment: TaskComment) -> RepositoryResult<TaskComment> {
        let mut state = self.store.write()?;
        let id = match comment.id() {
            Some(id) if !state.comments.contains_key(&id) => {
                return Err(RepositoryError::MissingRecord {
                    entity: EntityKind::TaskComment,
                    id: id.value(),
                });
            }
            Some(id) => id,
            None => state.next_comment_id(),
        };
        let stored = comment.persisted_as(id);
        state.comments.insert(id, stored.clone());
        Ok(stored)
    }
}
