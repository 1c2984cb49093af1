//! In-memory task repository.

use super::InMemoryTaskStore;
use crate::task::{
    domain::{EntityKind, PageBounds, Task, TaskId, TaskQuery, UserId},
    ports::{RepositoryError, RepositoryResult, TaskRepository},
};
use async_trait::async_trait;

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    store: InMemoryTaskStore,
}

impl InMemoryTaskRepository {
    /// Creates a repository over the given store.
    #[must_use]
    pub const fn new(store: InMemoryTaskStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_by_id_and_user(
        &self,
        id: TaskId,
        user_id: UserId,
    ) -> RepositoryResult<Option<Task>> {
        let state = self.store.read()?;
        Ok(state
            .tasks
            .get(&id)
            .filter(|task| task.user_id() == user_id)
            .cloned())
    }

    async fn find(&self, query: &TaskQuery, bounds: PageBounds) -> RepositoryResult<Vec<Task>> {
        let state = self.store.read()?;
        let mut selected: Vec<&Task> = state
            .tasks
            .values()
            .filter(|task| query.matches(task))
            .collect();
        // Identifiers are already ascending, so the stable sort keeps them as
        // the tiebreak for equal creation times.
        selected.sort_by_key(|task| task.created_at());
        Ok(bounds.apply(selected.into_iter().cloned()))
    }

    async fn count(&self, query: &TaskQuery) -> RepositoryResult<u64> {
        let state = self.store.read()?;
        let matching = state.tasks.values().filter(|task| query.matches(task)).count();
        u64::try_from(matching).map_err(RepositoryError::persistence)
    }

    async fn save(&self, task: Task) -> RepositoryResult<Task> {
        let mut state = self.store.write()?;
        let id = match task.id() {
            Some(id) if !state.tasks.contains_key(&id) => {
                return Err(RepositoryError::MissingRecord {
                    entity: EntityKind::Task,
                    id: id.value(),
                });
            }
            Some(id) => id,
            None => state.next_task_id(),
        };
        let stored = task.persisted_as(id);
        state.tasks.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: TaskId) -> RepositoryResult<()> {
        let mut state = self.store.write()?;
        if state.tasks.remove(&id).is_some() {
            state.relations.retain(|relation| relation.task_id != id);
            state.comments.retain(|_, comment| comment.task_id() != id);
        }
        Ok(())
    }
}
