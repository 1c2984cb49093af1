//! In-memory tag and task/tag relation repositories.

use super::InMemoryTaskStore;
use crate::task::{
    domain::{EntityKind, Tag, TagId, TaskId, TaskTagRelation, UserId},
    ports::{RepositoryError, RepositoryResult, TagRepository, TaskTagRelationRepository},
};
use async_trait::async_trait;

/// Thread-safe in-memory tag repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTagRepository {
    store: InMemoryTaskStore,
}

impl InMemoryTagRepository {
    /// Creates a repository over the given store.
    #[must_use]
    pub const fn new(store: InMemoryTaskStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn find_by_id_and_user(
        &self,
        id: TagId,
        user_id: UserId,
    ) -> RepositoryResult<Option<Tag>> {
        let state = self.store.read()?;
        Ok(state
            .tags
            .get(&id)
            .filter(|tag| tag.user_id() == user_id)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[TagId]) -> RepositoryResult<Vec<Tag>> {
        let state = self.store.read()?;
        Ok(ids
            .iter()
            .filter_map(|id| state.tags.get(id).cloned())
            .collect())
    }

    async fn save(&self, tag: Tag) -> RepositoryResult<Tag> {
        let mut state = self.store.write()?;
        let id = match tag.id() {
            Some(id) if !state.tags.contains_key(&id) => {
                return Err(RepositoryError::MissingRecord {
                    entity: EntityKind::Tag,
                    id: id.value(),
                });
            }
            Some(id) => id,
            None => state.next_tag_id(),
        };
        let stored = tag.persisted_as(id);
        state.tags.insert(id, stored.clone());
        Ok(stored)
    }
}

/// Thread-safe in-memory task/tag relation repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskTagRelationRepository {
    store: InMemoryTaskStore,
}

impl InMemoryTaskTagRelationRepository {
    /// Creates a repository over the given store.
    #[must_use]
    pub const fn new(store: InMemoryTaskStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TaskTagRelationRepository for InMemoryTaskTagRelationRepository {
    async fn find_by_task_id(&self, task_id: TaskId) -> RepositoryResult<Vec<TaskTagRelation>> {
        let state = self.store.read()?;
        Ok(state
            .relations
            .iter()
            .filter(|relation| relation.task_id == task_id)
            .copied()
            .collect())
    }

    async fn find_by_task_and_tag(
        &self,
        task_id: TaskId,
        tag_id: TagId,
    ) -> RepositoryResult<Option<TaskTagRelation>> {
        let state = self.store.read()?;
        let relation = TaskTagRelation::new(task_id, tag_id);
        Ok(state.relations.get(&relation).copied())
    }

    async fn create(&self, relation: TaskTagRelation) -> RepositoryResult<()> {
        let mut state = self.store.write()?;
        if !state.relations.insert(relation) {
            return Err(RepositoryError::DuplicateRelation(relation));
        }
        Ok(())
    }

    async fn delete_by_task_and_tag(
        &self,
        task_id: TaskId,
        tag_id: TagId,
    ) -> RepositoryResult<()> {
        let mut state = self.store.write()?;
        state
            .relations
            .remove(&TaskTagRelation::new(task_id, tag_id));
        Ok(())
    }
}
