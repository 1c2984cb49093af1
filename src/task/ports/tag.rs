//! Repository ports for tags and task/tag relations.

use super::RepositoryResult;
use crate::task::domain::{Tag, TagId, TaskId, TaskTagRelation, UserId};
use async_trait::async_trait;

/// Tag persistence contract.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Finds a tag by identifier within the owner's tags.
    async fn find_by_id_and_user(&self, id: TagId, user_id: UserId)
    -> RepositoryResult<Option<Tag>>;

    /// Returns the tags with the given identifiers. Unknown identifiers are
    /// skipped.
    async fn find_by_ids(&self, ids: &[TagId]) -> RepositoryResult<Vec<Tag>>;

    /// Inserts a tag without an identifier or updates the tag with the given
    /// identifier, returning the stored value.
    async fn save(&self, tag: Tag) -> RepositoryResult<Tag>;
}

/// Task/tag relation persistence contract.
#[async_trait]
pub trait TaskTagRelationRepository: Send + Sync {
    /// Returns every relation of the task.
    async fn find_by_task_id(&self, task_id: TaskId) -> RepositoryResult<Vec<TaskTagRelation>>;

    /// Finds the relation for the given pair.
    async fn find_by_task_and_tag(
        &self,
        task_id: TaskId,
        tag_id: TagId,
    ) -> RepositoryResult<Option<TaskTagRelation>>;

    /// Stores a relation.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::DuplicateRelation`] when the pair is
    /// already related.
    async fn create(&self, relation: TaskTagRelation) -> RepositoryResult<()>;

    /// Removes the relation for the given pair if it exists.
    async fn delete_by_task_and_tag(&self, task_id: TaskId, tag_id: TagId)
    -> RepositoryResult<()>;
}
