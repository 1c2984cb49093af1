//! In-memory repositories for task lifecycle tests and embedding.
//!
//! All repositories created from one [`InMemoryTaskStore`] share the same
//! state, so deleting a task also drops its tag relations and comments the
//! way foreign-key cascades do in `PostgreSQL`.

mod comment;
mod tag;
mod task;

pub use comment::InMemoryTaskCommentRepository;
pub use tag::{InMemoryTagRepository, InMemoryTaskTagRelationRepository};
pub use task::InMemoryTaskRepository;

use crate::task::{
    domain::{Tag, TagId, Task, TaskComment, TaskCommentId, TaskId, TaskTagRelation},
    ports::{RepositoryError, RepositoryResult},
};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared state behind the in-memory repositories.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    last_task_id: i64,
    last_tag_id: i64,
    last_comment_id: i64,
    tasks: BTreeMap<TaskId, Task>,
    tags: BTreeMap<TagId, Tag>,
    relations: BTreeSet<TaskTagRelation>,
    comments: BTreeMap<TaskCommentId, TaskComment>,
}

impl InMemoryState {
    const fn next_task_id(&mut self) -> TaskId {
        self.last_task_id += 1;
        TaskId::new(self.last_task_id)
    }

    const fn next_tag_id(&mut self) -> TagId {
        self.last_tag_id += 1;
        TagId::new(self.last_tag_id)
    }

    const fn next_comment_id(&mut self) -> TaskCommentId {
        self.last_comment_id += 1;
        TaskCommentId::new(self.last_comment_id)
    }
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a task repository backed by this store.
    #[must_use]
    pub fn tasks(&self) -> InMemoryTaskRepository {
        InMemoryTaskRepository::new(self.clone())
    }

    /// Returns a tag repository backed by this store.
    #[must_use]
    pub fn tags(&self) -> InMemoryTagRepository {
        InMemoryTagRepository::new(self.clone())
    }

    /// Returns a task/tag relation repository backed by this store.
    #[must_use]
    pub fn relations(&self) -> InMemoryTaskTagRelationRepository {
        InMemoryTaskTagRelationRepository::new(self.clone())
    }

    /// Returns a comment repository backed by this store.
    #[must_use]
    pub fn comments(&self) -> InMemoryTaskCommentRepository {
        InMemoryTaskCommentRepository::new(self.clone())
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, InMemoryState>> {
        self.state.read().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, InMemoryState>> {
        self.state.write().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}
