//! User-scoped tags and their many-to-many association with tasks.

use super::{TagId, TagName, TaskId, UserId};
use serde::{Deserialize, Serialize};

/// Label owned by a single user and attachable to any of that user's tasks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    id: Option<TagId>,
    user_id: UserId,
    name: TagName,
}

impl Tag {
    /// Creates a new, not yet persisted tag.
    #[must_use]
    pub const fn new(user_id: UserId, name: TagName) -> Self {
        Self {
            id: None,
            user_id,
            name,
        }
    }

    /// Reconstructs a tag from persisted storage.
    #[must_use]
    pub const fn from_persisted(id: TagId, user_id: UserId, name: TagName) -> Self {
        Self {
            id: Some(id),
            user_id,
            name,
        }
    }

    /// Returns this tag carrying the identifier assigned by persistence.
    #[must_use]
    pub fn persisted_as(self, id: TagId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    /// Returns the persisted identifier, or `None` before the first save.
    #[must_use]
    pub const fn id(&self) -> Option<TagId> {
        self.id
    }

    /// Returns the owner.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the tag name.
    #[must_use]
    pub const fn name(&self) -> &TagName {
        &self.name
    }
}

/// Join record linking a task to a tag.
///
/// The pair is the identity of the record; at most one relation exists per
/// pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskTagRelation {
    /// Tagged task.
    pub task_id: TaskId,
    /// Applied tag.
    pub tag_id: TagId,
}

impl TaskTagRelation {
    /// Creates a relation between a task and a tag.
    #[must_use]
    pub const fn new(task_id: TaskId, tag_id: TagId) -> Self {
        Self { task_id, tag_id }
    }
}
