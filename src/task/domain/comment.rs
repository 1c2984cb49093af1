//! Comments attached to tasks.

use super::{CommentText, TaskCommentId, TaskId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Comment left on a task by the task owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskComment {
    id: Option<TaskCommentId>,
    task_id: TaskId,
    user_id: UserId,
    comment_text: CommentText,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCommentData {
    /// Persisted comment identifier.
    pub id: TaskCommentId,
    /// Task the comment belongs to.
    pub task_id: TaskId,
    /// Owner of the commented task.
    pub user_id: UserId,
    /// Comment body.
    pub comment_text: CommentText,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the latest edit, if any.
    pub updated_at: Option<DateTime<Utc>>,
}

impl TaskComment {
    /// Creates a new, not yet persisted comment stamped with the current
    /// clock time and no edit timestamp.
    #[must_use]
    pub fn new(
        task_id: TaskId,
        user_id: UserId,
        comment_text: CommentText,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: None,
            task_id,
            user_id,
            comment_text,
            created_at: clock.utc(),
            updated_at: None,
        }
    }

    /// Reconstructs a comment from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCommentData) -> Self {
        Self {
            id: Some(data.id),
            task_id: data.task_id,
            user_id: data.user_id,
            comment_text: data.comment_text,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns this comment carrying the identifier assigned by persistence.
    #[must_use]
    pub fn persisted_as(self, id: TaskCommentId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    /// Returns the persisted identifier, or `None` before the first save.
    #[must_use]
    pub const fn id(&self) -> Option<TaskCommentId> {
        self.id
    }

    /// Returns the commented task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the owner of the commented task.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the comment body.
    #[must_use]
    pub const fn comment_text(&self) -> &CommentText {
        &self.comment_text
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest edit timestamp, or `None` if never edited.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}
