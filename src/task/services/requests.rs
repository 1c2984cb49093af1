//! Request payloads accepted by the task service.
//!
//! Requests carry raw caller input; the service validates it into domain
//! values. Server-owned fields (identifiers, timestamps, task list) have no
//! place here, so callers cannot override them.

use crate::task::domain::{
    TaskContent, TaskDescription, TaskDomainError, TaskId, TaskStatus, TaskTitle, UserId,
};
use chrono::{DateTime, Utc};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    pub(crate) user_id: UserId,
    pub(crate) fields: TaskFields,
    pub(crate) status: Option<TaskStatus>,
}

impl CreateTaskRequest {
    /// Creates a request for a task owned by `user_id`.
    #[must_use]
    pub fn new(user_id: UserId, title: impl Into<String>) -> Self {
        Self {
            user_id,
            fields: TaskFields::new(title.into()),
            status: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.fields.description = Some(description.into());
        self
    }

    /// Sets the task deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.fields.deadline = Some(deadline);
        self
    }

    /// Sets an explicit initial status instead of deriving it from the
    /// deadline.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Request payload for replacing the editable fields of a task.
///
/// Fields left unset are cleared, except the status, which keeps its current
/// value when omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    pub(crate) task_id: TaskId,
    pub(crate) user_id: UserId,
    pub(crate) fields: TaskFields,
    pub(crate) status: Option<TaskStatus>,
}

impl UpdateTaskRequest {
    /// Creates a request updating task `task_id` owned by `user_id`.
    #[must_use]
    pub fn new(task_id: TaskId, user_id: UserId, title: impl Into<String>) -> Self {
        Self {
            task_id,
            user_id,
            fields: TaskFields::new(title.into()),
            status: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.fields.description = Some(description.into());
        self
    }

    /// Sets the task deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.fields.deadline = Some(deadline);
        self
    }

    /// Sets the task status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Request payload for commenting on a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommentRequest {
    pub(crate) task_id: TaskId,
    pub(crate) user_id: UserId,
    pub(crate) comment_text: String,
}

impl AddCommentRequest {
    /// Creates a request adding `comment_text` to task `task_id` owned by
    /// `user_id`.
    #[must_use]
    pub fn new(task_id: TaskId, user_id: UserId, comment_text: impl Into<String>) -> Self {
        Self {
            task_id,
            user_id,
            comment_text: comment_text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TaskFields {
    title: String,
    description: Option<String>,
    deadline: Option<DateTime<Utc>>,
}

impl TaskFields {
    const fn new(title: String) -> Self {
        Self {
            title,
            description: None,
            deadline: None,
        }
    }

    pub(crate) fn into_content(self) -> Result<TaskContent, TaskDomainError> {
        Ok(TaskContent {
            title: TaskTitle::new(self.title)?,
            description: self.description.map(TaskDescription::new).transpose()?,
            deadline: self.deadline,
        })
    }
}
