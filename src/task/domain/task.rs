//! Task aggregate and lifecycle status.

use super::{
    ParseTaskStatusError, TaskDescription, TaskDomainError, TaskId, TaskListId, TaskTitle, UserId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task has no deadline and has not been scheduled yet.
    Unprocessed,
    /// Task has been scheduled, usually by assigning a deadline.
    Processed,
    /// Task has been completed.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unprocessed => "UNPROCESSED",
            Self::Processed => "PROCESSED",
            Self::Completed => "COMPLETED",
        }
    }

    /// Returns the status a new task receives when the caller leaves it unset.
    #[must_use]
    pub const fn initial_for(deadline: Option<DateTime<Utc>>) -> Self {
        if deadline.is_some() {
            Self::Processed
        } else {
            Self::Unprocessed
        }
    }

    /// Applies the update normalization rule: an unprocessed task with a
    /// deadline is stored as processed.
    #[must_use]
    pub const fn normalized_for(self, deadline: Option<DateTime<Utc>>) -> Self {
        match self {
            Self::Unprocessed if deadline.is_some() => Self::Processed,
            other => other,
        }
    }

    /// Returns `true` for the status reached through task completion.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "UNPROCESSED" => Ok(Self::Unprocessed),
            "PROCESSED" => Ok(Self::Processed),
            "COMPLETED" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Caller-editable task fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskContent {
    /// Task title.
    pub title: TaskTitle,
    /// Optional description.
    pub description: Option<TaskDescription>,
    /// Optional deadline.
    pub deadline: Option<DateTime<Utc>>,
}

impl TaskContent {
    /// Creates content with a title and no description or deadline.
    #[must_use]
    pub const fn new(title: TaskTitle) -> Self {
        Self {
            title,
            description: None,
            deadline: None,
        }
    }
}

/// Task aggregate root.
///
/// Values are immutable: every lifecycle operation returns a new task and
/// leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: Option<TaskId>,
    user_id: UserId,
    task_list_id: Option<TaskListId>,
    title: TaskTitle,
    description: Option<TaskDescription>,
    status: TaskStatus,
    deadline: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owner of the task.
    pub user_id: UserId,
    /// Task list the task is grouped under, if any.
    pub task_list_id: Option<TaskListId>,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: Option<TaskDescription>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, not yet persisted task owned by `user_id`.
    ///
    /// When `status` is `None` the status is derived from the deadline.
    /// An explicit status is kept verbatim: unlike [`Task::revise`], creation
    /// does not normalize an unprocessed task that carries a deadline.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DeadlineInPast`] when the deadline is
    /// earlier than the current clock time.
    pub fn create(
        user_id: UserId,
        content: TaskContent,
        status: Option<TaskStatus>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let now = clock.utc();
        if let Some(deadline) = content.deadline.filter(|deadline| *deadline < now) {
            return Err(TaskDomainError::DeadlineInPast { deadline });
        }

        Ok(Self {
            id: None,
            user_id,
            task_list_id: None,
            status: status.unwrap_or_else(|| TaskStatus::initial_for(content.deadline)),
            title: content.title,
            description: content.description,
            deadline: content.deadline,
            created_at: now,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: Some(data.id),
            user_id: data.user_id,
            task_list_id: data.task_list_id,
            title: data.title,
            description: data.description,
            status: data.status,
            deadline: data.deadline,
            created_at: data.created_at,
        }
    }

    /// Returns this task carrying the identifier assigned by persistence.
    #[must_use]
    pub fn persisted_as(self, id: TaskId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    /// Returns a revision of this task with caller-supplied content.
    ///
    /// Identity, owner, task list and creation time are carried over from
    /// `self`. An omitted status keeps the current one, and the result is
    /// normalized so that an unprocessed task with a deadline becomes
    /// processed.
    #[must_use]
    pub fn revise(&self, content: TaskContent, status: Option<TaskStatus>) -> Self {
        let next_status = status
            .unwrap_or(self.status)
            .normalized_for(content.deadline);
        Self {
            id: self.id,
            user_id: self.user_id,
            task_list_id: self.task_list_id,
            title: content.title,
            description: content.description,
            status: next_status,
            deadline: content.deadline,
            created_at: self.created_at,
        }
    }

    /// Returns a completed copy of this task.
    #[must_use]
    pub fn complete(&self) -> Self {
        Self {
            status: TaskStatus::Completed,
            ..self.clone()
        }
    }

    /// Returns the persisted identifier, or `None` before the first save.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the owner.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the task list, if any.
    #[must_use]
    pub const fn task_list_id(&self) -> Option<TaskListId> {
        self.task_list_id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
