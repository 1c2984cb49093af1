//! Error taxonomy surfaced by the task service.

use crate::task::{
    domain::{EntityKind, TagId, TaskDomainError, TaskId},
    ports::RepositoryError,
};
use thiserror::Error;

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The entity does not exist or is owned by another user. The two cases
    /// are deliberately reported the same way.
    #[error("{entity} with id {id} is not found")]
    NotFound {
        /// Kind of the requested entity.
        entity: EntityKind,
        /// Identifier of the requested entity.
        id: i64,
    },

    /// An entity with the same natural key already exists.
    #[error("{message}")]
    AlreadyExists {
        /// Default message.
        message: String,
        /// Message in the caller's locale.
        localized_message: String,
    },

    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl TaskServiceError {
    /// Builds the not-found error for a task.
    #[must_use]
    pub const fn task_not_found(id: TaskId) -> Self {
        Self::NotFound {
            entity: EntityKind::Task,
            id: id.value(),
        }
    }

    /// Builds the not-found error for a tag.
    #[must_use]
    pub const fn tag_not_found(id: TagId) -> Self {
        Self::NotFound {
            entity: EntityKind::Tag,
            id: id.value(),
        }
    }

    /// Builds an already-exists error.
    #[must_use]
    pub fn already_exists(message: impl Into<String>, localized_message: impl Into<String>) -> Self {
        Self::AlreadyExists {
            message: message.into(),
            localized_message: localized_message.into(),
        }
    }

    /// Returns `true` for [`TaskServiceError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;
