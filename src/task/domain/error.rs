//! Error types for task domain validation and parsing.

use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

/// Kind of entity named in lookup and persistence failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A task.
    Task,
    /// A tag.
    Tag,
    /// A task comment.
    TaskComment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Task => "Task",
            Self::Tag => "Tag",
            Self::TaskComment => "Comment",
        })
    }
}

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be blank")]
    BlankTitle,

    /// The task title exceeds the maximum length.
    #[error("task title has {actual} characters, exceeds limit of {max}")]
    TitleTooLong {
        /// Character count of the rejected title.
        actual: usize,
        /// Maximum permitted character count.
        max: usize,
    },

    /// The task description exceeds the maximum length.
    #[error("task description has {actual} characters, exceeds limit of {max}")]
    DescriptionTooLong {
        /// Character count of the rejected description.
        actual: usize,
        /// Maximum permitted character count.
        max: usize,
    },

    /// A new task was given a deadline that has already passed.
    #[error("task deadline {deadline} is in the past")]
    DeadlineInPast {
        /// The rejected deadline.
        deadline: DateTime<Utc>,
    },

    /// The comment text is empty after trimming.
    #[error("comment text must not be blank")]
    BlankCommentText,

    /// The comment text exceeds the maximum length.
    #[error("comment text has {actual} characters, exceeds limit of {max}")]
    CommentTextTooLong {
        /// Character count of the rejected text.
        actual: usize,
        /// Maximum permitted character count.
        max: usize,
    },

    /// The tag name is empty after trimming.
    #[error("tag name must not be blank")]
    BlankTagName,

    /// The tag name exceeds the maximum length.
    #[error("tag name has {actual} characters, exceeds limit of {max}")]
    TagNameTooLong {
        /// Character count of the rejected name.
        actual: usize,
        /// Maximum permitted character count.
        max: usize,
    },

    /// A page request asked for zero items per page.
    #[error("page size must be positive")]
    ZeroPageSize,

    /// A page number multiplied by the page size overflowed the offset range.
    #[error("page {page} with size {page_size} overflows the offset range")]
    PageOffsetOverflow {
        /// Requested zero-based page number.
        page: u64,
        /// Requested page size.
        page_size: u32,
    },
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
