//! Domain model for the task lifecycle.
//!
//! Tasks, tags, comments, pagination and query specifications live here with
//! no knowledge of persistence or transport. Every entity is owner-scoped
//! through a [`UserId`].

mod comment;
mod error;
mod ids;
mod page;
mod query;
mod tag;
mod task;
mod text;

pub use comment::{PersistedCommentData, TaskComment};
pub use error::{EntityKind, ParseTaskStatusError, TaskDomainError};
pub use ids::{TagId, TaskCommentId, TaskId, TaskListId, UserId};
pub use page::{PageBounds, PageRequest};
pub use query::{DeadlineFilter, StatusFilter, TaskQuery};
pub use tag::{Tag, TaskTagRelation};
pub use task::{PersistedTaskData, Task, TaskContent, TaskStatus};
pub use text::{
    CommentText, MAX_COMMENT_CHARS, MAX_DESCRIPTION_CHARS, MAX_TAG_NAME_CHARS, MAX_TITLE_CHARS,
    TagName, TaskDescription, TaskTitle,
};
