//! Diesel row models for task persistence.

use super::schema::{task_comments, tags, tasks, tasks_tags};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: i64,
    /// Owner identifier.
    pub user_id: i64,
    /// Optional task list identifier.
    pub task_list_id: Option<i64>,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: String,
    /// Optional deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Owner identifier.
    pub user_id: i64,
    /// Optional task list identifier.
    pub task_list_id: Option<i64>,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: String,
    /// Optional deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Update model for task records. Owner and creation time never change.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Optional task list identifier.
    pub task_list_id: Option<i64>,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: String,
    /// Optional deadline.
    pub deadline: Option<DateTime<Utc>>,
}

/// Query result row for tag records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tags)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TagRow {
    /// Tag identifier.
    pub id: i64,
    /// Owner identifier.
    pub user_id: i64,
    /// Tag name.
    pub name: String,
}

/// Insert and update model for tag records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tags)]
pub struct NewTagRow {
    /// Owner identifier.
    pub user_id: i64,
    /// Tag name.
    pub name: String,
}

/// Row model for task/tag join records.
#[derive(Debug, Clone, Copy, Queryable, Selectable, Insertable)]
#[diesel(table_name = tasks_tags)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskTagRow {
    /// Tagged task.
    pub task_id: i64,
    /// Applied tag.
    pub tag_id: i64,
}

/// Query result row for comment records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task_comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CommentRow {
    /// Comment identifier.
    pub id: i64,
    /// Commented task.
    pub task_id: i64,
    /// Owner of the commented task.
    pub user_id: i64,
    /// Comment body.
    pub comment_text: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest edit timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert model for comment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task_comments)]
pub struct NewCommentRow {
    /// Commented task.
    pub task_id: i64,
    /// Owner of the commented task.
    pub user_id: i64,
    /// Comment body.
    pub comment_text: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest edit timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Update model for comment records. The commented task never changes.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = task_comments)]
#[diesel(treat_none_as_null = true)]
pub struct CommentChangeset {
    /// Comment body.
    pub comment_text: String,
    /// Latest edit timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}
