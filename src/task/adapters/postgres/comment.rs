//! `PostgreSQL` repository for task comments.

use super::{
    TaskPgPool,
    models::{CommentChangeset, CommentRow, NewCommentRow},
    run_blocking,
    schema::task_comments,
    to_i64,
};
use crate::task::{
    domain::{
        CommentText, EntityKind, PageBounds, PersistedCommentData, TaskComment, TaskCommentId,
        TaskId, UserId,
    },
    ports::{RepositoryError, RepositoryResult, TaskCommentRepository},
};
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed comment repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskCommentRepository {
    pool: TaskPgPool,
}

impl PostgresTaskCommentRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskCommentRepository for PostgresTaskCommentRepository {
    async fn find_by_task_id(
        &self,
        task_id: TaskId,
        bounds: PageBounds,
    ) -> RepositoryResult<Vec<TaskComment>> {
        let offset = to_i64(bounds.offset)?;
        run_blocking(self.pool.clone(), move |connection| {
            let mut statement = task_comments::table
                .filter(task_comments::task_id.eq(task_id.value()))
                .order((task_comments::created_at.desc(), task_comments::id.desc()))
                .offset(offset)
                .into_boxed();
            if let Some(limit) = bounds.limit {
                statement = statement.limit(i64::from(limit.get()));
            }
            statement
                .load::<CommentRow>(connection)
                .map_err(RepositoryError::persistence)?
                .into_iter()
                .map(row_to_comment)
                .collect()
        })
        .await
    }

    async fn save(&self, comment: TaskComment) -> RepositoryResult<TaskComment> {
        run_blocking(self.pool.clone(), move |connection| {
            let row = match comment.id() {
                Some(id) => diesel::update(task_comments::table.find(id.value()))
                    .set(&CommentChangeset {
                        comment_text: comment.comment_text().as_str().to_owned(),
                        updated_at: comment.updated_at(),
                    })
                    .returning(CommentRow::as_returning())
                    .get_result::<CommentRow>(connection)
                    .optional()
                    .map_err(RepositoryError::persistence)?
                    .ok_or(RepositoryError::MissingRecord {
                        entity: EntityKind::TaskComment,
                        id: id.value(),
                    })?,
                None => diesel::insert_into(task_comments::table)
                    .values(&NewCommentRow {
                        task_id: comment.task_id().value(),
                        user_id: comment.user_id().value(),
                        comment_text: comment.comment_text().as_str().to_owned(),
                        created_at: comment.created_at(),
                        updated_at: comment.updated_at(),
                    })
                    .returning(CommentRow::as_returning())
                    .get_result::<CommentRow>(connection)
                    .map_err(RepositoryError::persistence)?,
            };
            row_to_comment(row)
        })
        .await
    }
}

fn row_to_comment(row: CommentRow) -> RepositoryResult<TaskComment> {
    let comment_text = CommentText::new(row.comment_text).map_err(RepositoryError::persistence)?;
    Ok(TaskComment::from_persisted(PersistedCommentData {
        id: TaskCommentId::new(row.id),
        task_id: TaskId::new(row.task_id),
        user_id: UserId::new(row.user_id),
        comment_text,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}
