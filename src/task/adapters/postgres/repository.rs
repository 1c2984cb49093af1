//! `PostgreSQL` repository implementation for task storage.

use super::{
    TaskPgPool,
    models::{NewTaskRow, TaskChangeset, TaskRow},
    run_blocking,
    schema::tasks,
    to_i64,
};
use crate::task::{
    domain::{
        DeadlineFilter, EntityKind, PageBounds, PersistedTaskData, StatusFilter, Task,
        TaskDescription, TaskId, TaskListId, TaskQuery, TaskStatus, TaskTitle, UserId,
    },
    ports::{RepositoryError, RepositoryResult, TaskRepository},
};
use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn find_by_id_and_user(
        &self,
        id: TaskId,
        user_id: UserId,
    ) -> RepositoryResult<Option<Task>> {
        run_blocking(self.pool.clone(), move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.value()))
                .filter(tasks::user_id.eq(user_id.value()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find(&self, query: &TaskQuery, bounds: PageBounds) -> RepositoryResult<Vec<Task>> {
        let spec = *query;
        let offset = to_i64(bounds.offset)?;
        run_blocking(self.pool.clone(), move |connection| {
            let mut statement = filtered(&spec)
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .offset(offset);
            if let Some(limit) = bounds.limit {
                statement = statement.limit(i64::from(limit.get()));
            }
            statement
                .load::<TaskRow>(connection)
                .map_err(RepositoryError::persistence)?
                .into_iter()
                .map(row_to_task)
                .collect()
        })
        .await
    }

    async fn count(&self, query: &TaskQuery) -> RepositoryResult<u64> {
        let spec = *query;
        run_blocking(self.pool.clone(), move |connection| {
            let total = filtered(&spec)
                .count()
                .get_result::<i64>(connection)
                .map_err(RepositoryError::persistence)?;
            u64::try_from(total).map_err(RepositoryError::persistence)
        })
        .await
    }

    async fn save(&self, task: Task) -> RepositoryResult<Task> {
        run_blocking(self.pool.clone(), move |connection| {
            let row = match task.id() {
                Some(id) => diesel::update(tasks::table.find(id.value()))
                    .set(&to_changeset(&task))
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(connection)
                    .optional()
                    .map_err(RepositoryError::persistence)?
                    .ok_or(RepositoryError::MissingRecord {
                        entity: EntityKind::Task,
                        id: id.value(),
                    })?,
                None => diesel::insert_into(tasks::table)
                    .values(&to_new_row(&task))
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(connection)
                    .map_err(RepositoryError::persistence)?,
            };
            row_to_task(row)
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> RepositoryResult<()> {
        run_blocking(self.pool.clone(), move |connection| {
            // Relations and comments go with the row through ON DELETE CASCADE.
            diesel::delete(tasks::table.find(id.value()))
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn filtered(query: &TaskQuery) -> tasks::BoxedQuery<'static, Pg> {
    let owned = tasks::table
        .filter(tasks::user_id.eq(query.owner.value()))
        .into_boxed();
    let by_status = match query.status {
        StatusFilter::Is(status) => owned.filter(tasks::status.eq(status.as_str())),
        StatusFilter::IsNot(status) => owned.filter(tasks::status.ne(status.as_str())),
    };
    match query.deadline {
        DeadlineFilter::Any => by_status,
        DeadlineFilter::Missing => by_status.filter(tasks::deadline.is_null()),
        DeadlineFilter::AtOrAfter(lower) => by_status.filter(tasks::deadline.ge(lower)),
        DeadlineFilter::AtOrBefore(upper) => by_status.filter(tasks::deadline.le(upper)),
        DeadlineFilter::Between(lower, upper) => {
            by_status.filter(tasks::deadline.between(lower, upper))
        }
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        user_id: task.user_id().value(),
        task_list_id: task.task_list_id().map(TaskListId::value),
        title: task.title().as_str().to_owned(),
        description: task.description().map(|text| text.as_str().to_owned()),
        status: task.status().as_str().to_owned(),
        deadline: task.deadline(),
        created_at: task.created_at(),
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        task_list_id: task.task_list_id().map(TaskListId::value),
        title: task.title().as_str().to_owned(),
        description: task.description().map(|text| text.as_str().to_owned()),
        status: task.status().as_str().to_owned(),
        deadline: task.deadline(),
    }
}

fn row_to_task(row: TaskRow) -> RepositoryResult<Task> {
    let TaskRow {
        id,
        user_id,
        task_list_id,
        title: persisted_title,
        description: persisted_description,
        status: persisted_status,
        deadline,
        created_at,
    } = row;

    let title = TaskTitle::new(persisted_title).map_err(RepositoryError::persistence)?;
    let description = persisted_description
        .map(TaskDescription::new)
        .transpose()
        .map_err(RepositoryError::persistence)?;
    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(RepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        user_id: UserId::new(user_id),
        task_list_id: task_list_id.map(TaskListId::new),
        title,
        description,
        status,
        deadline,
        created_at,
    }))
}
