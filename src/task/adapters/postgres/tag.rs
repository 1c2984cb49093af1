//! `PostgreSQL` repositories for tags and task/tag relations.

use super::{
    TaskPgPool,
    models::{NewTagRow, TagRow, TaskTagRow},
    run_blocking,
    schema::{tags, tasks_tags},
};
use crate::task::{
    domain::{EntityKind, Tag, TagId, TagName, TaskId, TaskTagRelation, UserId},
    ports::{RepositoryError, RepositoryResult, TagRepository, TaskTagRelationRepository},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed tag repository.
#[derive(Debug, Clone)]
pub struct PostgresTagRepository {
    pool: TaskPgPool,
}

impl PostgresTagRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn find_by_id_and_user(
        &self,
        id: TagId,
        user_id: UserId,
    ) -> RepositoryResult<Option<Tag>> {
        run_blocking(self.pool.clone(), move |connection| {
            let row = tags::table
                .filter(tags::id.eq(id.value()))
                .filter(tags::user_id.eq(user_id.value()))
                .select(TagRow::as_select())
                .first::<TagRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_tag).transpose()
        })
        .await
    }

    async fn find_by_ids(&self, ids: &[TagId]) -> RepositoryResult<Vec<Tag>> {
        let keys: Vec<i64> = ids.iter().map(|id| id.value()).collect();
        run_blocking(self.pool.clone(), move |connection| {
            tags::table
                .filter(tags::id.eq_any(keys))
                .order(tags::id.asc())
                .select(TagRow::as_select())
                .load::<TagRow>(connection)
                .map_err(RepositoryError::persistence)?
                .into_iter()
                .map(row_to_tag)
                .collect()
        })
        .await
    }

    async fn save(&self, tag: Tag) -> RepositoryResult<Tag> {
        run_blocking(self.pool.clone(), move |connection| {
            let values = NewTagRow {
                user_id: tag.user_id().value(),
                name: tag.name().as_str().to_owned(),
            };
            let row = match tag.id() {
                Some(id) => diesel::update(tags::table.find(id.value()))
                    .set(&values)
                    .returning(TagRow::as_returning())
                    .get_result::<TagRow>(connection)
                    .optional()
                    .map_err(RepositoryError::persistence)?
                    .ok_or(RepositoryError::MissingRecord {
                        entity: EntityKind::Tag,
                        id: id.value(),
                    })?,
                None => diesel::insert_into(tags::table)
                    .values(&values)
                    .returning(TagRow::as_returning())
                    .get_result::<TagRow>(connection)
                    .map_err(RepositoryError::persistence)?,
            };
            row_to_tag(row)
        })
        .await
    }
}

/// `PostgreSQL`-backed task/tag relation repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskTagRelationRepository {
    pool: TaskPgPool,
}

impl PostgresTaskTagRelationRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskTagRelationRepository for PostgresTaskTagRelationRepository {
    async fn find_by_task_id(&self, task_id: TaskId) -> RepositoryResult<Vec<TaskTagRelation>> {
        run_blocking(self.pool.clone(), move |connection| {
            let rows = tasks_tags::table
                .filter(tasks_tags::task_id.eq(task_id.value()))
                .order(tasks_tags::tag_id.asc())
                .select(TaskTagRow::as_select())
                .load::<TaskTagRow>(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_relation).collect())
        })
        .await
    }

    async fn find_by_task_and_tag(
        &self,
        task_id: TaskId,
        tag_id: TagId,
    ) -> RepositoryResult<Option<TaskTagRelation>> {
        run_blocking(self.pool.clone(), move |connection| {
            let row = tasks_tags::table
                .find((task_id.value(), tag_id.value()))
                .select(TaskTagRow::as_select())
                .first::<TaskTagRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            Ok(row.map(row_to_relation))
        })
        .await
    }

    async fn create(&self, relation: TaskTagRelation) -> RepositoryResult<()> {
        run_blocking(self.pool.clone(), move |connection| {
            let row = TaskTagRow {
                task_id: relation.task_id.value(),
                tag_id: relation.tag_id.value(),
            };
            diesel::insert_into(tasks_tags::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        RepositoryError::DuplicateRelation(relation)
                    }
                    _ => RepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn delete_by_task_and_tag(
        &self,
        task_id: TaskId,
        tag_id: TagId,
    ) -> RepositoryResult<()> {
        run_blocking(self.pool.clone(), move |connection| {
            diesel::delete(tasks_tags::table.find((task_id.value(), tag_id.value())))
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn row_to_tag(row: TagRow) -> RepositoryResult<Tag> {
    let name = TagName::new(row.name).map_err(RepositoryError::persistence)?;
    Ok(Tag::from_persisted(
        TagId::new(row.id),
        UserId::new(row.user_id),
        name,
    ))
}

const fn row_to_relation(row: TaskTagRow) -> TaskTagRelation {
    TaskTagRelation::new(TaskId::new(row.task_id), TagId::new(row.tag_id))
}
