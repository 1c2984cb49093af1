//! Task lifecycle service: status queries, CRUD and completion.

use super::{CreateTaskRequest, TaskServiceError, TaskServiceResult, UpdateTaskRequest};
use crate::task::{
    domain::{DeadlineFilter, PageBounds, PageRequest, Task, TaskId, TaskQuery, TaskStatus, UserId},
    ports::{TagRepository, TaskCommentRepository, TaskRepository, TaskTagRelationRepository},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

/// Task lifecycle orchestration service.
///
/// The service owns every business rule of the task core: default and
/// normalized statuses, ownership checks, timestamps and the find-or-create
/// semantics of tag relations. Repositories only store what they are given.
///
/// Every operation takes the owner explicitly. Lookups for records owned by
/// someone else fail with [`TaskServiceError::NotFound`], exactly as if the
/// record did not exist.
#[derive(Clone)]
pub struct TaskService<T, G, R, M, K>
where
    T: TaskRepository,
    G: TagRepository,
    R: TaskTagRelationRepository,
    M: TaskCommentRepository,
    K: Clock + Send + Sync,
{
    pub(super) tasks: Arc<T>,
    pub(super) tags: Arc<G>,
    pub(super) relations: Arc<R>,
    pub(super) comments: Arc<M>,
    pub(super) clock: Arc<K>,
}

impl<T, G, R, M, K> TaskService<T, G, R, M, K>
where
    T: TaskRepository,
    G: TagRepository,
    R: TaskTagRelationRepository,
    M: TaskCommentRepository,
    K: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(
        tasks: Arc<T>,
        tags: Arc<G>,
        relations: Arc<R>,
        comments: Arc<M>,
        clock: Arc<K>,
    ) -> Self {
        Self {
            tasks,
            tags,
            relations,
            comments,
            clock,
        }
    }

    /// Counts the user's unprocessed tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn count_unprocessed(&self, user_id: UserId) -> TaskServiceResult<u64> {
        self.count(TaskQuery::with_status(user_id, TaskStatus::Unprocessed))
            .await
    }

    /// Lists the user's unprocessed tasks, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list_unprocessed(
        &self,
        user_id: UserId,
        page: Option<PageRequest>,
    ) -> TaskServiceResult<Vec<Task>> {
        self.list(TaskQuery::with_status(user_id, TaskStatus::Unprocessed), page)
            .await
    }

    /// Counts the user's processed tasks regardless of deadline.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn count_processed(&self, user_id: UserId) -> TaskServiceResult<u64> {
        self.count(TaskQuery::with_status(user_id, TaskStatus::Processed))
            .await
    }

    /// Lists the user's processed tasks regardless of deadline, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list_processed(
        &self,
        user_id: UserId,
        page: Option<PageRequest>,
    ) -> TaskServiceResult<Vec<Task>> {
        self.list(TaskQuery::with_status(user_id, TaskStatus::Processed), page)
            .await
    }

    /// Counts the user's processed tasks within a deadline range.
    ///
    /// With both bounds absent only tasks without a deadline are counted.
    /// See [`DeadlineFilter::from_bounds`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn count_processed_by_deadline(
        &self,
        user_id: UserId,
        deadline_from: Option<DateTime<Utc>>,
        deadline_to: Option<DateTime<Utc>>,
    ) -> TaskServiceResult<u64> {
        self.count(processed_by_deadline(user_id, deadline_from, deadline_to))
            .await
    }

    /// Lists the user's processed tasks within a deadline range, oldest
    /// first.
    ///
    /// With both bounds absent only tasks without a deadline are returned.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list_processed_by_deadline(
        &self,
        user_id: UserId,
        deadline_from: Option<DateTime<Utc>>,
        deadline_to: Option<DateTime<Utc>>,
        page: Option<PageRequest>,
    ) -> TaskServiceResult<Vec<Task>> {
        self.list(
            processed_by_deadline(user_id, deadline_from, deadline_to),
            page,
        )
        .await
    }

    /// Counts the user's tasks that are not completed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn count_uncompleted(&self, user_id: UserId) -> TaskServiceResult<u64> {
        self.count(TaskQuery::without_status(user_id, TaskStatus::Completed))
            .await
    }

    /// Lists the user's tasks that are not completed, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list_uncompleted(
        &self,
        user_id: UserId,
        page: Option<PageRequest>,
    ) -> TaskServiceResult<Vec<Task>> {
        self.list(
            TaskQuery::without_status(user_id, TaskStatus::Completed),
            page,
        )
        .await
    }

    /// Retrieves one of the user's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// belongs to another user.
    pub async fn get_task(&self, task_id: TaskId, user_id: UserId) -> TaskServiceResult<Task> {
        self.tasks
            .find_by_id_and_user(task_id, user_id)
            .await?
            .ok_or_else(|| TaskServiceError::task_not_found(task_id))
    }

    /// Creates a task.
    ///
    /// The status defaults to processed when a deadline is given and
    /// unprocessed otherwise. An explicitly requested status is stored as is.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the input is invalid or the
    /// deadline lies in the past, and [`TaskServiceError::Repository`] when
    /// persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let CreateTaskRequest {
            user_id,
            fields,
            status,
        } = request;
        let task = Task::create(user_id, fields.into_content()?, status, &*self.clock)?;
        let created = self.tasks.save(task).await?;
        info!(
            user_id = %user_id,
            task_id = ?created.id(),
            status = created.status().as_str(),
            "task created"
        );
        Ok(created)
    }

    /// Replaces the editable fields of an existing task.
    ///
    /// Owner, task list and creation time are kept from the stored task. An
    /// omitted status keeps the stored one; an unprocessed status combined
    /// with a deadline is stored as processed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// belongs to another user, [`TaskServiceError::Domain`] when the input is
    /// invalid, and [`TaskServiceError::Repository`] when persistence fails.
    pub async fn update_task(&self, request: UpdateTaskRequest) -> TaskServiceResult<Task> {
        let UpdateTaskRequest {
            task_id,
            user_id,
            fields,
            status,
        } = request;
        let content = fields.into_content()?;
        let existing = self.get_task(task_id, user_id).await?;
        let updated = self.tasks.save(existing.revise(content, status)).await?;
        info!(
            user_id = %user_id,
            task_id = %task_id,
            status = updated.status().as_str(),
            "task updated"
        );
        Ok(updated)
    }

    /// Marks a task as completed. Completing a completed task is a no-op
    /// success.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// belongs to another user, and [`TaskServiceError::Repository`] when
    /// persistence fails.
    pub async fn complete_task(&self, task_id: TaskId, user_id: UserId) -> TaskServiceResult<()> {
        let task = self.get_task(task_id, user_id).await?;
        self.tasks.save(task.complete()).await?;
        info!(user_id = %user_id, task_id = %task_id, "task completed");
        Ok(())
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// belongs to another user, and [`TaskServiceError::Repository`] when
    /// persistence fails.
    pub async fn delete_task(&self, task_id: TaskId, user_id: UserId) -> TaskServiceResult<()> {
        self.get_task(task_id, user_id).await?;
        self.tasks.delete(task_id).await?;
        info!(user_id = %user_id, task_id = %task_id, "task deleted");
        Ok(())
    }

    async fn count(&self, query: TaskQuery) -> TaskServiceResult<u64> {
        let total = self.tasks.count(&query).await?;
        debug!(user_id = %query.owner, ?query, total, "counted tasks");
        Ok(total)
    }

    async fn list(
        &self,
        query: TaskQuery,
        page: Option<PageRequest>,
    ) -> TaskServiceResult<Vec<Task>> {
        let bounds = PageBounds::resolve(page);
        let found = self.tasks.find(&query, bounds).await?;
        debug!(
            user_id = %query.owner,
            ?query,
            offset = bounds.offset,
            returned = found.len(),
            "listed tasks"
        );
        Ok(found)
    }
}

const fn processed_by_deadline(
    user_id: UserId,
    deadline_from: Option<DateTime<Utc>>,
    deadline_to: Option<DateTime<Utc>>,
) -> TaskQuery {
    TaskQuery::with_status(user_id, TaskStatus::Processed)
        .with_deadline(DeadlineFilter::from_bounds(deadline_from, deadline_to))
}
