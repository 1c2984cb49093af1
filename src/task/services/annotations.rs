//! Tag and comment orchestration on top of the task lifecycle.
//!
//! Every operation first resolves the task through the owner-scoped lookup
//! in [`TaskService::get_task`], so foreign tasks surface as not found before
//! any relation or comment storage is touched.

use super::{AddCommentRequest, TaskService, TaskServiceError, TaskServiceResult};
use crate::task::{
    domain::{
        CommentText, PageBounds, PageRequest, Tag, TagId, TaskComment, TaskId, TaskTagRelation,
        UserId,
    },
    ports::{
        RepositoryError, TagRepository, TaskCommentRepository, TaskRepository,
        TaskTagRelationRepository,
    },
};
use mockable::Clock;
use tracing::{debug, info};

impl<T, G, R, M, K> TaskService<T, G, R, M, K>
where
    T: TaskRepository,
    G: TagRepository,
    R: TaskTagRelationRepository,
    M: TaskCommentRepository,
    K: Clock + Send + Sync,
{
    /// Returns the tags applied to one of the user's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// belongs to another user, and [`TaskServiceError::Repository`] when a
    /// lookup fails.
    pub async fn get_tags(&self, task_id: TaskId, user_id: UserId) -> TaskServiceResult<Vec<Tag>> {
        self.get_task(task_id, user_id).await?;
        let relations = self.relations.find_by_task_id(task_id).await?;
        if relations.is_empty() {
            return Ok(Vec::new());
        }
        let tag_ids: Vec<TagId> = relations.iter().map(|relation| relation.tag_id).collect();
        let found = self.tags.find_by_ids(&tag_ids).await?;
        debug!(user_id = %user_id, task_id = %task_id, tags = found.len(), "loaded task tags");
        Ok(found)
    }

    /// Applies one of the user's tags to one of the user's tasks.
    ///
    /// Applying a tag that is already applied succeeds without creating a
    /// second relation. The check and the insert are not atomic; when a
    /// concurrent call wins the race, the duplicate reported by storage is
    /// treated as success.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task or the tag does
    /// not exist or belongs to another user, and
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn assign_tag(
        &self,
        task_id: TaskId,
        tag_id: TagId,
        user_id: UserId,
    ) -> TaskServiceResult<()> {
        self.get_task(task_id, user_id).await?;
        self.tags
            .find_by_id_and_user(tag_id, user_id)
            .await?
            .ok_or_else(|| TaskServiceError::tag_not_found(tag_id))?;

        if self
            .relations
            .find_by_task_and_tag(task_id, tag_id)
            .await?
            .is_some()
        {
            debug!(task_id = %task_id, tag_id = %tag_id, "tag already assigned");
            return Ok(());
        }

        match self
            .relations
            .create(TaskTagRelation::new(task_id, tag_id))
            .await
        {
            Ok(()) => {
                info!(user_id = %user_id, task_id = %task_id, tag_id = %tag_id, "tag assigned");
                Ok(())
            }
            Err(RepositoryError::DuplicateRelation(_)) => {
                debug!(
                    task_id = %task_id,
                    tag_id = %tag_id,
                    "tag assigned concurrently, keeping existing relation"
                );
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Removes a tag from one of the user's tasks. Removing a tag that is not
    /// applied succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// belongs to another user, and [`TaskServiceError::Repository`] when
    /// persistence fails.
    pub async fn remove_tag(
        &self,
        task_id: TaskId,
        tag_id: TagId,
        user_id: UserId,
    ) -> TaskServiceResult<()> {
        self.get_task(task_id, user_id).await?;
        self.relations
            .delete_by_task_and_tag(task_id, tag_id)
            .await?;
        info!(user_id = %user_id, task_id = %task_id, tag_id = %tag_id, "tag removed");
        Ok(())
    }

    /// Returns comments on one of the user's tasks, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// belongs to another user, and [`TaskServiceError::Repository`] when a
    /// lookup fails.
    pub async fn get_comments(
        &self,
        task_id: TaskId,
        user_id: UserId,
        page: Option<PageRequest>,
    ) -> TaskServiceResult<Vec<TaskComment>> {
        self.get_task(task_id, user_id).await?;
        let found = self
            .comments
            .find_by_task_id(task_id, PageBounds::resolve(page))
            .await?;
        debug!(user_id = %user_id, task_id = %task_id, comments = found.len(), "loaded comments");
        Ok(found)
    }

    /// Adds a comment to one of the user's tasks.
    ///
    /// The comment is stamped with the current time and has no edit
    /// timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the text is blank or too
    /// long, [`TaskServiceError::NotFound`] when the task does not exist or
    /// belongs to another user, and [`TaskServiceError::Repository`] when
    /// persistence fails.
    pub async fn add_comment(&self, request: AddCommentRequest) -> TaskServiceResult<TaskComment> {
        let AddCommentRequest {
            task_id,
            user_id,
            comment_text,
        } = request;
        let text = CommentText::new(comment_text)?;
        self.get_task(task_id, user_id).await?;
        let comment = TaskComment::new(task_id, user_id, text, &*self.clock);
        let saved = self.comments.save(comment).await?;
        info!(
            user_id = %user_id,
            task_id = %task_id,
            comment_id = ?saved.id(),
            "comment added"
        );
        Ok(saved)
    }
}
