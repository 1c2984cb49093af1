//! Diesel schema for task lifecycle persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Int8,
        /// Owner identifier.
        user_id -> Int8,
        /// Optional task list identifier.
        task_list_id -> Nullable<Int8>,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional description.
        description -> Nullable<Text>,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Optional deadline.
        deadline -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// User-scoped tags.
    tags (id) {
        /// Tag identifier.
        id -> Int8,
        /// Owner identifier.
        user_id -> Int8,
        /// Tag name.
        #[max_length = 50]
        name -> Varchar,
    }
}

diesel::table! {
    /// Task/tag join records.
    tasks_tags (task_id, tag_id) {
        /// Tagged task.
        task_id -> Int8,
        /// Applied tag.
        tag_id -> Int8,
    }
}

diesel::table! {
    /// Comments attached to tasks.
    task_comments (id) {
        /// Comment identifier.
        id -> Int8,
        /// Commented task.
        task_id -> Int8,
        /// Owner of the commented task.
        user_id -> Int8,
        /// Comment body.
        comment_text -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Latest edit timestamp.
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::joinable!(tasks_tags -> tasks (task_id));
diesel::joinable!(tasks_tags -> tags (tag_id));
diesel::joinable!(task_comments -> tasks (task_id));

diesel::allow_tables_to_appear_in_same_query!(tasks, tags, tasks_tags, task_comments);
