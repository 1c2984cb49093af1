//! Application services for the task lifecycle.

mod annotations;
mod error;
mod lifecycle;
mod requests;

pub use error::{TaskServiceError, TaskServiceResult};
pub use lifecycle::TaskService;
pub use requests::{AddCommentRequest, CreateTaskRequest, UpdateTaskRequest};
