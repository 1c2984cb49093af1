//! Port contracts for the task lifecycle.
//!
//! Ports define infrastructure-agnostic, owner-scoped persistence interfaces
//! used by the task service.

pub mod comment;
pub mod repository;
pub mod tag;

pub use comment::TaskCommentRepository;
pub use repository::{RepositoryError, RepositoryResult, TaskRepository};
pub use tag::{TagRepository, TaskTagRelationRepository};
