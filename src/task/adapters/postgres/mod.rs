//! `PostgreSQL` adapters for task lifecycle persistence.
//!
//! Diesel is synchronous, so every repository call runs on the blocking
//! thread pool through [`run_blocking`].

mod comment;
mod models;
mod repository;
mod schema;
mod tag;

pub use comment::PostgresTaskCommentRepository;
pub use repository::PostgresTaskRepository;
pub use tag::{PostgresTagRepository, PostgresTaskTagRelationRepository};

use crate::task::ports::{RepositoryError, RepositoryResult};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

async fn run_blocking<F, T>(pool: TaskPgPool, f: F) -> RepositoryResult<T>
where
    F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(RepositoryError::persistence)?;
        f(&mut connection)
    })
    .await
    .map_err(RepositoryError::persistence)?
}

fn to_i64(value: u64) -> RepositoryResult<i64> {
    i64::try_from(value).map_err(RepositoryError::persistence)
}
