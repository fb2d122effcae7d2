//! # PostgreSQL repositories
//!
//! One repository per port, all sharing a `PgPool`. Queries are built at
//! runtime so the crate compiles without a live database.

mod comment;
mod reply;
mod thread;
mod user;


pub use comment::PgCommentRepository;
pub use reply::PgReplyRepository;
pub use thread::PgThreadRepository;
pub use user::PgUserRepository;

use domains::errors::DomainError;
use sqlx::postgres::{PgPool, PgPoolOptions};

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

pub async fn connect(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await?;
    tracing::info!(max_connections, "postgres pool ready");
    Ok(pool)
}

pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("schema migrations applied");
    Ok(())
}

pub(crate) fn storage(err: sqlx::Error) -> DomainError {
    tracing::error!(error = %err, "postgres query failed");
    DomainError::storage(err)
}
