use async_trait::async_trait;
use domains::errors::{Result, UserError};
use domains::models::User;
use domains::ports::UserRepository;
use sqlx::postgres::PgPool;
use sqlx::Row;

use super::storage;

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn get_user_by_id(&self, id: &str) -> Result<User> {
        let row = sqlx::query("SELECT id, username FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage)?
            .ok_or_else(|| UserError::NotFound { id: id.to_owned() })?;

        Ok(User {
            id: row.try_get("id").map_err(storage)?,
            username: row.try_get("username").map_err(storage)?,
        })
    }
}
