use async_trait::async_trait;
use domains::entities::NewComment;
use domains::errors::{CommentError, Result};
use domains::ids::{self, IdKind};
use domains::models::{AddedComment, StoredComment};
use domains::ports::{CommentRepository, Ownership};
use sqlx::postgres::PgPool;
use sqlx::Row;

use super::storage;

pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn add_comment(&self, comment: NewComment) -> Result<AddedComment> {
        let id = ids::generate(IdKind::Comment);
        let row = sqlx::query(
            "INSERT INTO comments (id, owner, thread_id, content, is_delete) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id, content, owner",
        )
        .bind(&id)
        .bind(comment.owner())
        .bind(comment.thread_id())
        .bind(comment.content())
        .bind(comment.is_delete())
        .fetch_one(&self.pool)
        .await
        .map_err(storage)?;

        tracing::debug!(%id, thread_id = comment.thread_id(), "comment inserted");
        Ok(AddedComment {
            id: row.try_get("id").map_err(storage)?,
            content: row.try_get("content").map_err(storage)?,
            owner: row.try_get("owner").map_err(storage)?,
        })
    }

    async fn get_comment_by_id(&self, id: &str) -> Result<StoredComment> {
        let row = sqlx::query(
            "SELECT c.id, u.username, c.date, c.content, c.is_delete \
             FROM comments c JOIN users u ON c.owner = u.id \
             WHERE c.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?
        .ok_or_else(|| CommentError::NotFound { id: id.to_owned() })?;

        Ok(StoredComment {
            id: row.try_get("id").map_err(storage)?,
            username: row.try_get("username").map_err(storage)?,
            date: row.try_get("date").map_err(storage)?,
            content: row.try_get("content").map_err(storage)?,
            is_delete: row.try_get("is_delete").map_err(storage)?,
        })
    }

    async fn verify_comment_owner(&self, check: Ownership) -> Result<()> {
        let row = sqlx::query("SELECT owner FROM comments WHERE id = $1")
            .bind(&check.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage)?
            .ok_or_else(|| CommentError::NotFound {
                id: check.id.clone(),
            })?;

        let owner: String = row.try_get("owner").map_err(storage)?;
        if owner != check.owner {
            return Err(CommentError::NotOwner {
                id: check.id,
                owner: check.owner,
            }
            .into());
        }
        Ok(())
    }

    async fn soft_delete_comment(&self, id: &str) -> Result<()> {
        let result = sqlx::query("UPDATE comments SET is_delete = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage)?;

        if result.rows_affected() == 0 {
            return Err(CommentError::NotFound { id: id.to_owned() }.into());
        }
        Ok(())
    }
}
