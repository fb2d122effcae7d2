use async_trait::async_trait;
use domains::entities::NewReply;
use domains::errors::{ReplyError, Result};
use domains::ids::{self, IdKind};
use domains::models::{AddedReply, StoredReply};
use domains::ports::{Ownership, ReplyRepository};
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;

use super::storage;

pub struct PgReplyRepository {
    pool: PgPool,
}

impl PgReplyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn reply_from_row(row: &PgRow) -> std::result::Result<StoredReply, sqlx::Error> {
    Ok(StoredReply {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        date: row.try_get("date")?,
        content: row.try_get("content")?,
        is_delete: row.try_get("is_delete")?,
    })
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    async fn add_reply(&self, reply: NewReply) -> Result<AddedReply> {
        let id = ids::generate(IdKind::Reply);
        let row = sqlx::query(
            "INSERT INTO replies (id, content, owner, thread_id, comment_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id, content, owner",
        )
        .bind(&id)
        .bind(reply.content())
        .bind(reply.owner())
        .bind(reply.thread_id())
        .bind(reply.comment_id())
        .fetch_one(&self.pool)
        .await
        .map_err(storage)?;

        tracing::debug!(%id, comment_id = reply.comment_id(), "reply inserted");
        Ok(AddedReply {
            id: row.try_get("id").map_err(storage)?,
            content: row.try_get("content").map_err(storage)?,
            owner: row.try_get("owner").map_err(storage)?,
        })
    }

    async fn verify_reply_owner(&self, check: Ownership) -> Result<()> {
        let row = sqlx::query("SELECT owner FROM replies WHERE id = $1")
            .bind(&check.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage)?
            .ok_or_else(|| ReplyError::NotFound {
                id: check.id.clone(),
            })?;

        let owner: String = row.try_get("owner").map_err(storage)?;
        if owner != check.owner {
            return Err(ReplyError::NotOwner {
                id: check.id,
                owner: check.owner,
            }
            .into());
        }
        Ok(())
    }

    async fn delete_reply_by_id(&self, id: &str) -> Result<()> {
        let result = sqlx::query("UPDATE replies SET is_delete = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage)?;

        if result.rows_affected() == 0 {
            return Err(ReplyError::NotFound { id: id.to_owned() }.into());
        }
        Ok(())
    }

    async fn get_replies_from_comment(&self, comment_id: &str) -> Result<Vec<StoredReply>> {
        let rows = sqlx::query(
            "SELECT r.id, u.username, r.date, r.content, r.is_delete \
             FROM replies r JOIN users u ON r.owner = u.id \
             WHERE r.comment_id = $1 \
             ORDER BY r.date ASC, r.seq ASC",
        )
        .bind(comment_id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;

        rows.iter()
            .map(reply_from_row)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(storage)
    }
}
