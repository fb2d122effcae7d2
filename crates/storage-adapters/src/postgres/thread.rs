use async_trait::async_trait;
use domains::entities::NewThread;
use domains::errors::{Result, ThreadError};
use domains::ids::{self, IdKind};
use domains::models::{AddedThread, StoredComment, ThreadHeader, ThreadWithComments};
use domains::ports::ThreadRepository;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;

use super::storage;

pub struct PgThreadRepository {
    pool: PgPool,
}

impl PgThreadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn comment_from_row(row: &PgRow) -> std::result::Result<StoredComment, sqlx::Error> {
    Ok(StoredComment {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        date: row.try_get("date")?,
        content: row.try_get("content")?,
        is_delete: row.try_get("is_delete")?,
    })
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    async fn verify_available_title(&self, title: &str) -> Result<()> {
        let taken = sqlx::query("SELECT 1 FROM threads WHERE title = $1")
            .bind(title)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage)?;

        match taken {
            Some(_) => Err(ThreadError::TitleAlreadyExists {
                title: title.to_owned(),
            }
            .into()),
            None => Ok(()),
        }
    }

    /// A concurrent insert of the same title loses on `threads_title_key`.
    async fn add_thread(&self, thread: NewThread) -> Result<AddedThread> {
        let id = ids::generate(IdKind::Thread);
        let inserted = sqlx::query(
            "INSERT INTO threads (id, title, body, owner) VALUES ($1, $2, $3, $4) \
             RETURNING id, title, owner",
        )
        .bind(&id)
        .bind(thread.title())
        .bind(thread.body())
        .bind(thread.owner())
        .fetch_one(&self.pool)
        .await;

        let row = match inserted {
            Ok(row) => row,
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                tracing::warn!(title = thread.title(), "title taken by a concurrent insert");
                return Err(ThreadError::TitleAlreadyExists {
                    title: thread.title().to_owned(),
                }
                .into());
            }
            Err(err) => return Err(storage(err)),
        };

        Ok(AddedThread {
            id: row.try_get("id").map_err(storage)?,
            title: row.try_get("title").map_err(storage)?,
            owner: row.try_get("owner").map_err(storage)?,
        })
    }

    async fn get_thread_by_id(&self, id: &str) -> Result<ThreadHeader> {
        let row = sqlx::query(
            "SELECT t.id, t.title, t.body, t.date, u.username \
             FROM threads t JOIN users u ON t.owner = u.id \
             WHERE t.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?
        .ok_or_else(|| ThreadError::NotFound { id: id.to_owned() })?;

        Ok(ThreadHeader {
            id: row.try_get("id").map_err(storage)?,
            title: row.try_get("title").map_err(storage)?,
            body: row.try_get("body").map_err(storage)?,
            date: row.try_get("date").map_err(storage)?,
            username: row.try_get("username").map_err(storage)?,
        })
    }

    async fn get_detail_thread_by_id(&self, id: &str) -> Result<ThreadWithComments> {
        let thread = self.get_thread_by_id(id).await?;

        let rows = sqlx::query(
            "SELECT c.id, u.username, c.date, c.content, c.is_delete \
             FROM comments c JOIN users u ON c.owner = u.id \
             WHERE c.thread_id = $1 \
             ORDER BY c.date ASC, c.seq ASC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;

        let comments = rows
            .iter()
            .map(comment_from_row)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(storage)?;

        Ok(ThreadWithComments { thread, comments })
    }
}
