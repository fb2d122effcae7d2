//! # In-memory store
//!
//! Serves all four repository ports from `dashmap` tables. The `titles` table
//! is the unique index on thread titles: claiming a slot there is the
//! authoritative duplicate check, the pre-check in `verify_available_title`
//! is only an early exit.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use domains::entities::{NewComment, NewReply, NewThread};
use domains::errors::{CommentError, ReplyError, Result, ThreadError, UserError};
use domains::ids::{self, IdKind};
use domains::models::{
    AddedComment, AddedReply, AddedThread, StoredComment, StoredReply, ThreadHeader,
    ThreadWithComments, User,
};
use domains::ports::{
    CommentRepository, Ownership, ReplyRepository, ThreadRepository, UserRepository,
};

#[derive(Debug, Clone)]
struct ThreadRow {
    id: String,
    title: String,
    body: String,
    owner: String,
    date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct CommentRow {
    id: String,
    owner: String,
    thread_id: String,
    content: String,
    date: DateTime<Utc>,
    is_delete: bool,
    seq: u64,
}

#[derive(Debug, Clone)]
struct ReplyRow {
    id: String,
    owner: String,
    comment_id: String,
    content: String,
    date: DateTime<Utc>,
    is_delete: bool,
    seq: u64,
}

#[derive(Debug, Default)]
pub struct InMemoryForumStore {
    users: DashMap<String, User>,
    threads: DashMap<String, ThreadRow>,
    /// title -> thread id
    titles: DashMap<String, String>,
    comments: DashMap<String, CommentRow>,
    replies: DashMap<String, ReplyRow>,
    /// Tie-breaker for rows created within the same clock tick.
    seq: AtomicU64,
}

impl InMemoryForumStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registration lives outside this backend; this seeds a known user.
    pub fn insert_user(&self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    /// Raw reply row, for inspecting soft-delete state.
    pub fn stored_reply(&self, id: &str) -> Option<StoredReply> {
        let row = self.replies.get(id)?;
        self.reply_with_username(&row)
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed)
    }

    fn username(&self, user_id: &str) -> Option<String> {
        self.users.get(user_id).map(|u| u.username.clone())
    }

    fn comment_with_username(&self, row: &CommentRow) -> Option<StoredComment> {
        Some(StoredComment {
            id: row.id.clone(),
            username: self.username(&row.owner)?,
            date: row.date,
            content: row.content.clone(),
            is_delete: row.is_delete,
        })
    }

    fn reply_with_username(&self, row: &ReplyRow) -> Option<StoredReply> {
        Some(StoredReply {
            id: row.id.clone(),
            username: self.username(&row.owner)?,
            date: row.date,
            content: row.content.clone(),
            is_delete: row.is_delete,
        })
    }
}

#[async_trait]
impl UserRepository for InMemoryForumStore {
    async fn get_user_by_id(&self, id: &str) -> Result<User> {
        self.users
            .get(id)
            .map(|u| u.value().clone())
            .ok_or_else(|| UserError::NotFound { id: id.to_owned() }.into())
    }
}

#[async_trait]
impl ThreadRepository for InMemoryForumStore {
    async fn verify_available_title(&self, title: &str) -> Result<()> {
        if self.titles.contains_key(title) {
            return Err(ThreadError::TitleAlreadyExists {
                title: title.to_owned(),
            }
            .into());
        }
        Ok(())
    }

    async fn add_thread(&self, thread: NewThread) -> Result<AddedThread> {
        let id = ids::generate(IdKind::Thread);

        match self.titles.entry(thread.title().to_owned()) {
            Entry::Occupied(_) => {
                tracing::warn!(title = thread.title(), "duplicate title rejected by index");
                return Err(ThreadError::TitleAlreadyExists {
                    title: thread.title().to_owned(),
                }
                .into());
            }
            Entry::Vacant(slot) => {
                slot.insert(id.clone());
            }
        }

        self.threads.insert(
            id.clone(),
            ThreadRow {
                id: id.clone(),
                title: thread.title().to_owned(),
                body: thread.body().to_owned(),
                owner: thread.owner().to_owned(),
                date: Utc::now(),
            },
        );
        tracing::debug!(%id, "thread stored");

        Ok(AddedThread {
            id,
            title: thread.title().to_owned(),
            owner: thread.owner().to_owned(),
        })
    }

    async fn get_thread_by_id(&self, id: &str) -> Result<ThreadHeader> {
        let not_found = || ThreadError::NotFound { id: id.to_owned() };
        let row = self.threads.get(id).ok_or_else(not_found)?;
        let username = self.username(&row.owner).ok_or_else(not_found)?;

        Ok(ThreadHeader {
            id: row.id.clone(),
            title: row.title.clone(),
            body: row.body.clone(),
            date: row.date,
            username,
        })
    }

    async fn get_detail_thread_by_id(&self, id: &str) -> Result<ThreadWithComments> {
        let thread = self.get_thread_by_id(id).await?;

        let mut rows: Vec<CommentRow> = self
            .comments
            .iter()
            .filter(|c| c.thread_id == id)
            .map(|c| c.value().clone())
            .collect();
        rows.sort_by_key(|c| (c.date, c.seq));

        let comments = rows
            .iter()
            .filter_map(|row| self.comment_with_username(row))
            .collect();

        Ok(ThreadWithComments { thread, comments })
    }
}

#[async_trait]
impl CommentRepository for InMemoryForumStore {
    async fn add_comment(&self, comment: NewComment) -> Result<AddedComment> {
        let id = ids::generate(IdKind::Comment);
        self.comments.insert(
            id.clone(),
            CommentRow {
                id: id.clone(),
                owner: comment.owner().to_owned(),
                thread_id: comment.thread_id().to_owned(),
                content: comment.content().to_owned(),
                date: Utc::now(),
                is_delete: comment.is_delete(),
                seq: self.next_seq(),
            },
        );
        tracing::debug!(%id, thread_id = comment.thread_id(), "comment stored");

        Ok(AddedComment {
            id,
            content: comment.content().to_owned(),
            owner: comment.owner().to_owned(),
        })
    }

    async fn get_comment_by_id(&self, id: &str) -> Result<StoredComment> {
        self.comments
            .get(id)
            .and_then(|row| self.comment_with_username(&row))
            .ok_or_else(|| CommentError::NotFound { id: id.to_owned() }.into())
    }

    async fn verify_comment_owner(&self, check: Ownership) -> Result<()> {
        let row = self
            .comments
            .get(&check.id)
            .ok_or_else(|| CommentError::NotFound {
                id: check.id.clone(),
            })?;
        if row.owner != check.owner {
            return Err(CommentError::NotOwner {
                id: check.id,
                owner: check.owner,
            }
            .into());
        }
        Ok(())
    }

    async fn soft_delete_comment(&self, id: &str) -> Result<()> {
        let mut row = self
            .comments
            .get_mut(id)
            .ok_or_else(|| CommentError::NotFound { id: id.to_owned() })?;
        row.is_delete = true;
        Ok(())
    }
}

#[async_trait]
impl ReplyRepository for InMemoryForumStore {
    async fn add_reply(&self, reply: NewReply) -> Result<AddedReply> {
        let id = ids::generate(IdKind::Reply);
        self.replies.insert(
            id.clone(),
            ReplyRow {
                id: id.clone(),
                owner: reply.owner().to_owned(),
                comment_id: reply.comment_id().to_owned(),
                content: reply.content().to_owned(),
                date: Utc::now(),
                is_delete: false,
                seq: self.next_seq(),
            },
        );
        tracing::debug!(%id, comment_id = reply.comment_id(), "reply stored");

        Ok(AddedReply {
            id,
            content: reply.content().to_owned(),
            owner: reply.owner().to_owned(),
        })
    }

    async fn verify_reply_owner(&self, check: Ownership) -> Result<()> {
        let row = self
            .replies
            .get(&check.id)
            .ok_or_else(|| ReplyError::NotFound {
                id: check.id.clone(),
            })?;
        if row.owner != check.owner {
            return Err(ReplyError::NotOwner {
                id: check.id,
                owner: check.owner,
            }
            .into());
        }
        Ok(())
    }

    async fn delete_reply_by_id(&self, id: &str) -> Result<()> {
        let mut row = self
            .replies
            .get_mut(id)
            .ok_or_else(|| ReplyError::NotFound { id: id.to_owned() })?;
        row.is_delete = true;
        Ok(())
    }

    async fn get_replies_from_comment(&self, comment_id: &str) -> Result<Vec<StoredReply>> {
        let mut rows: Vec<ReplyRow> = self
            .replies
            .iter()
            .filter(|r| r.comment_id == comment_id)
            .map(|r| r.value().clone())
            .collect();
        rows.sort_by_key(|r| (r.date, r.seq));

        Ok(rows
            .iter()
            .filter_map(|row| self.reply_with_username(row))
            .collect())
    }
}
