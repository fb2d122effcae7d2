//! # Domain Models
//!
//! Read and write shapes for users, threads, comments and replies.
//! Validated write-side entities live in [`crate::entities`]; the types here are
//! what repositories hand back and what use cases return to the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::masking::SoftDeletable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
}

/// Returned by `ThreadRepository::add_thread`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

/// Returned by `CommentRepository::add_comment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

/// Returned by `ReplyRepository::add_reply`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

/// Thread header joined with its owner's username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadHeader {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

/// A comment as stored, before masking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredComment {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_delete: bool,
}

/// A reply as stored, before masking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredReply {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_delete: bool,
}

impl SoftDeletable for StoredComment {
    const PLACEHOLDER: &'static str = "**komentar telah dihapus**";

    fn is_deleted(&self) -> bool {
        self.is_delete
    }

    fn content(&self) -> &str {
        &self.content
    }
}

impl SoftDeletable for StoredReply {
    const PLACEHOLDER: &'static str = "**balasan telah dihapus**";

    fn is_deleted(&self) -> bool {
        self.is_delete
    }

    fn content(&self) -> &str {
        &self.content
    }
}

/// `ThreadRepository::get_detail_thread_by_id` result: header plus raw comments, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadWithComments {
    pub thread: ThreadHeader,
    pub comments: Vec<StoredComment>,
}

// ── Read-side output ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyView {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentView {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    /// Absent from the comments-only view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replies: Option<Vec<ReplyView>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadDetail {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentView>,
}
