//! # Repository Ports
//!
//! Capability interfaces the use cases depend on. Storage adapters implement
//! every method; there are no default bodies to fall back on.

use async_trait::async_trait;

use crate::entities::{NewComment, NewReply, NewThread};
use crate::errors::Result;
use crate::models::{
    AddedComment, AddedReply, AddedThread, StoredComment, StoredReply, ThreadHeader,
    ThreadWithComments, User,
};

/// `{id, owner}` pair checked by the ownership verifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ownership {
    pub id: String,
    pub owner: String,
}

impl Ownership {
    pub fn new(id: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
        }
    }
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `UserError::NotFound` when no such user exists.
    async fn get_user_by_id(&self, id: &str) -> Result<User>;
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Fails with `ThreadError::TitleAlreadyExists` when the title is in use.
    async fn verify_available_title(&self, title: &str) -> Result<()>;

    /// Assigns id and creation date. A duplicate title detected by the store
    /// itself must also surface as `ThreadError::TitleAlreadyExists`.
    async fn add_thread(&self, thread: NewThread) -> Result<AddedThread>;

    async fn get_thread_by_id(&self, id: &str) -> Result<ThreadHeader>;

    /// Thread header plus every comment, oldest first, unmasked.
    async fn get_detail_thread_by_id(&self, id: &str) -> Result<ThreadWithComments>;
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(&self, comment: NewComment) -> Result<AddedComment>;

    async fn get_comment_by_id(&self, id: &str) -> Result<StoredComment>;

    /// `CommentError::NotFound` for an unknown id, `CommentError::NotOwner` otherwise.
    async fn verify_comment_owner(&self, check: Ownership) -> Result<()>;

    /// Sets `is_delete`; content is left untouched.
    async fn soft_delete_comment(&self, id: &str) -> Result<()>;
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn add_reply(&self, reply: NewReply) -> Result<AddedReply>;

    async fn verify_reply_owner(&self, check: Ownership) -> Result<()>;

    /// Soft delete, same semantics as `CommentRepository::soft_delete_comment`.
    async fn delete_reply_by_id(&self, id: &str) -> Result<()>;

    /// Replies of one comment, oldest first, unmasked.
    async fn get_replies_from_comment(&self, comment_id: &str) -> Result<Vec<StoredReply>>;
}
