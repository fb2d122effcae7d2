use std::sync::Arc;

use domains::entities::payload::{self, FieldKind};
use domains::entities::{NewReply, Payload};
use domains::errors::{ReplyError, Result};
use domains::models::AddedReply;
use domains::ports::{
    CommentRepository, Ownership, ReplyRepository, ThreadRepository, UserRepository,
};
use serde_json::Value;

use crate::with_fields;

pub struct AddReplyUseCase {
    users: Arc<dyn UserRepository>,
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
    replies: Arc<dyn ReplyRepository>,
}

impl AddReplyUseCase {
    pub fn new(
        users: Arc<dyn UserRepository>,
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
        replies: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            users,
            threads,
            comments,
            replies,
        }
    }

    /// The three lookups are independent and run together. Errors are still
    /// surfaced user first, then thread, then comment.
    #[tracing::instrument(skip(self, payload))]
    pub async fn execute(
        &self,
        payload: &Payload,
        owner: &str,
        thread_id: &str,
        comment_id: &str,
    ) -> Result<AddedReply> {
        let (user, thread, comment) = tokio::join!(
            self.users.get_user_by_id(owner),
            self.threads.get_thread_by_id(thread_id),
            self.comments.get_comment_by_id(comment_id),
        );
        user?;
        thread?;
        comment?;

        let reply = NewReply::new(&with_fields(
            payload,
            &[
                ("owner", Value::from(owner)),
                ("thread_id", Value::from(thread_id)),
                ("comment_id", Value::from(comment_id)),
            ],
        ))?;

        let added = self.replies.add_reply(reply).await?;
        tracing::info!(reply_id = %added.id, "reply created");
        Ok(added)
    }
}

const DELETE_PARAMS: &[(&str, FieldKind)] = &[
    ("thread_id", FieldKind::Str),
    ("comment_id", FieldKind::Str),
    ("reply_id", FieldKind::Str),
    ("owner", FieldKind::Str),
];

/// Soft-deletes a reply on behalf of its owner.
pub struct DeleteReplyUseCase {
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
    replies: Arc<dyn ReplyRepository>,
}

impl DeleteReplyUseCase {
    pub fn new(
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
        replies: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            threads,
            comments,
            replies,
        }
    }

    /// `params`: `thread_id`, `comment_id`, `reply_id`, `owner`.
    #[tracing::instrument(skip_all)]
    pub async fn execute(&self, params: &Payload) -> Result<()> {
        payload::check_shape(params, DELETE_PARAMS).map_err(ReplyError::from)?;
        let thread_id = payload::text(params, "thread_id");
        let comment_id = payload::text(params, "comment_id");
        let reply_id = payload::text(params, "reply_id");
        let owner = payload::text(params, "owner");

        self.threads.get_thread_by_id(&thread_id).await?;
        self.comments.get_comment_by_id(&comment_id).await?;
        self.replies
            .verify_reply_owner(Ownership::new(reply_id.as_str(), owner.as_str()))
            .await?;
        self.replies.delete_reply_by_id(&reply_id).await?;

        tracing::info!(%thread_id, %comment_id, %reply_id, %owner, "reply soft-deleted");
        Ok(())
    }
}
