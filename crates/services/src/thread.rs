use std::sync::Arc;

use domains::entities::{NewThread, Payload};
use domains::errors::Result;
use domains::models::{AddedThread, ThreadDetail, ThreadWithComments};
use domains::ports::{ReplyRepository, ThreadRepository, UserRepository};
use serde_json::Value;

use crate::assembly::{comment_view, thread_detail};
use crate::with_fields;

/// Creates a thread owned by an authenticated user.
pub struct AddThreadUseCase {
    users: Arc<dyn UserRepository>,
    threads: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(users: Arc<dyn UserRepository>, threads: Arc<dyn ThreadRepository>) -> Self {
        Self { users, threads }
    }

    /// User existence is checked first so an unknown owner fails before any
    /// validation or uniqueness work.
    #[tracing::instrument(skip(self, payload))]
    pub async fn execute(&self, payload: &Payload, owner: &str) -> Result<AddedThread> {
        self.users.get_user_by_id(owner).await?;

        let thread = NewThread::new(&with_fields(payload, &[("owner", Value::from(owner))]))?;
        self.threads.verify_available_title(thread.title()).await?;

        let added = self.threads.add_thread(thread).await?;
        tracing::info!(thread_id = %added.id, "thread created");
        Ok(added)
    }
}

/// Thread with every comment and every reply, deleted content masked.
pub struct GetDetailThreadUseCase {
    threads: Arc<dyn ThreadRepository>,
    replies: Arc<dyn ReplyRepository>,
}

impl GetDetailThreadUseCase {
    pub fn new(threads: Arc<dyn ThreadRepository>, replies: Arc<dyn ReplyRepository>) -> Self {
        Self { threads, replies }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, thread_id: &str) -> Result<ThreadDetail> {
        let ThreadWithComments { thread, comments } =
            self.threads.get_detail_thread_by_id(thread_id).await?;

        let mut views = Vec::with_capacity(comments.len());
        for comment in &comments {
            let replies = self.replies.get_replies_from_comment(&comment.id).await?;
            views.push(comment_view(comment, Some(&replies)));
        }

        tracing::debug!(comments = views.len(), "thread detail assembled");
        Ok(thread_detail(thread, views))
    }
}

/// Thread with its comments only.
pub struct GetThreadCommentUseCase {
    threads: Arc<dyn ThreadRepository>,
}

impl GetThreadCommentUseCase {
    pub fn new(threads: Arc<dyn ThreadRepository>) -> Self {
        Self { threads }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, thread_id: &str) -> Result<ThreadDetail> {
        let ThreadWithComments { thread, comments } =
            self.threads.get_detail_thread_by_id(thread_id).await?;
        let views = comments.iter().map(|c| comment_view(c, None)).collect();
        Ok(thread_detail(thread, views))
    }
}
