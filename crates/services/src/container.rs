//! Wires every use case from one set of repository handles.

use std::sync::Arc;

use domains::ports::{CommentRepository, ReplyRepository, ThreadRepository, UserRepository};

use crate::{
    AddCommentUseCase, AddReplyUseCase, AddThreadUseCase, DeleteCommentUseCase,
    DeleteReplyUseCase, GetDetailThreadUseCase, GetThreadCommentUseCase,
};

#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub threads: Arc<dyn ThreadRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub replies: Arc<dyn ReplyRepository>,
}

impl Repositories {
    /// All four ports served by one store.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: UserRepository + ThreadRepository + CommentRepository + ReplyRepository + 'static,
    {
        Self {
            users: store.clone(),
            threads: store.clone(),
            comments: store.clone(),
            replies: store,
        }
    }
}

pub struct ForumServices {
    pub add_thread: AddThreadUseCase,
    pub add_comment: AddCommentUseCase,
    pub add_reply: AddReplyUseCase,
    pub delete_comment: DeleteCommentUseCase,
    pub delete_reply: DeleteReplyUseCase,
    pub get_detail_thread: GetDetailThreadUseCase,
    pub get_thread_comment: GetThreadCommentUseCase,
}

impl ForumServices {
    pub fn new(repos: Repositories) -> Self {
        let Repositories {
            users,
            threads,
            comments,
            replies,
        } = repos;

        Self {
            add_thread: AddThreadUseCase::new(users.clone(), threads.clone()),
            add_comment: AddCommentUseCase::new(users.clone(), threads.clone(), comments.clone()),
            add_reply: AddReplyUseCase::new(
                users,
                threads.clone(),
                comments.clone(),
                replies.clone(),
            ),
            delete_comment: DeleteCommentUseCase::new(threads.clone(), comments.clone()),
            delete_reply: DeleteReplyUseCase::new(threads.clone(), comments, replies.clone()),
            get_detail_thread: GetDetailThreadUseCase::new(threads.clone(), replies),
            get_thread_comment: GetThreadCommentUseCase::new(threads),
        }
    }
}
