use std::sync::Arc;

use domains::entities::payload::{self, FieldKind};
use domains::entities::{NewComment, Payload};
use domains::errors::{CommentError, Result};
use domains::models::AddedComment;
use domains::ports::{CommentRepository, Ownership, ThreadRepository, UserRepository};
use serde_json::Value;

use crate::with_fields;

pub struct AddCommentUseCase {
    users: Arc<dyn UserRepository>,
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        users: Arc<dyn UserRepository>,
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            users,
            threads,
            comments,
        }
    }

    /// The user and thread lookups run together; a missing user is still
    /// reported ahead of a missing thread.
    #[tracing::instrument(skip(self, payload))]
    pub async fn execute(
        &self,
        payload: &Payload,
        owner: &str,
        thread_id: &str,
    ) -> Result<AddedComment> {
        let (user, thread) = tokio::join!(
            self.users.get_user_by_id(owner),
            self.threads.get_thread_by_id(thread_id),
        );
        user?;
        thread?;

        let comment = NewComment::new(&with_fields(
            payload,
            &[
                ("owner", Value::from(owner)),
                ("thread_id", Value::from(thread_id)),
                ("is_delete", Value::Bool(false)),
            ],
        ))?;

        let added = self.comments.add_comment(comment).await?;
        tracing::info!(comment_id = %added.id, "comment created");
        Ok(added)
    }
}

const DELETE_PARAMS: &[(&str, FieldKind)] = &[
    ("thread_id", FieldKind::Str),
    ("comment_id", FieldKind::Str),
    ("owner", FieldKind::Str),
];

/// Soft-deletes a comment on behalf of its owner.
pub struct DeleteCommentUseCase {
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(threads: Arc<dyn ThreadRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { threads, comments }
    }

    /// `params` carries the route ids and the authenticated owner:
    /// `thread_id`, `comment_id`, `owner`.
    #[tracing::instrument(skip_all)]
    pub async fn execute(&self, params: &Payload) -> Result<()> {
        payload::check_shape(params, DELETE_PARAMS).map_err(CommentError::from)?;
        let thread_id = payload::text(params, "thread_id");
        let comment_id = payload::text(params, "comment_id");
        let owner = payload::text(params, "owner");

        self.threads.get_thread_by_id(&thread_id).await?;
        self.comments
            .verify_comment_owner(Ownership::new(comment_id.as_str(), owner.as_str()))
            .await?;
        self.comments.soft_delete_comment(&comment_id).await?;

        tracing::info!(%thread_id, %comment_id, %owner, "comment soft-deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domains::errors::{DomainError, ThreadError, UserError};
    use domains::models::{ThreadHeader, User};
    use domains::ports::{MockCommentRepository, MockThreadRepository, MockUserRepository};
    use serde_json::json;

    fn payload(v: Value) -> Payload {
        v.as_object().cloned().unwrap_or_default()
    }

    fn users(found: bool) -> MockUserRepository {
        let mut users = MockUserRepository::new();
        users.expect_get_user_by_id().returning(move |id| {
            if found {
                Ok(User {
                    id: id.to_owned(),
                    username: "dicoding".into(),
                })
            } else {
                Err(UserError::NotFound { id: id.to_owned() }.into())
            }
        });
        users
    }

    fn threads(found: bool) -> MockThreadRepository {
        let mut threads = MockThreadRepository::new();
        threads.expect_get_thread_by_id().returning(move |id| {
            if found {
                Ok(ThreadHeader {
                    id: id.to_owned(),
                    title: "First Thread".into(),
                    body: "Lorem ipsum".into(),
                    date: Utc::now(),
                    username: "dicoding".into(),
                })
            } else {
                Err(ThreadError::NotFound { id: id.to_owned() }.into())
            }
        });
        threads
    }

    #[tokio::test]
    async fn add_comment_persists_a_live_comment() {
        let mut comments = MockCommentRepository::new();
        comments
            .expect_add_comment()
            .withf(|c| {
                c.content() == "sebuah comment"
                    && c.owner() == "user-123"
                    && c.thread_id() == "thread-123"
                    && !c.is_delete()
            })
            .times(1)
            .returning(|c| {
                Ok(AddedComment {
                    id: "comment-123".into(),
                    content: c.content().to_owned(),
                    owner: c.owner().to_owned(),
                })
            });

        let use_case = AddCommentUseCase::new(
            Arc::new(users(true)),
            Arc::new(threads(true)),
            Arc::new(comments),
        );
        let added = use_case
            .execute(&payload(json!({ "content": "sebuah comment" })), "user-123", "thread-123")
            .await
            .unwrap();

        assert_eq!(added.id, "comment-123");
        assert_eq!(added.content, "sebuah comment");
        assert_eq!(added.owner, "user-123");
    }

    #[tokio::test]
    async fn add_comment_reports_missing_user_before_missing_thread() {
        let mut comments = MockCommentRepository::new();
        comments.expect_add_comment().never();

        let use_case = AddCommentUseCase::new(
            Arc::new(users(false)),
            Arc::new(threads(false)),
            Arc::new(comments),
        );
        let err = use_case
            .execute(&payload(json!({ "content": "x" })), "user-404", "thread-404")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::User(_)));
    }

    #[tokio::test]
    async fn add_comment_on_unknown_thread_is_not_found() {
        let mut comments = MockCommentRepository::new();
        comments.expect_add_comment().never();

        let use_case = AddCommentUseCase::new(
            Arc::new(users(true)),
            Arc::new(threads(false)),
            Arc::new(comments),
        );
        let err = use_case
            .execute(&payload(json!({ "content": "x" })), "user-123", "thread-404")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Thread(ThreadError::NotFound { .. })));
    }

    #[tokio::test]
    async fn add_comment_validates_content() {
        let mut comments = MockCommentRepository::new();
        comments.expect_add_comment().never();

        let use_case = AddCommentUseCase::new(
            Arc::new(users(true)),
            Arc::new(threads(true)),
            Arc::new(comments),
        );
        let err = use_case
            .execute(&Payload::new(), "user-123", "thread-123")
            .await
            .unwrap_err();
        assert_eq!(err.code(), "COMMENT.NOT_CONTAIN_NEEDED_PROPERTY");

        let err = use_case
            .execute(&payload(json!({ "content": "   " })), "user-123", "thread-123")
            .await
            .unwrap_err();
        assert_eq!(err.code(), "COMMENT.INVALID_STRING");
    }

    #[tokio::test]
    async fn delete_comment_checks_params_before_touching_storage() {
        let mut thread_repo = MockThreadRepository::new();
        thread_repo.expect_get_thread_by_id().never();
        let use_case = DeleteCommentUseCase::new(
            Arc::new(thread_repo),
            Arc::new(MockCommentRepository::new()),
        );

        let err = use_case
            .execute(&payload(json!({ "comment_id": "comment-123", "owner": "user-123" })))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "COMMENT.NOT_CONTAIN_NEEDED_PROPERTY");

        let err = use_case
            .execute(&payload(json!({ "thread_id": [], "comment_id": 123, "owner": {} })))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION");
    }

    #[tokio::test]
    async fn delete_comment_by_non_owner_is_rejected() {
        let mut comments = MockCommentRepository::new();
        comments.expect_verify_comment_owner().returning(|check| {
            Err(CommentError::NotOwner {
                id: check.id,
                owner: check.owner,
            }
            .into())
        });
        comments.expect_soft_delete_comment().never();

        let use_case = DeleteCommentUseCase::new(Arc::new(threads(true)), Arc::new(comments));
        let err = use_case
            .execute(&payload(json!({
                "thread_id": "thread-123",
                "comment_id": "comment-123",
                "owner": "user-999",
            })))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Comment(CommentError::NotOwner { .. })));
    }

    #[tokio::test]
    async fn delete_comment_orchestrates_soft_delete() {
        let mut comments = MockCommentRepository::new();
        comments
            .expect_verify_comment_owner()
            .withf(|check| *check == Ownership::new("comment-123", "user-123"))
            .times(1)
            .returning(|_| Ok(()));
        comments
            .expect_soft_delete_comment()
            .withf(|id| id == "comment-123")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteCommentUseCase::new(Arc::new(threads(true)), Arc::new(comments));
        use_case
            .execute(&payload(json!({
                "thread_id": "thread-123",
                "comment_id": "comment-123",
                "owner": "user-123",
            })))
            .await
            .unwrap();
    }
}
