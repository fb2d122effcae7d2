//! # Domain Errors
//!
//! One closed enum per scope, aggregated by [`DomainError`]. Each variant still
//! knows the legacy `SCOPE.REASON` code it replaces (see [`DomainError::code`]),
//! which keeps log lines greppable across the old and new backends.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("user {id} not found")]
    NotFound { id: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThreadError {
    #[error("thread payload is missing `{field}`")]
    NotContainNeededProperty { field: &'static str },

    #[error("thread field `{field}` has the wrong type")]
    NotMeetDataTypeSpecification { field: &'static str },

    #[error("thread field `{field}` is empty")]
    InvalidString { field: &'static str },

    #[error("thread title is {length} characters, limit is {limit}")]
    TitleLimitChar { length: usize, limit: usize },

    #[error("thread title {title:?} is already taken")]
    TitleAlreadyExists { title: String },

    #[error("thread {id} not found")]
    NotFound { id: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommentError {
    #[error("comment payload is missing `{field}`")]
    NotContainNeededProperty { field: &'static str },

    #[error("comment field `{field}` has the wrong type")]
    NotMeetDataTypeSpecification { field: &'static str },

    #[error("comment field `{field}` is empty")]
    InvalidString { field: &'static str },

    #[error("comment {id} not found")]
    NotFound { id: String },

    #[error("user {owner} does not own comment {id}")]
    NotOwner { id: String, owner: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplyError {
    #[error("reply payload is missing `{field}`")]
    NotContainNeededProperty { field: &'static str },

    #[error("reply field `{field}` has the wrong type")]
    NotMeetDataTypeSpecification { field: &'static str },

    #[error("reply field `{field}` is empty")]
    InvalidString { field: &'static str },

    #[error("reply {id} not found")]
    NotFound { id: String },

    #[error("user {owner} does not own reply {id}")]
    NotOwner { id: String, owner: String },
}

/// The error type returned by every port and use case.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Thread(#[from] ThreadError),

    #[error(transparent)]
    Comment(#[from] CommentError),

    #[error(transparent)]
    Reply(#[from] ReplyError),

    /// Missing or invalid credentials. Raised by the boundary layer, never by a use case.
    #[error("missing authentication")]
    Unauthenticated,

    /// Infrastructure failure (e.g. database unreachable, bad row).
    #[error("storage failure: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DomainError {
    pub fn storage<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Storage(err.into())
    }

    /// The legacy sentinel code for this failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::User(UserError::NotFound { .. }) => "USER.NOT_FOUND",
            Self::Thread(e) => match e {
                ThreadError::NotContainNeededProperty { .. } => "THREAD.NOT_CONTAIN_NEEDED_PROPERTY",
                ThreadError::NotMeetDataTypeSpecification { .. } => {
                    "THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION"
                }
                ThreadError::InvalidString { .. } => "THREAD.INVALID_STRING",
                ThreadError::TitleLimitChar { .. } => "THREAD.TITLE_LIMIT_CHAR",
                ThreadError::TitleAlreadyExists { .. } => "THREAD_REPOSITORY.TITLE_ALREADY_EXISTS",
                ThreadError::NotFound { .. } => "THREAD.THREAD_NOT_FOUND",
            },
            Self::Comment(e) => match e {
                CommentError::NotContainNeededProperty { .. } => {
                    "COMMENT.NOT_CONTAIN_NEEDED_PROPERTY"
                }
                CommentError::NotMeetDataTypeSpecification { .. } => {
                    "COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION"
                }
                CommentError::InvalidString { .. } => "COMMENT.INVALID_STRING",
                CommentError::NotFound { .. } => "COMMENT.COMMENT_NOT_FOUND",
                CommentError::NotOwner { .. } => "COMMENT.AUTHORIZATION_NOT_FOUND",
            },
            Self::Reply(e) => match e {
                ReplyError::NotContainNeededProperty { .. } => "REPLY.NOT_CONTAIN_NEEDED_PROPERTY",
                ReplyError::NotMeetDataTypeSpecification { .. } => {
                    "REPLY.NOT_MEET_DATA_TYPE_SPECIFICATION"
                }
                ReplyError::InvalidString { .. } => "REPLY.INVALID_STRING",
                ReplyError::NotFound { .. } => "REPLY.REPLY_NOT_FOUND",
                ReplyError::NotOwner { .. } => "REPLY.AUTHORIZATION_NOT_FOUND",
            },
            Self::Unauthenticated => "AUTHENTICATION.MISSING",
            Self::Storage(_) => "STORAGE.FAILURE",
        }
    }
}

/// A specialized Result type for forum logic.
pub type Result<T> = std::result::Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_conversions_keep_the_scope() {
        let err: DomainError = ThreadError::TitleLimitChar { length: 51, limit: 50 }.into();
        assert_eq!(err.code(), "THREAD.TITLE_LIMIT_CHAR");

        let err: DomainError = ReplyError::NotOwner {
            id: "reply-1".into(),
            owner: "user-2".into(),
        }
        .into();
        assert_eq!(err.code(), "REPLY.AUTHORIZATION_NOT_FOUND");
        assert_eq!(err.to_string(), "user user-2 does not own reply reply-1");
    }

    #[test]
    fn storage_errors_keep_their_source() {
        let err = DomainError::storage("connection reset");
        assert_eq!(err.code(), "STORAGE.FAILURE");
        assert!(std::error::Error::source(&err).is_some());
    }
}
