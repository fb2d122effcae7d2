//! # Error Translation
//!
//! Maps a [`DomainError`] onto the four user-facing categories with the
//! localized message shown to API clients. Infrastructure failures are not
//! recognised here and are handed back untouched.

use serde::Serialize;

use crate::errors::{CommentError, DomainError, ReplyError, ThreadError, UserError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or duplicate input.
    Invariant,
    /// A referenced resource does not exist.
    NotFound,
    /// The caller does not own the resource.
    Authorization,
    /// Missing or invalid credentials.
    Authentication,
}

impl ErrorKind {
    pub fn status_code(self) -> u16 {
        match self {
            Self::Invariant => 400,
            Self::Authentication => 401,
            Self::Authorization => 403,
            Self::NotFound => 404,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientError {
    pub kind: ErrorKind,
    pub message: &'static str,
}

impl ClientError {
    const fn new(kind: ErrorKind, message: &'static str) -> Self {
        Self { kind, message }
    }
}

#[derive(Debug)]
pub enum Translated {
    Client(ClientError),
    /// Not a domain failure; the presentation layer renders it as a server fault.
    Passthrough(DomainError),
}

impl Translated {
    pub fn client(&self) -> Option<&ClientError> {
        match self {
            Self::Client(c) => Some(c),
            Self::Passthrough(_) => None,
        }
    }
}

const NO_ACCESS: &str = "tidak memiliki akses";
const ACCESS_DENIED: &str = "Akses ditolak";
const CONTENT_MISSING: &str = "harus mengirimkan content";
const CONTENT_NOT_STRING: &str = "content harus string";
const CONTENT_EMPTY: &str = "content tidak boleh kosong";

pub fn translate(err: DomainError) -> Translated {
    use ErrorKind::*;

    let client = match &err {
        DomainError::User(UserError::NotFound { .. }) => {
            ClientError::new(NotFound, "user tidak ditemukan")
        }
        DomainError::Thread(e) => match e {
            ThreadError::NotContainNeededProperty { .. } => {
                ClientError::new(Invariant, "harus mengirimkan title dan body")
            }
            ThreadError::NotMeetDataTypeSpecification { .. } => {
                ClientError::new(Invariant, "title dan body harus string")
            }
            ThreadError::InvalidString { .. } => {
                ClientError::new(Invariant, "title dan body tidak boleh kosong")
            }
            ThreadError::TitleLimitChar { .. } => ClientError::new(
                Invariant,
                "tidak dapat membuat thread baru karena karakter title melebihi batas limit",
            ),
            ThreadError::TitleAlreadyExists { .. } => {
                ClientError::new(Invariant, "title tidak tersedia")
            }
            ThreadError::NotFound { .. } => ClientError::new(NotFound, "thread tidak tersedia"),
        },
        DomainError::Comment(e) => match e {
            CommentError::NotContainNeededProperty { .. } => {
                ClientError::new(Invariant, CONTENT_MISSING)
            }
            CommentError::NotMeetDataTypeSpecification { .. } => {
                ClientError::new(Invariant, CONTENT_NOT_STRING)
            }
            CommentError::InvalidString { .. } => ClientError::new(Invariant, CONTENT_EMPTY),
            CommentError::NotFound { .. } => ClientError::new(NotFound, "comment tidak tersedia"),
            CommentError::NotOwner { .. } => ClientError::new(Authorization, ACCESS_DENIED),
        },
        DomainError::Reply(e) => match e {
            ReplyError::NotContainNeededProperty { .. } => {
                ClientError::new(Invariant, CONTENT_MISSING)
            }
            ReplyError::NotMeetDataTypeSpecification { .. } => {
                ClientError::new(Invariant, CONTENT_NOT_STRING)
            }
            ReplyError::InvalidString { .. } => ClientError::new(Invariant, CONTENT_EMPTY),
            ReplyError::NotFound { .. } => ClientError::new(NotFound, "reply tidak ditemukan"),
            ReplyError::NotOwner { .. } => ClientError::new(Authorization, ACCESS_DENIED),
        },
        DomainError::Unauthenticated => ClientError::new(Authentication, NO_ACCESS),
        DomainError::Storage(_) => return Translated::Passthrough(err),
    };

    Translated::Client(client)
}
