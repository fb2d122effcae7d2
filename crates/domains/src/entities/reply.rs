use crate::entities::payload::{self, FieldError, FieldKind, Payload};
use crate::errors::ReplyError;

const FIELDS: &[(&str, FieldKind)] = &[
    ("content", FieldKind::Str),
    ("owner", FieldKind::Str),
    ("thread_id", FieldKind::Str),
    ("comment_id", FieldKind::Str),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReply {
    content: String,
    owner: String,
    thread_id: String,
    comment_id: String,
}

impl NewReply {
    pub fn new(payload: &Payload) -> Result<Self, ReplyError> {
        payload::check_shape(payload, FIELDS)?;
        payload::reject_blank(payload, &["content", "owner", "thread_id", "comment_id"])?;

        Ok(Self {
            content: payload::text(payload, "content"),
            owner: payload::text(payload, "owner"),
            thread_id: payload::text(payload, "thread_id"),
            comment_id: payload::text(payload, "comment_id"),
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn comment_id(&self) -> &str {
        &self.comment_id
    }
}

impl From<FieldError> for ReplyError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::Missing(field) => Self::NotContainNeededProperty { field },
            FieldError::WrongType(field) => Self::NotMeetDataTypeSpecification { field },
            FieldError::Blank(field) => Self::InvalidString { field },
        }
    }
}
