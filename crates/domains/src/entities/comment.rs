use crate::entities::payload::{self, FieldError, FieldKind, Payload};
use crate::errors::CommentError;

const FIELDS: &[(&str, FieldKind)] = &[
    ("content", FieldKind::Str),
    ("owner", FieldKind::Str),
    ("thread_id", FieldKind::Str),
    ("is_delete", FieldKind::Bool),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    content: String,
    owner: String,
    thread_id: String,
    is_delete: bool,
}

impl NewComment {
    pub fn new(payload: &Payload) -> Result<Self, CommentError> {
        payload::check_shape(payload, FIELDS)?;
        payload::reject_blank(payload, &["content", "owner", "thread_id"])?;

        Ok(Self {
            content: payload::text(payload, "content"),
            owner: payload::text(payload, "owner"),
            thread_id: payload::text(payload, "thread_id"),
            is_delete: payload::flag(payload, "is_delete"),
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

    pub fn is_delete(&self) -> bool {
        self.is_delete
    }
}

impl From<FieldError> for CommentError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::Missing(field) => Self::NotContainNeededProperty { field },
            FieldError::WrongType(field) => Self::NotMeetDataTypeSpecification { field },
            FieldError::Blank(field) => Self::InvalidString { field },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn payload(v: Value) -> Payload {
        v.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn empty_payload_is_missing_content() {
        let err = NewComment::new(&Payload::new()).unwrap_err();
        assert_eq!(err, CommentError::NotContainNeededProperty { field: "content" });
    }

    #[test]
    fn is_delete_must_be_boolean() {
        let err = NewComment::new(&payload(json!({
            "content": "sebuah comment",
            "owner": "user-123",
            "thread_id": "thread-123",
            "is_delete": "false",
        })))
        .unwrap_err();
        assert_eq!(err, CommentError::NotMeetDataTypeSpecification { field: "is_delete" });
    }

    #[test]
    fn whitespace_content_is_invalid() {
        let err = NewComment::new(&payload(json!({
            "content": "  ",
            "owner": "user-123",
            "thread_id": "thread-123",
            "is_delete": false,
        })))
        .unwrap_err();
        assert_eq!(err, CommentError::InvalidString { field: "content" });
    }

    #[test]
    fn builds_comment() {
        let comment = NewComment::new(&payload(json!({
            "content": "sebuah comment",
            "owner": "user-123",
            "thread_id": "thread-123",
            "is_delete": false,
        })))
        .unwrap();

        assert_eq!(comment.content(), "sebuah comment");
        assert_eq!(comment.thread_id(), "thread-123");
        assert!(!comment.is_delete());
    }
}
