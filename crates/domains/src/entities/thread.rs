use crate::entities::payload::{self, FieldError, FieldKind, Payload};
use crate::errors::ThreadError;

/// Longest accepted thread title, in characters.
pub const TITLE_MAX_CHARS: usize = 50;

const FIELDS: &[(&str, FieldKind)] = &[
    ("title", FieldKind::Str),
    ("body", FieldKind::Str),
    ("owner", FieldKind::Str),
];

/// A thread ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    title: String,
    body: String,
    owner: String,
}

impl NewThread {
    pub fn new(payload: &Payload) -> Result<Self, ThreadError> {
        payload::check_shape(payload, FIELDS)?;
        payload::reject_blank(payload, &["title", "body"])?;

        let title = payload::text(payload, "title");
        let length = title.chars().count();
        if length > TITLE_MAX_CHARS {
            return Err(ThreadError::TitleLimitChar {
                length,
                limit: TITLE_MAX_CHARS,
            });
        }

        Ok(Self {
            title,
            body: payload::text(payload, "body"),
            owner: payload::text(payload, "owner"),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

impl From<FieldError> for ThreadError {
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
    fn rejects_missing_property() {
        let err = NewThread::new(&payload(json!({ "body": "abc" }))).unwrap_err();
        assert_eq!(err, ThreadError::NotContainNeededProperty { field: "title" });
    }

    #[test]
    fn rejects_wrong_types() {
        let err = NewThread::new(&payload(json!({ "title": 123, "body": true, "owner": 42 })))
            .unwrap_err();
        assert!(matches!(err, ThreadError::NotMeetDataTypeSpecification { .. }));
    }

    #[test]
    fn title_limit_is_fifty_characters() {
        let fifty = "a".repeat(50);
        let ok = NewThread::new(&payload(json!({ "title": fifty, "body": "b", "owner": "user-123" })));
        assert_eq!(ok.unwrap().title().chars().count(), 50);

        let fifty_one = "a".repeat(51);
        let err = NewThread::new(&payload(json!({ "title": fifty_one, "body": "b", "owner": "user-123" })))
            .unwrap_err();
        assert_eq!(err, ThreadError::TitleLimitChar { length: 51, limit: 50 });
    }

    #[test]
    fn title_limit_counts_characters_not_bytes() {
        let title = "é".repeat(50);
        assert!(NewThread::new(&payload(json!({ "title": title, "body": "b", "owner": "user-123" }))).is_ok());
    }

    #[test]
    fn rejects_blank_title() {
        let err = NewThread::new(&payload(json!({ "title": "   ", "body": "b", "owner": "user-123" })))
            .unwrap_err();
        assert_eq!(err, ThreadError::InvalidString { field: "title" });
    }

    #[test]
    fn keeps_payload_fields() {
        let thread = NewThread::new(&payload(json!({
            "title": "First Thread",
            "body": "Lorem ipsum dolor sit amet",
            "owner": "user-123",
        })))
        .unwrap();

        assert_eq!(thread.title(), "First Thread");
        assert_eq!(thread.body(), "Lorem ipsum dolor sit amet");
        assert_eq!(thread.owner(), "user-123");
    }
}
