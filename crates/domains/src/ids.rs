//! Resource id generation: `<kind>-<uuid v4, simple format>`.

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Thread,
    Comment,
    Reply,
}

impl IdKind {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Thread => "thread",
            Self::Comment => "comment",
            Self::Reply => "reply",
        }
    }
}

pub fn generate(kind: IdKind) -> String {
    format!("{}-{}", kind.prefix(), Uuid::new_v4().simple())
}
