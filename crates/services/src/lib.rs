//! # services
//!
//! Use cases of the forum backend. Each one runs a fixed chain of existence
//! and ownership checks against the repository ports before it persists,
//! mutates, or assembles anything. Failures from a port propagate unchanged.

pub mod assembly;
pub mod comment;
pub mod container;
pub mod reply;
pub mod thread;

pub use comment::{AddCommentUseCase, DeleteCommentUseCase};
pub use container::{ForumServices, Repositories};
pub use reply::{AddReplyUseCase, DeleteReplyUseCase};
pub use thread::{AddThreadUseCase, GetDetailThreadUseCase, GetThreadCommentUseCase};

use domains::entities::Payload;
use serde_json::Value;

/// Copies `payload` and overwrites the server-controlled keys.
pub(crate) fn with_fields(payload: &Payload, fields: &[(&str, Value)]) -> Payload {
    let mut merged = payload.clone();
    for (key, value) in fields {
        merged.insert((*key).to_owned(), value.clone());
    }
    merged
}
