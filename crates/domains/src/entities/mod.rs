//! # Entities
//!
//! Validated, immutable write-side values built from raw request payloads.
//! Server-assigned fields (id, date) are added later by the repository.

pub mod comment;
pub mod payload;
pub mod reply;
pub mod thread;

pub use comment::NewComment;
pub use payload::Payload;
pub use reply::NewReply;
pub use thread::{NewThread, TITLE_MAX_CHARS};
