//! The domain layer of the forum backend: entities, repository ports,
//! error taxonomy and the read-side masking rule.

pub mod entities;
pub mod errors;
pub mod ids;
pub mod masking;
pub mod models;
pub mod ports;
pub mod translate;

// Re-exporting for easier access in other crates
pub use entities::*;
pub use errors::*;
pub use masking::SoftDeletable;
pub use models::*;
pub use ports::*;
pub use translate::{translate, ClientError, ErrorKind, Translated};
