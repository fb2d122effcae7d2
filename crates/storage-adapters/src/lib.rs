//! # storage-adapters
//!
//! Concrete implementations of the repository ports.
//! `memory` is always compiled; `postgres` sits behind the `db-postgres` feature.

pub mod memory;

#[cfg(feature = "db-postgres")]
pub mod postgres;

pub use memory::InMemoryForumStore;
