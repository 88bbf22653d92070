//! Domain model for persisted notes.
//!
//! # Responsibility
//! - Define the canonical note record exchanged with the remote store.
//! - Define write payloads that keep immutable fields out of updates.
//!
//! # Invariants
//! - Every note is identified by a server-assigned, stable `NoteId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod note;
pub mod store_format;
