//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the note data access contract used by services.
//! - Isolate REST/query details of the remote store from orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   transport errors.
//! - Writes return the store-confirmed record, never the caller's input.

pub mod note_repo;
