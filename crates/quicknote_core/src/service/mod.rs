//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the note use-case contract.
//! - Keep the controller and CLI decoupled from store details.

pub mod note_service;
