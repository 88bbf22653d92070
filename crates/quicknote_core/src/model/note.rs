//! Note domain model.
//!
//! # Responsibility
//! - Define the `notes` table row shape (`id`, `title`, `content`,
//!   `created_at`, `updated_at`).
//! - Provide insert/update payloads matching store write semantics.
//!
//! # Invariants
//! - `id` and `created_at` are never part of an update payload.
//! - A freshly created note has blank text and `created_at == updated_at`.
//! - Display order is `updated_at` descending.

use super::store_format;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// Server-assigned identifier of a note row.
pub type NoteId = Uuid;

/// Canonical note record as confirmed by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique key, assigned by the store on insert.
    pub id: NoteId,
    /// Free text, may be empty. `null` in the store reads as empty.
    #[serde(default, deserialize_with = "store_format::text_or_empty")]
    pub title: String,
    /// Free text, may be empty. `null` in the store reads as empty.
    #[serde(default, deserialize_with = "store_format::text_or_empty")]
    pub content: String,
    /// Set once at creation.
    #[serde(deserialize_with = "store_format::timestamp")]
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update.
    #[serde(deserialize_with = "store_format::timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Builds a patch carrying this note's text with trimmed whitespace.
    pub fn to_patch(&self, updated_at: DateTime<Utc>) -> NotePatch {
        NotePatch {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            updated_at,
        }
    }
}

/// Insert payload for a new note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewNote {
    /// Creates the blank payload used by the "new note" action.
    pub fn blank(now: DateTime<Utc>) -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Update payload written back for an existing note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotePatch {
    pub title: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

/// Orders notes most recently touched first.
///
/// Ties fall back to `id` so the order stays deterministic.
pub fn display_order(left: &Note, right: &Note) -> Ordering {
    right
        .updated_at
        .cmp(&left.updated_at)
        .then_with(|| left.id.cmp(&right.id))
}

/// Sorts a note list into display order in place.
pub fn sort_for_display(notes: &mut [Note]) {
    notes.sort_by(display_order);
}
