//! Note use-case service.
//!
//! # Responsibility
//! - Provide the list/create/update/delete note contract.
//! - Stamp timestamps and normalize text before persistence.
//!
//! # Invariants
//! - List failures degrade to an empty list instead of an error.
//! - Create always writes blank text with `created_at == updated_at`.
//! - Update trims `title`/`content`, refreshes `updated_at`, and never
//!   sends `id` or `created_at`.
//! - Returned lists are sorted by `updated_at DESC`.

use crate::model::note::{sort_for_display, NewNote, Note, NoteId};
use crate::repo::note_repo::{NoteRepository, RepoError};
use chrono::{DateTime, Utc};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Service error for note write use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Target note does not exist in the store.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::NoteNotFound(_) => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NoteNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
    clock: fn() -> DateTime<Utc>,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository and the system clock.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            clock: Utc::now,
        }
    }

    /// Replaces the timestamp source used for create/update stamps.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Current time according to the configured clock.
    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// Lists all notes, most recently updated first.
    ///
    /// Returns an empty list when the store call fails.
    pub async fn list_notes(&self) -> Vec<Note> {
        let started_at = Instant::now();
        match self.repo.list_notes().await {
            Ok(mut notes) => {
                // Why: the store already orders rows, but repositories are
                // swappable and the view relies on `updated_at DESC`.
                sort_for_display(&mut notes);
                info!(
                    "event=notes_list module=service status=ok count={} duration_ms={}",
                    notes.len(),
                    started_at.elapsed().as_millis()
                );
                notes
            }
            Err(err) => {
                warn!(
                    "event=notes_list module=service status=error duration_ms={} error_code=list_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Vec::new()
            }
        }
    }

    /// Creates one blank note and returns the store-assigned record.
    pub async fn create_note(&self) -> Result<Note, NoteServiceError> {
        let payload = NewNote::blank(self.now());
        match self.repo.create_note(&payload).await {
            Ok(note) => {
                info!(
                    "event=note_create module=service status=ok note_id={}",
                    note.id
                );
                Ok(note)
            }
            Err(err) => {
                error!(
                    "event=note_create module=service status=error error_code=create_failed error={}",
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Writes back trimmed text and a fresh `updated_at` for `note.id`.
    pub async fn update_note(&self, note: &Note) -> Result<Note, NoteServiceError> {
        let patch = note.to_patch(self.now());
        match self.repo.update_note(note.id, &patch).await {
            Ok(updated) => {
                info!(
                    "event=note_update module=service status=ok note_id={}",
                    updated.id
                );
                Ok(updated)
            }
            Err(err) => {
                error!(
                    "event=note_update module=service status=error note_id={} error_code=update_failed error={}",
                    note.id, err
                );
                Err(err.into())
            }
        }
    }

    /// Deletes one note by id. Returns `true` when the store accepted it.
    pub async fn delete_note(&self, id: NoteId) -> Result<bool, NoteServiceError> {
        match self.repo.delete_note(id).await {
            Ok(()) => {
                info!("event=note_delete module=service status=ok note_id={id}");
                Ok(true)
            }
            Err(err) => {
                error!(
                    "event=note_delete module=service status=error note_id={} error_code=delete_failed error={}",
                    id, err
                );
                Err(err.into())
            }
        }
    }
}
