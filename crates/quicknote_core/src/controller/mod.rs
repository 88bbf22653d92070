//! Notes view-controller.
//!
//! # Responsibility
//! - Own the notes view state and drive it through store round trips.
//! - Report write outcomes as values so the surface decides how to show them.
//!
//! # Invariants
//! - View state is only mutated through `NotesViewState::apply`.
//! - A failed write leaves list and buffer untouched; only `saving` resets.
//! - Responses are reduced in arrival order (last response wins).

mod state;

pub use state::{EditBuffer, NotesViewState, ViewEvent};

use crate::model::note::NoteId;
use crate::repo::note_repo::NoteRepository;
use crate::service::note_service::NoteService;

/// Result of a write action triggered from the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Store confirmed the write and the state reflects it.
    Completed,
    /// Store call failed; `reason` is fit for a user-facing alert.
    Failed { reason: String },
    /// Nothing to act on (e.g. save with no selection).
    Ignored,
}

impl ActionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Controller owning view state and the note service.
pub struct NotesController<R: NoteRepository> {
    service: NoteService<R>,
    state: NotesViewState,
}

impl<R: NoteRepository> NotesController<R> {
    /// Creates a controller with empty, unselected state.
    pub fn new(service: NoteService<R>) -> Self {
        Self {
            service,
            state: NotesViewState::default(),
        }
    }

    /// Current view state.
    pub fn state(&self) -> &NotesViewState {
        &self.state
    }

    /// Fetches the note list. Store failures show up as an empty list.
    pub async fn load(&mut self) {
        self.state.apply(ViewEvent::LoadStarted);
        let notes = self.service.list_notes().await;
        self.state.apply(ViewEvent::LoadFinished(notes));
    }

    /// Selects a listed note, discarding any unsaved buffer edits.
    ///
    /// Returns `false` when `id` is not in the list.
    pub fn select(&mut self, id: NoteId) -> bool {
        self.state.apply(ViewEvent::Select(id));
        self.state.selected_id == Some(id)
    }

    /// Replaces the buffer title. No-op without a selection.
    pub fn edit_title(&mut self, value: impl Into<String>) {
        let at = self.service.now();
        self.state.apply(ViewEvent::EditTitle {
            value: value.into(),
            at,
        });
    }

    /// Replaces the buffer content. No-op without a selection.
    pub fn edit_content(&mut self, value: impl Into<String>) {
        let at = self.service.now();
        self.state.apply(ViewEvent::EditContent {
            value: value.into(),
            at,
        });
    }

    /// Creates a blank note, prepends it and selects it.
    pub async fn create(&mut self) -> ActionOutcome {
        self.state.apply(ViewEvent::SaveStarted);
        match self.service.create_note().await {
            Ok(note) => {
                self.state.apply(ViewEvent::CreateSucceeded(note));
                ActionOutcome::Completed
            }
            Err(err) => {
                self.state.apply(ViewEvent::CreateFailed);
                ActionOutcome::Failed {
                    reason: format!("failed to create note: {err}"),
                }
            }
        }
    }

    /// Persists the edit buffer of the selected note.
    pub async fn save(&mut self) -> ActionOutcome {
        let Some(buffer) = self.state.edit_buffer.as_ref() else {
            return ActionOutcome::Ignored;
        };
        let draft = buffer.note.clone();

        self.state.apply(ViewEvent::SaveStarted);
        match self.service.update_note(&draft).await {
            Ok(note) => {
                self.state.apply(ViewEvent::SaveSucceeded(note));
                ActionOutcome::Completed
            }
            Err(err) => {
                self.state.apply(ViewEvent::SaveFailed);
                ActionOutcome::Failed {
                    reason: format!("failed to save note: {err}"),
                }
            }
        }
    }

    /// Deletes a note by id; clears the selection when it was selected.
    pub async fn delete(&mut self, id: NoteId) -> ActionOutcome {
        self.state.apply(ViewEvent::SaveStarted);
        match self.service.delete_note(id).await {
            Ok(_) => {
                self.state.apply(ViewEvent::DeleteSucceeded(id));
                ActionOutcome::Completed
            }
            Err(err) => {
                self.state.apply(ViewEvent::DeleteFailed);
                ActionOutcome::Failed {
                    reason: format!("failed to delete note: {err}"),
                }
            }
        }
    }

    /// Deletes the selected note, if any.
    pub async fn delete_selected(&mut self) -> ActionOutcome {
        match self.state.selected_id {
            Some(id) => self.delete(id).await,
            None => ActionOutcome::Ignored,
        }
    }
}
