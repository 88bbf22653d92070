//! Notes view state and its transitions.
//!
//! # Responsibility
//! - Hold the list, selection, edit buffer and advisory flags.
//! - Reduce user actions and store responses into the next state.
//!
//! # Invariants
//! - `notes` stays sorted by `updated_at DESC`.
//! - `edit_buffer` is `Some` exactly when `selected_id` is `Some`.
//! - Buffer edits never touch `notes`; only confirmed records do.
//! - Failure events only reset the advisory flags.

use crate::model::note::{sort_for_display, Note, NoteId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client-only working copy of the selected note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditBuffer {
    pub note: Note,
    /// Local stamp of the last keystroke. Never displayed or persisted.
    pub edited_at: Option<DateTime<Utc>>,
}

impl EditBuffer {
    fn from_note(note: &Note) -> Self {
        Self {
            note: note.clone(),
            edited_at: None,
        }
    }
}

/// One step of the view state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    LoadStarted,
    LoadFinished(Vec<Note>),
    Select(NoteId),
    EditTitle { value: String, at: DateTime<Utc> },
    EditContent { value: String, at: DateTime<Utc> },
    SaveStarted,
    SaveSucceeded(Note),
    SaveFailed,
    DeleteSucceeded(NoteId),
    DeleteFailed,
    CreateSucceeded(Note),
    CreateFailed,
}

/// Serializable view state owned by the notes controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesViewState {
    pub notes: Vec<Note>,
    pub selected_id: Option<NoteId>,
    pub edit_buffer: Option<EditBuffer>,
    pub loading: bool,
    /// Advisory only; nothing is blocked while it is set.
    pub saving: bool,
}

impl NotesViewState {
    /// Consumes the state and returns the state after `event`.
    pub fn reduce(mut self, event: ViewEvent) -> Self {
        self.apply(event);
        self
    }

    /// Applies `event` in place.
    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::LoadStarted => self.loading = true,
            ViewEvent::LoadFinished(mut notes) => {
                sort_for_display(&mut notes);
                self.notes = notes;
                self.loading = false;
                if let Some(id) = self.selected_id {
                    if self.find(id).is_none() {
                        self.clear_selection();
                    }
                }
            }
            ViewEvent::Select(id) => {
                if let Some(note) = self.find(id) {
                    self.edit_buffer = Some(EditBuffer::from_note(note));
                    self.selected_id = Some(id);
                }
            }
            ViewEvent::EditTitle { value, at } => {
                if let Some(buffer) = self.edit_buffer.as_mut() {
                    buffer.note.title = value;
                    buffer.edited_at = Some(at);
                }
            }
            ViewEvent::EditContent { value, at } => {
                if let Some(buffer) = self.edit_buffer.as_mut() {
                    buffer.note.content = value;
                    buffer.edited_at = Some(at);
                }
            }
            ViewEvent::SaveStarted => self.saving = true,
            ViewEvent::SaveSucceeded(note) => {
                self.saving = false;
                // Why: a delete for this note resolved first; re-inserting
                // would resurrect a row the store no longer has.
                let Some(position) = self.position(note.id) else {
                    return;
                };
                if self.selected_id == Some(note.id) {
                    self.edit_buffer = Some(EditBuffer::from_note(&note));
                }
                self.notes[position] = note;
                sort_for_display(&mut self.notes);
            }
            ViewEvent::DeleteSucceeded(id) => {
                self.saving = false;
                if let Some(position) = self.position(id) {
                    self.notes.remove(position);
                }
                if self.selected_id == Some(id) {
                    self.clear_selection();
                }
            }
            ViewEvent::CreateSucceeded(note) => {
                self.saving = false;
                self.edit_buffer = Some(EditBuffer::from_note(&note));
                self.selected_id = Some(note.id);
                self.notes.insert(0, note);
            }
            ViewEvent::SaveFailed | ViewEvent::DeleteFailed | ViewEvent::CreateFailed => {
                self.saving = false;
            }
        }
    }

    /// Server-confirmed record of the selected note.
    pub fn selected_note(&self) -> Option<&Note> {
        self.selected_id.and_then(|id| self.find(id))
    }

    /// Looks up a listed note by id.
    pub fn find(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    fn clear_selection(&mut self) {
        self.selected_id = None;
        self.edit_buffer = None;
    }
}
