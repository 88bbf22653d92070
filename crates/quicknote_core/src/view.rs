//! Presentation projections for the single-page notes surface.
//!
//! # Responsibility
//! - Project view state into list rows and the editor pane.
//! - Own display-only rules (title fallback, preview truncation).
//!
//! # Invariants
//! - Nothing here mutates notes; previews are derived on every render.
//! - "Last updated" is always the server-confirmed `updated_at`.

use crate::controller::NotesViewState;
use crate::model::note::NoteId;
use chrono::{DateTime, Utc};

/// Maximum characters shown in a list preview.
pub const PREVIEW_MAX_CHARS: usize = 40;
/// Shown instead of the list when there are no notes.
pub const EMPTY_LIST_PLACEHOLDER: &str = "No notes yet";
/// Shown instead of the editor when no note is selected.
pub const NO_SELECTION_PLACEHOLDER: &str = "Select a note or create a new one";
/// Display fallback for notes with an empty title.
pub const UNTITLED: &str = "Untitled";

/// One row of the note list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub id: NoteId,
    pub title: String,
    pub preview: String,
    pub selected: bool,
}

/// Editor pane contents for the selected note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    pub title: String,
    pub content: String,
    pub last_updated: Option<DateTime<Utc>>,
    pub saving: bool,
}

/// First line of `content`, capped to `PREVIEW_MAX_CHARS` characters.
pub fn preview_line(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or("").trim_end();
    let mut preview: String = first_line.chars().take(PREVIEW_MAX_CHARS).collect();
    if first_line.chars().count() > PREVIEW_MAX_CHARS {
        preview.push_str("...");
    }
    preview
}

/// Title to show for a note, with a fallback for empty titles.
pub fn display_title(title: &str) -> &str {
    if title.trim().is_empty() {
        UNTITLED
    } else {
        title
    }
}

/// Projects the note list into display rows.
pub fn list_items(state: &NotesViewState) -> Vec<ListItem> {
    state
        .notes
        .iter()
        .map(|note| ListItem {
            id: note.id,
            title: display_title(&note.title).to_string(),
            preview: preview_line(&note.content),
            selected: state.selected_id == Some(note.id),
        })
        .collect()
}

/// Projects the edit buffer into the editor pane, if a note is selected.
pub fn editor_view(state: &NotesViewState) -> Option<EditorView> {
    let buffer = state.edit_buffer.as_ref()?;
    Some(EditorView {
        title: buffer.note.title.clone(),
        content: buffer.note.content.clone(),
        last_updated: state.selected_note().map(|note| note.updated_at),
        saving: state.saving,
    })
}
