//! Text rendering of the single notes page.

use quicknote_core::view::{
    editor_view, list_items, EMPTY_LIST_PLACEHOLDER, NO_SELECTION_PLACEHOLDER,
};
use quicknote_core::NotesViewState;
use std::fmt::{self, Write};

const RULE: &str = "----------------------------------------";

/// Renders header, note list and editor pane.
pub fn render_page(state: &NotesViewState) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_page(&mut out, state);
    out
}

fn write_page(out: &mut String, state: &NotesViewState) -> fmt::Result {
    let status = if state.loading {
        " [loading...]"
    } else if state.saving {
        " [saving...]"
    } else {
        ""
    };
    writeln!(out, "== QuickNote =={status}")?;
    writeln!(out, "(new) New note")?;
    writeln!(out, "{RULE}")?;

    let items = list_items(state);
    if items.is_empty() {
        writeln!(out, "  {EMPTY_LIST_PLACEHOLDER}")?;
    }
    for (index, item) in items.iter().enumerate() {
        let marker = if item.selected { '>' } else { ' ' };
        writeln!(
            out,
            "{marker} {}. {}  {}",
            index + 1,
            item.title,
            item.preview
        )?;
    }
    writeln!(out, "{RULE}")?;

    let Some(editor) = editor_view(state) else {
        return writeln!(out, "  {NO_SELECTION_PLACEHOLDER}");
    };
    writeln!(out, "Title: {}", editor.title)?;
    writeln!(out, "Content:")?;
    for line in editor.content.lines() {
        writeln!(out, "  | {line}")?;
    }
    if let Some(updated) = editor.last_updated {
        writeln!(
            out,
            "Last updated: {}",
            updated.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
    }
    writeln!(out, "(save) Save   (delete) Delete")
}
