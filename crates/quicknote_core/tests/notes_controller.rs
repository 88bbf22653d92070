mod common;

use common::{controller, FakeNoteRepository};
use quicknote_core::view::{editor_view, list_items, EMPTY_LIST_PLACEHOLDER, UNTITLED};
use quicknote_core::ActionOutcome;

fn is_display_ordered(notes: &[quicknote_core::Note]) -> bool {
    notes
        .windows(2)
        .all(|pair| pair[0].updated_at >= pair[1].updated_at)
}

#[tokio::test]
async fn empty_store_then_first_create_selects_blank_note() {
    let repo = FakeNoteRepository::default();
    let mut ctrl = controller(&repo);

    ctrl.load().await;
    assert!(ctrl.state().notes.is_empty());
    assert!(list_items(ctrl.state()).is_empty());
    assert_eq!(EMPTY_LIST_PLACEHOLDER, "No notes yet");
    assert!(editor_view(ctrl.state()).is_none());

    assert_eq!(ctrl.create().await, ActionOutcome::Completed);
    let state = ctrl.state();
    assert_eq!(state.notes.len(), 1);
    assert_eq!(state.notes[0].title, "");
    assert_eq!(state.selected_id, Some(state.notes[0].id));
    assert_eq!(list_items(state)[0].title, UNTITLED);
    assert!(!state.saving);
}

#[tokio::test]
async fn create_prepends_note_with_matching_timestamps() {
    let repo = FakeNoteRepository::default();
    repo.seed("older", "text");
    let mut ctrl = controller(&repo);
    ctrl.load().await;

    ctrl.create().await;
    let created = &ctrl.state().notes[0];
    assert!(created.title.is_empty());
    assert!(created.content.is_empty());
    assert_eq!(created.created_at, created.updated_at);
    assert_eq!(ctrl.state().notes[1].title, "older");
    assert_eq!(ctrl.state().selected_id, Some(created.id));
}

#[tokio::test]
async fn load_orders_by_updated_at_descending() {
    let repo = FakeNoteRepository::default();
    repo.seed("first", "");
    repo.seed("second", "");
    repo.seed("third", "");
    let mut ctrl = controller(&repo);

    ctrl.load().await;
    let titles: Vec<&str> = ctrl
        .state()
        .notes
        .iter()
        .map(|n| n.title.as_str())
        .collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
    assert!(!ctrl.state().loading);
}

#[tokio::test]
async fn load_failure_degrades_to_empty_list() {
    let repo = FakeNoteRepository::default();
    repo.seed("hidden", "");
    repo.set_fail_reads(true);
    let mut ctrl = controller(&repo);

    ctrl.load().await;
    assert!(ctrl.state().notes.is_empty());
    assert!(!ctrl.state().loading);
}

#[tokio::test]
async fn save_trims_text_and_keeps_identity() {
    let repo = FakeNoteRepository::default();
    let original = repo.seed("draft", "");
    repo.seed("newer", "");
    let mut ctrl = controller(&repo);
    ctrl.load().await;

    assert!(ctrl.select(original.id));
    ctrl.edit_title("  Hello  ");
    ctrl.edit_content("line one\nline two\n\n");
    assert_eq!(ctrl.save().await, ActionOutcome::Completed);

    let state = ctrl.state();
    let saved = &state.notes[0];
    assert_eq!(saved.id, original.id);
    assert_eq!(saved.created_at, original.created_at);
    assert!(saved.updated_at > original.updated_at);
    assert_eq!(saved.title, "Hello");
    assert_eq!(saved.content, "line one\nline two");
    assert_eq!(state.selected_id, Some(original.id));
    assert!(is_display_ordered(&state.notes));

    let editor = editor_view(state).unwrap();
    assert_eq!(editor.last_updated, Some(saved.updated_at));
    assert_eq!(repo.rows().iter().find(|n| n.id == original.id), Some(saved));
}

#[tokio::test]
async fn edits_are_invisible_in_list_until_saved() {
    let repo = FakeNoteRepository::default();
    let note = repo.seed("title", "body");
    let mut ctrl = controller(&repo);
    ctrl.load().await;

    ctrl.select(note.id);
    ctrl.edit_title("changed");
    assert_eq!(ctrl.state().notes[0].title, "title");
    assert_eq!(editor_view(ctrl.state()).unwrap().title, "changed");
    assert_eq!(
        editor_view(ctrl.state()).unwrap().last_updated,
        Some(note.updated_at)
    );
}

#[tokio::test]
async fn switching_selection_discards_unsaved_edits() {
    let repo = FakeNoteRepository::default();
    let a = repo.seed("A", "");
    let b = repo.seed("B", "");
    let mut ctrl = controller(&repo);
    ctrl.load().await;

    ctrl.select(a.id);
    ctrl.edit_title("Hello");
    ctrl.select(b.id);

    assert_eq!(ctrl.state().find(a.id).unwrap().title, "A");
    assert_eq!(ctrl.state().edit_buffer.as_ref().unwrap().note.id, b.id);

    ctrl.select(a.id);
    assert_eq!(ctrl.state().edit_buffer.as_ref().unwrap().note.title, "A");
}

#[tokio::test]
async fn failed_save_keeps_buffer_and_list() {
    let repo = FakeNoteRepository::default();
    let note = repo.seed("kept", "");
    let mut ctrl = controller(&repo);
    ctrl.load().await;
    ctrl.select(note.id);
    ctrl.edit_title("unsaved edit");
    let before = ctrl.state().clone();

    repo.set_fail_writes(true);
    let outcome = ctrl.save().await;

    assert!(matches!(outcome, ActionOutcome::Failed { ref reason } if reason.contains("503")));
    assert_eq!(ctrl.state(), &before);
    assert!(!ctrl.state().saving);
    assert_eq!(repo.rows()[0].title, "kept");
}

#[tokio::test]
async fn failed_create_and_delete_leave_state_unchanged() {
    let repo = FakeNoteRepository::default();
    let note = repo.seed("only", "");
    let mut ctrl = controller(&repo);
    ctrl.load().await;
    ctrl.select(note.id);
    let before = ctrl.state().clone();

    repo.set_fail_writes(true);
    assert!(!ctrl.create().await.is_completed());
    assert_eq!(ctrl.state(), &before);
    assert!(!ctrl.delete(note.id).await.is_completed());
    assert_eq!(ctrl.state(), &before);
    assert_eq!(repo.rows().len(), 1);
}

#[tokio::test]
async fn delete_removes_one_entry_and_clears_selection() {
    let repo = FakeNoteRepository::default();
    let a = repo.seed("A", "");
    let b = repo.seed("B", "");
    let mut ctrl = controller(&repo);
    ctrl.load().await;
    ctrl.select(a.id);

    assert_eq!(ctrl.delete_selected().await, ActionOutcome::Completed);
    let state = ctrl.state();
    assert_eq!(state.notes.len(), 1);
    assert_eq!(state.notes[0].id, b.id);
    assert!(state.selected_id.is_none());
    assert!(state.edit_buffer.is_none());
    assert!(editor_view(state).is_none());
}

#[tokio::test]
async fn delete_of_unselected_note_keeps_selection() {
    let repo = FakeNoteRepository::default();
    let a = repo.seed("A", "");
    let b = repo.seed("B", "");
    let mut ctrl = controller(&repo);
    ctrl.load().await;
    ctrl.select(a.id);
    ctrl.edit_content("pending");

    assert!(ctrl.delete(b.id).await.is_completed());
    assert_eq!(ctrl.state().selected_id, Some(a.id));
    assert_eq!(
        ctrl.state().edit_buffer.as_ref().unwrap().note.content,
        "pending"
    );
}

#[tokio::test]
async fn save_and_delete_without_selection_are_ignored() {
    let repo = FakeNoteRepository::default();
    repo.seed("A", "");
    let mut ctrl = controller(&repo);
    ctrl.load().await;

    assert_eq!(ctrl.save().await, ActionOutcome::Ignored);
    assert_eq!(ctrl.delete_selected().await, ActionOutcome::Ignored);
    assert_eq!(repo.rows().len(), 1);
}

#[tokio::test]
async fn list_tracks_latest_server_responses_across_sequences() {
    let repo = FakeNoteRepository::default();
    let mut ctrl = controller(&repo);
    ctrl.load().await;

    ctrl.create().await;
    ctrl.edit_title("one");
    ctrl.save().await;
    ctrl.create().await;
    ctrl.edit_title("two");
    ctrl.save().await;
    ctrl.create().await;
    let third = ctrl.state().selected_id.unwrap();
    ctrl.delete(third).await;

    let first = ctrl.state().notes[1].id;
    ctrl.select(first);
    ctrl.edit_title("one again");
    ctrl.save().await;

    let mut expected = repo.rows();
    expected.sort_by(|l, r| r.updated_at.cmp(&l.updated_at));
    assert_eq!(ctrl.state().notes, expected);
    let titles: Vec<&str> = ctrl
        .state()
        .notes
        .iter()
        .map(|n| n.title.as_str())
        .collect();
    assert_eq!(titles, vec!["one again", "two"]);
}
