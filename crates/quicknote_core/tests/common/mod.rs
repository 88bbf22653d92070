#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use quicknote_core::{
    NewNote, Note, NoteId, NotePatch, NoteRepository, NoteService, NotesController, RepoError,
    RepoResult, StoreError,
};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

static CLOCK_SECS: AtomicI64 = AtomicI64::new(1_700_000_000);

/// Monotonic test clock: every call is one second later than the last.
pub fn ticking_clock() -> DateTime<Utc> {
    let secs = CLOCK_SECS.fetch_add(1, Ordering::SeqCst);
    Utc.timestamp_opt(secs, 0).unwrap()
}

#[derive(Default)]
struct FakeStore {
    rows: Mutex<Vec<Note>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

/// In-memory stand-in for the remote store with failure injection.
#[derive(Clone, Default)]
pub struct FakeNoteRepository {
    inner: Arc<FakeStore>,
}

impl FakeNoteRepository {
    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn rows(&self) -> Vec<Note> {
        self.inner.rows.lock().unwrap().clone()
    }

    pub fn seed(&self, title: &str, content: &str) -> Note {
        let at = ticking_clock();
        let note = Note {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: at,
            updated_at: at,
        };
        self.inner.rows.lock().unwrap().push(note.clone());
        note
    }

    fn check_writes(&self) -> RepoResult<()> {
        if self.inner.fail_writes.load(Ordering::SeqCst) {
            return Err(simulated_failure());
        }
        Ok(())
    }
}

fn simulated_failure() -> RepoError {
    RepoError::Store(StoreError::Status {
        status: 503,
        body: "simulated network error".to_string(),
    })
}

#[async_trait]
impl NoteRepository for FakeNoteRepository {
    async fn list_notes(&self) -> RepoResult<Vec<Note>> {
        if self.inner.fail_reads.load(Ordering::SeqCst) {
            return Err(simulated_failure());
        }
        Ok(self.rows())
    }

    async fn create_note(&self, note: &NewNote) -> RepoResult<Note> {
        self.check_writes()?;
        let created = Note {
            id: Uuid::new_v4(),
            title: note.title.clone(),
            content: note.content.clone(),
            created_at: note.created_at,
            updated_at: note.updated_at,
        };
        self.inner.rows.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_note(&self, id: NoteId, patch: &NotePatch) -> RepoResult<Note> {
        self.check_writes()?;
        let mut rows = self.inner.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(RepoError::NotFound(id))?;
        row.title = patch.title.clone();
        row.content = patch.content.clone();
        row.updated_at = patch.updated_at;
        Ok(row.clone())
    }

    async fn delete_note(&self, id: NoteId) -> RepoResult<()> {
        self.check_writes()?;
        self.inner.rows.lock().unwrap().retain(|row| row.id != id);
        Ok(())
    }
}

pub fn service(repo: &FakeNoteRepository) -> NoteService<FakeNoteRepository> {
    NoteService::new(repo.clone()).with_clock(ticking_clock)
}

pub fn controller(repo: &FakeNoteRepository) -> NotesController<FakeNoteRepository> {
    NotesController::new(service(repo))
}
