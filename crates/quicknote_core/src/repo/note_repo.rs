//! Note repository contract and remote store implementation.
//!
//! # Responsibility
//! - Map list/create/update/delete onto the `notes` table.
//! - Reject store responses that break the single-row write contract.
//!
//! # Invariants
//! - Listing asks the store for `updated_at` descending order.
//! - Update and delete address exactly one row by `id`.

use crate::model::note::{NewNote, Note, NoteId, NotePatch};
use crate::store::{Filter, StoreClient, StoreError};
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Remote table holding note rows.
pub const NOTES_TABLE: &str = "notes";
const NOTES_ORDER: &str = "updated_at.desc";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    NotFound(NoteId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid store data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Repository interface for note CRUD operations.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Fetches all notes, most recently updated first.
    async fn list_notes(&self) -> RepoResult<Vec<Note>>;
    /// Inserts one note and returns the stored record with its new id.
    async fn create_note(&self, note: &NewNote) -> RepoResult<Note>;
    /// Writes back text and `updated_at` for one note.
    async fn update_note(&self, id: NoteId, patch: &NotePatch) -> RepoResult<Note>;
    /// Removes one note by id.
    async fn delete_note(&self, id: NoteId) -> RepoResult<()>;
}

/// Note repository backed by the remote store's REST endpoint.
#[derive(Debug, Clone)]
pub struct RemoteNoteRepository {
    client: StoreClient,
}

impl RemoteNoteRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NoteRepository for RemoteNoteRepository {
    async fn list_notes(&self) -> RepoResult<Vec<Note>> {
        Ok(self.client.select(NOTES_TABLE, NOTES_ORDER).await?)
    }

    async fn create_note(&self, note: &NewNote) -> RepoResult<Note> {
        let rows: Vec<Note> = self.client.insert(NOTES_TABLE, note).await?;
        single_row(rows, "insert")
    }

    async fn update_note(&self, id: NoteId, patch: &NotePatch) -> RepoResult<Note> {
        let rows: Vec<Note> = self
            .client
            .update(NOTES_TABLE, &Filter::eq("id", id), patch)
            .await?;
        if rows.is_empty() {
            return Err(RepoError::NotFound(id));
        }
        let updated = single_row(rows, "update")?;
        if updated.id != id {
            return Err(RepoError::InvalidData(format!(
                "update of {id} returned row {}",
                updated.id
            )));
        }
        Ok(updated)
    }

    async fn delete_note(&self, id: NoteId) -> RepoResult<()> {
        self.client
            .delete(NOTES_TABLE, &Filter::eq("id", id))
            .await?;
        Ok(())
    }
}

fn single_row(mut rows: Vec<Note>, op: &str) -> RepoResult<Note> {
    match rows.len() {
        1 => Ok(rows.remove(0)),
        count => Err(RepoError::InvalidData(format!(
            "{op} returned {count} rows, expected exactly 1"
        ))),
    }
}
