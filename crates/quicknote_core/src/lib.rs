//! Core logic for QuickNote.
//! Owns the note contract, the remote store client and the view-controller.

pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod view;

pub use config::{ConfigError, StoreConfig};
pub use controller::{ActionOutcome, EditBuffer, NotesController, NotesViewState, ViewEvent};
pub use logging::{default_log_level, init_logging, init_logging_from_env, logging_status};
pub use model::note::{NewNote, Note, NoteId, NotePatch};
pub use repo::note_repo::{NoteRepository, RemoteNoteRepository, RepoError, RepoResult};
pub use service::note_service::{NoteService, NoteServiceError};
pub use store::{StoreClient, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Connects to the configured store and returns a ready controller.
///
/// # Errors
/// - Returns `StoreError` when the HTTP handle cannot be built.
pub fn connect_controller(
    config: &StoreConfig,
) -> Result<NotesController<RemoteNoteRepository>, StoreError> {
    let client = StoreClient::connect(config)?;
    let service = NoteService::new(RemoteNoteRepository::new(client));
    Ok(NotesController::new(service))
}
