//! Notes Client
//!
//! User-facing note operations. Every operation reports its outcome through
//! the `Notifier` and, after a successful mutation, re-renders both lists
//! before returning. Failures are both shown and returned.

use std::sync::Arc;

use thiserror::Error;

use crate::api::{ApiError, NotesApi};
use crate::board::BoardSink;
use crate::models::{sort_newest_first, NewNote, Note, Partition};
use crate::notify::Notifier;

/// Popup text for any failed delete; the service's own message is not shown
pub const DELETE_FAILED_POPUP: &str = "Failed to delete note. Please try again.";

/// A failed note operation, carrying the text shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Fallback for bad statuses; transport failures keep their own text
    fn from_status(err: &ApiError, fallback: &str) -> Self {
        match err {
            ApiError::Status { .. } => Self::new(fallback),
            other => Self::new(other.to_string()),
        }
    }

    /// Like `from_status`, but prefers the service's message when it sent one
    fn from_server(err: &ApiError, fallback: &str) -> Self {
        match err.server_message() {
            Some(message) => Self::new(message),
            None => Self::from_status(err, fallback),
        }
    }
}

#[derive(Clone)]
pub struct NotesClient {
    api: Arc<dyn NotesApi>,
    notifier: Arc<dyn Notifier>,
    pub(crate) board: Arc<dyn BoardSink>,
}

impl NotesClient {
    pub fn new(api: Arc<dyn NotesApi>, notifier: Arc<dyn Notifier>, board: Arc<dyn BoardSink>) -> Self {
        Self { api, notifier, board }
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Active notes, newest first
    pub async fn list_active(&self) -> Result<Vec<Note>, FetchError> {
        self.list(Partition::Active).await
    }

    /// Archived notes, newest first
    pub async fn list_archived(&self) -> Result<Vec<Note>, FetchError> {
        self.list(Partition::Archived).await
    }

    async fn list(&self, partition: Partition) -> Result<Vec<Note>, FetchError> {
        let (result, fallback) = match partition {
            Partition::Active => (self.api.list_active().await, "Failed to fetch active notes"),
            Partition::Archived => (self.api.list_archived().await, "Failed to fetch archived notes"),
        };
        match result {
            Ok(mut notes) => {
                sort_newest_first(&mut notes);
                Ok(notes)
            }
            Err(err) => {
                let error = FetchError::from_status(&err, fallback);
                Err(self.fail(&format!("fetching {partition:?} notes"), &err, error))
            }
        }
    }

    pub async fn create_note(&self, title: &str, body: &str) -> Result<Note, FetchError> {
        let payload = NewNote {
            title: title.to_string(),
            body: body.to_string(),
        };
        match self.api.create(&payload).await {
            Ok(note) => {
                log::info!("Created note {}", note.id);
                let _ = self.notifier.success("Note added successfully!");
                self.render_notes().await;
                Ok(note)
            }
            Err(err) => {
                let error = FetchError::from_server(&err, "Failed to add note");
                Err(self.fail("adding note", &err, error))
            }
        }
    }

    pub async fn delete_note(&self, id: &str) -> Result<(), FetchError> {
        match self.api.delete(id).await {
            Ok(()) => {
                log::info!("Deleted note {id}");
                let _ = self.notifier.success("Note deleted successfully!");
                self.render_notes().await;
                Ok(())
            }
            Err(err) => {
                log::error!("Error deleting note {id}: {err}");
                let _ = self.notifier.error(DELETE_FAILED_POPUP);
                Err(FetchError::new("Failed to delete note"))
            }
        }
    }

    pub async fn archive_note(&self, id: &str) -> Result<(), FetchError> {
        match self.api.archive(id).await {
            Ok(()) => {
                log::info!("Archived note {id}");
                let _ = self.notifier.success("Note archived successfully!");
                self.render_notes().await;
                Ok(())
            }
            Err(err) => {
                let error = FetchError::from_server(&err, "Failed to archive note");
                Err(self.fail(&format!("archiving note {id}"), &err, error))
            }
        }
    }

    pub async fn unarchive_note(&self, id: &str) -> Result<(), FetchError> {
        match self.api.unarchive(id).await {
            Ok(()) => {
                log::info!("Unarchived note {id}");
                let _ = self.notifier.success("Note unarchived successfully!");
                self.render_notes().await;
                Ok(())
            }
            Err(err) => {
                let error = FetchError::from_server(&err, "Failed to unarchive note");
                Err(self.fail(&format!("unarchiving note {id}"), &err, error))
            }
        }
    }

    /// Log, show the error popup, and hand the error back to the caller
    fn fail(&self, doing: &str, cause: &ApiError, error: FetchError) -> FetchError {
        log::error!("Error {doing}: {cause}");
        let _ = self.notifier.error(&error.message);
        error
    }
}
