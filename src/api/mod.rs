//! Notes Service API
//!
//! Transport-level bindings to the remote notes service. One method per
//! endpoint, no notifications and no re-rendering; see `crate::client` for
//! the user-facing operations built on top.

mod error;
mod http;

use async_trait::async_trait;

use crate::models::{NewNote, Note};

pub use error::ApiError;
pub use http::HttpNotesApi;

/// Remote notes service.
///
/// Futures are not `Send`: everything runs on the browser's event loop.
#[async_trait(?Send)]
pub trait NotesApi: Send + Sync {
    /// `GET /notes`
    async fn list_active(&self) -> Result<Vec<Note>, ApiError>;

    /// `GET /notes/archived`
    async fn list_archived(&self) -> Result<Vec<Note>, ApiError>;

    /// `POST /notes`
    async fn create(&self, note: &NewNote) -> Result<Note, ApiError>;

    /// `DELETE /notes/{id}`
    async fn delete(&self, id: &str) -> Result<(), ApiError>;

    /// `POST /notes/{id}/archive`
    async fn archive(&self, id: &str) -> Result<(), ApiError>;

    /// `POST /notes/{id}/unarchive`
    async fn unarchive(&self, id: &str) -> Result<(), ApiError>;
}
