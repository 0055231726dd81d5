//! View Actions
//!
//! Click and submit flows shared by the item and form views. `busy` toggles
//! the caller's loading state; it is cleared on failure only, since success
//! re-renders the lists and replaces the view.

use crate::client::{FetchError, NotesClient};
use crate::models::{NewNote, Note};

/// Archive an active note or unarchive an archived one
pub async fn toggle_archive(
    client: &NotesClient,
    id: &str,
    archived: bool,
    busy: impl Fn(bool),
) -> Result<(), FetchError> {
    busy(true);
    let result = if archived {
        client.unarchive_note(id).await
    } else {
        client.archive_note(id).await
    };
    if result.is_err() {
        busy(false);
    }
    result
}

/// Delete after explicit confirmation. `Ok(false)` when the user backs out.
pub async fn confirm_and_delete(
    client: &NotesClient,
    id: &str,
    busy: impl Fn(bool),
) -> Result<bool, FetchError> {
    if !client.notifier().confirm_delete().await {
        return Ok(false);
    }
    busy(true);
    match client.delete_note(id).await {
        Ok(()) => Ok(true),
        Err(err) => {
            busy(false);
            Err(err)
        }
    }
}

/// Submit a validated form. The form is re-enabled whatever happens.
pub async fn submit_note(
    client: &NotesClient,
    note: NewNote,
    submitting: impl Fn(bool),
) -> Result<Note, FetchError> {
    submitting(true);
    let result = client.create_note(&note.title, &note.body).await;
    if let Err(err) = &result {
        log::error!("Error adding note: {err}");
    }
    submitting(false);
    result
}
