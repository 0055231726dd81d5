//! Render Orchestrator
//!
//! Rebuilds both note lists from a fresh read of the service. The board is
//! always published whole: both panels loading, both populated/empty, or
//! both failed.

use futures_util::future::join;
use reactive_stores::Store;

use crate::client::NotesClient;
use crate::models::Note;

/// Text shown in both panels when either list could not be loaded
pub const LOAD_FAILED_TEXT: &str = "Failed to load notes";

/// What a single list container shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Panel {
    #[default]
    Loading,
    Empty,
    Populated(Vec<Note>),
    Failed,
}

impl Panel {
    fn from_notes(notes: Vec<Note>) -> Self {
        if notes.is_empty() {
            Panel::Empty
        } else {
            Panel::Populated(notes)
        }
    }

    /// Notes on display, empty unless populated
    pub fn notes(&self) -> &[Note] {
        match self {
            Panel::Populated(notes) => notes,
            _ => &[],
        }
    }
}

/// Contents of the active and archived containers
#[derive(Debug, Clone, PartialEq, Default, Store)]
pub struct Board {
    pub active: Panel,
    pub archived: Panel,
}

impl Board {
    pub fn loading() -> Self {
        Self {
            active: Panel::Loading,
            archived: Panel::Loading,
        }
    }

    pub fn failed() -> Self {
        Self {
            active: Panel::Failed,
            archived: Panel::Failed,
        }
    }
}

/// Destination for rendered boards
pub trait BoardSink: Send + Sync {
    fn publish(&self, board: Board);
}

impl NotesClient {
    /// Show spinners, fetch both lists concurrently, then publish the result
    pub async fn render_notes(&self) {
        self.board.publish(Board::loading());

        let (active, archived) = join(self.list_active(), self.list_archived()).await;
        let board = match (active, archived) {
            (Ok(active), Ok(archived)) => {
                log::debug!("Rendering {} active and {} archived notes", active.len(), archived.len());
                Board {
                    active: Panel::from_notes(active),
                    archived: Panel::from_notes(archived),
                }
            }
            (Err(err), _) | (_, Err(err)) => {
                log::error!("Error rendering notes: {err}");
                Board::failed()
            }
        };
        self.board.publish(board);
    }
}
