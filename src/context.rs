//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::client::NotesClient;
use crate::store::BoardStore;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Note operations (notifications and re-rendering included)
    pub client: NotesClient,
    /// Contents of the active and archived containers
    pub board: BoardStore,
}

impl AppContext {
    pub fn new(client: NotesClient, board: BoardStore) -> Self {
        Self { client, board }
    }
}

/// Get the app context; panics outside `App`
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
