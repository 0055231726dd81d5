//! Notes Frontend App
//!
//! Main application component: header, new-note form, and the active and
//! archived note lists.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::HttpNotesApi;
use crate::board::{Board, BoardStoreFields};
use crate::client::NotesClient;
use crate::components::{AppBar, NoteForm, NotesGrid};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::models::Partition;
use crate::notify::SweetAlertNotifier;
use crate::store::BoardStore;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    log::info!("Using notes service at {}", config.base_url);

    let board: BoardStore = Store::new(Board::loading());
    let client = NotesClient::new(
        Arc::new(HttpNotesApi::new(config)),
        Arc::new(SweetAlertNotifier),
        Arc::new(board),
    );

    // Provide context to all children
    provide_context(AppContext::new(client.clone(), board));

    // Initial load
    Effect::new(move |_| {
        let client = client.clone();
        spawn_local(async move {
            client.render_notes().await;
        });
    });

    view! {
        <AppBar title="Notes App" />
        <main class="container">
            <NoteForm />

            <section class="notes-section">
                <h2>"Active Notes"</h2>
                <NotesGrid
                    partition=Partition::Active
                    panel=Signal::derive(move || board.active().get())
                />
            </section>

            <section class="notes-section">
                <h2>"Archived Notes"</h2>
                <NotesGrid
                    partition=Partition::Archived
                    panel=Signal::derive(move || board.archived().get())
                />
            </section>
        </main>
    }
}
