//! Notes Grid Component
//!
//! One list container (active or archived), driven by its board panel.

use leptos::prelude::*;

use crate::board::{Panel, LOAD_FAILED_TEXT};
use crate::components::{LoadingIndicator, NoteItem};
use crate::models::Partition;

#[component]
pub fn NotesGrid(
    partition: Partition,
    #[prop(into)] panel: Signal<Panel>,
) -> impl IntoView {
    let archived = partition.is_archived();
    let grid_id = match partition {
        Partition::Active => "active-notes-grid",
        Partition::Archived => "archived-notes-grid",
    };

    view! {
        <div id=grid_id class="notes-grid">
            {move || match panel.get() {
                Panel::Loading => view! { <LoadingIndicator /> }.into_any(),
                Panel::Empty => view! {
                    <p class="notes-message">{partition.empty_text()}</p>
                }.into_any(),
                Panel::Failed => view! {
                    <p class="notes-message failed">{LOAD_FAILED_TEXT}</p>
                }.into_any(),
                Panel::Populated(notes) => notes
                    .into_iter()
                    .map(|note| view! { <NoteItem note=note archived=archived /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
