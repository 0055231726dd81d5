//! Note Item Component
//!
//! A single note card with archive/unarchive and delete actions.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::actions;
use crate::context::use_app_context;
use crate::models::Note;

/// Creation time in the browser's locale
fn format_created_at(created_at: &DateTime<Utc>) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(created_at.timestamp_millis() as f64));
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}

#[component]
pub fn NoteItem(note: Note, archived: bool) -> impl IntoView {
    let ctx = use_app_context();

    // Dims the card and blocks clicks while a request is in flight
    let (busy, set_busy) = signal(false);

    let toggle = {
        let client = ctx.client.clone();
        let id = note.id.clone();
        move |_| {
            let client = client.clone();
            let id = id.clone();
            spawn_local(async move {
                // The client already showed the popup
                let _ = actions::toggle_archive(&client, &id, archived, move |on| set_busy.set(on)).await;
            });
        }
    };

    let delete = {
        let client = ctx.client.clone();
        let id = note.id.clone();
        move |_| {
            let client = client.clone();
            let id = id.clone();
            spawn_local(async move {
                let _ = actions::confirm_and_delete(&client, &id, move |on| set_busy.set(on)).await;
            });
        }
    };

    let created_at = format_created_at(&note.created_at);

    view! {
        <article class=move || if busy.get() { "note-item loading" } else { "note-item" }>
            <h3>{note.title}</h3>
            <p class="note-body">{note.body}</p>
            <small>"Created: " {created_at}</small>
            <div class="actions">
                <button class="archive-btn" on:click=toggle>
                    {if archived { "Unarchive" } else { "Archive" }}
                </button>
                <button class="delete-btn" on:click=delete>"Delete"</button>
            </div>
        </article>
    }
}
