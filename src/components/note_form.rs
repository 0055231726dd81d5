//! Note Form Component
//!
//! Title/body form for creating notes, with inline required-field errors.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::draft::{NoteDraft, BODY_REQUIRED, TITLE_REQUIRED};

#[component]
pub fn NoteForm() -> impl IntoView {
    let ctx = use_app_context();

    let draft = RwSignal::new(NoteDraft::default());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(note) = draft.try_update(|d| d.validate()).flatten() else {
            return;
        };
        let client = ctx.client.clone();
        spawn_local(async move {
            let result = actions::submit_note(&client, note, move |on| set_submitting.set(on)).await;
            if result.is_ok() {
                draft.update(NoteDraft::clear);
            }
        });
    };

    let error_class = |visible: bool| if visible { "error visible" } else { "error" };

    view! {
        <form
            class=move || if submitting.get() { "note-form submitting" } else { "note-form" }
            on:submit=on_submit
        >
            <input
                type="text"
                placeholder="Note Title"
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=move |ev| draft.update(|d| d.set_title(event_target_value(&ev)))
            />
            <div class=move || error_class(draft.with(|d| d.title_error))>{TITLE_REQUIRED}</div>
            <textarea
                placeholder="Note Content"
                rows="4"
                prop:value=move || draft.with(|d| d.body.clone())
                on:input=move |ev| draft.update(|d| d.set_body(event_target_value(&ev)))
            ></textarea>
            <div class=move || error_class(draft.with(|d| d.body_error))>{BODY_REQUIRED}</div>
            <button type="submit">"Add Note"</button>
        </form>
    }
}
