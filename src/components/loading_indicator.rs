use leptos::prelude::*;

/// Spinner shown while a list is being fetched
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loader" role="status" aria-label="Loading"></div>
    }
}
