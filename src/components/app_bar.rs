//! App Bar Component

use leptos::prelude::*;

/// Page header
#[component]
pub fn AppBar(#[prop(into, default = "Default Title".to_string())] title: String) -> impl IntoView {
    view! {
        <header class="app-bar">{title}</header>
    }
}
