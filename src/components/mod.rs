//! UI Components
//!
//! Reusable Leptos components.

mod app_bar;
mod loading_indicator;
mod note_form;
mod note_item;
mod notes_grid;

pub use app_bar::AppBar;
pub use loading_indicator::LoadingIndicator;
pub use note_form::NoteForm;
pub use note_item::NoteItem;
pub use notes_grid::NotesGrid;
