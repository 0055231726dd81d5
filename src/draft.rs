//! New-note form state
//!
//! Both fields are required; a field's error shows whenever its trimmed
//! value is empty.

use crate::models::NewNote;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const BODY_REQUIRED: &str = "Content is required";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
    pub title_error: bool,
    pub body_error: bool,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl NoteDraft {
    pub fn set_title(&mut self, value: String) {
        self.title_error = is_blank(&value);
        self.title = value;
    }

    pub fn set_body(&mut self, value: String) {
        self.body_error = is_blank(&value);
        self.body = value;
    }

    /// Re-check both fields; the trimmed note if both are filled in
    pub fn validate(&mut self) -> Option<NewNote> {
        self.title_error = is_blank(&self.title);
        self.body_error = is_blank(&self.body);
        if self.title_error || self.body_error {
            return None;
        }
        Some(NewNote {
            title: self.title.trim().to_string(),
            body: self.body.trim().to_string(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
