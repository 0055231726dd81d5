//! Frontend Models
//!
//! Data structures matching the notes service payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp;

/// Note as reported by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub archived: bool,
}

/// Payload for `POST /notes`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewNote {
    pub title: String,
    pub body: String,
}

/// Response wrapper used by every endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

/// The two lists every note falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    Active,
    Archived,
}

impl Partition {
    pub fn is_archived(self) -> bool {
        matches!(self, Partition::Archived)
    }

    /// Text shown when the partition has no notes
    pub fn empty_text(self) -> &'static str {
        match self {
            Partition::Active => "Tidak ada catatan aktif",
            Partition::Archived => "Tidak ada catatan terarsip",
        }
    }
}

/// Sort notes newest first
pub fn sort_newest_first(notes: &mut [Note]) {
    notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
