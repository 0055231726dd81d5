//! Board Store
//!
//! Uses Leptos reactive_stores so each list container only re-renders when
//! its own panel changes.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{Board, BoardSink, BoardStoreFields};

/// Type alias for the store
pub type BoardStore = Store<Board>;

impl BoardSink for BoardStore {
    fn publish(&self, board: Board) {
        *self.active().write() = board.active;
        *self.archived().write() = board.archived;
    }
}
