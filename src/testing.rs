//! Test doubles
//!
//! In-memory notes service, popup recorder and board recorder.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Duration;
use futures_util::future::{self, LocalBoxFuture};
use futures_util::FutureExt;

use crate::api::{ApiError, NotesApi};
use crate::board::{Board, BoardSink};
use crate::client::NotesClient;
use crate::models::{NewNote, Note};
use crate::notify::{Dismissal, Notifier};
use crate::timestamp;

pub fn note(id: &str, created_at: &str) -> Note {
    Note {
        id: id.to_string(),
        title: format!("Title {id}"),
        body: format!("Body {id}"),
        created_at: timestamp::parse(created_at).expect("valid test timestamp"),
        archived: false,
    }
}

pub fn archived_note(id: &str, created_at: &str) -> Note {
    Note { archived: true, ..note(id, created_at) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Endpoint {
    ListActive,
    ListArchived,
    Create,
    Delete,
    Archive,
    Unarchive,
}

#[derive(Default)]
struct MockServer {
    notes: Vec<Note>,
    failures: HashMap<Endpoint, ApiError>,
    calls: Vec<Endpoint>,
    next_id: u32,
}

impl MockServer {
    fn hit(&mut self, endpoint: Endpoint) -> Result<(), ApiError> {
        self.calls.push(endpoint);
        match self.failures.get(&endpoint) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn find(&mut self, id: &str) -> Result<&mut Note, ApiError> {
        self.notes.iter_mut().find(|n| n.id == id).ok_or_else(|| ApiError::Status {
            code: 404,
            message: Some("Note is not found".to_string()),
        })
    }
}

/// Notes service kept in memory; endpoints can be told to fail
#[derive(Default)]
pub struct MockNotesApi {
    server: Mutex<MockServer>,
}

impl MockNotesApi {
    pub fn with_notes(notes: Vec<Note>) -> Self {
        let server = MockServer { notes, ..Default::default() };
        Self { server: Mutex::new(server) }
    }

    /// Make every later call to `endpoint` fail with `err`
    pub fn fail(&self, endpoint: Endpoint, err: ApiError) {
        self.server.lock().unwrap().failures.insert(endpoint, err);
    }

    pub fn calls(&self) -> Vec<Endpoint> {
        self.server.lock().unwrap().calls.clone()
    }

    pub fn notes(&self) -> Vec<Note> {
        self.server.lock().unwrap().notes.clone()
    }
}

#[async_trait(?Send)]
impl NotesApi for MockNotesApi {
    async fn list_active(&self) -> Result<Vec<Note>, ApiError> {
        let mut server = self.server.lock().unwrap();
        server.hit(Endpoint::ListActive)?;
        Ok(server.notes.iter().filter(|n| !n.archived).cloned().collect())
    }

    async fn list_archived(&self) -> Result<Vec<Note>, ApiError> {
        let mut server = self.server.lock().unwrap();
        server.hit(Endpoint::ListArchived)?;
        Ok(server.notes.iter().filter(|n| n.archived).cloned().collect())
    }

    async fn create(&self, new_note: &NewNote) -> Result<Note, ApiError> {
        let mut server = self.server.lock().unwrap();
        server.hit(Endpoint::Create)?;
        server.next_id += 1;
        let created_at = server
            .notes
            .iter()
            .map(|n| n.created_at)
            .max()
            .map(|latest| latest + Duration::days(1))
            .unwrap_or_else(|| timestamp::parse("2024-01-01").expect("valid timestamp"));
        let note = Note {
            id: format!("notes-{}", server.next_id),
            title: new_note.title.clone(),
            body: new_note.body.clone(),
            created_at,
            archived: false,
        };
        server.notes.push(note.clone());
        Ok(note)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let mut server = self.server.lock().unwrap();
        server.hit(Endpoint::Delete)?;
        server.find(id)?;
        server.notes.retain(|n| n.id != id);
        Ok(())
    }

    async fn archive(&self, id: &str) -> Result<(), ApiError> {
        let mut server = self.server.lock().unwrap();
        server.hit(Endpoint::Archive)?;
        server.find(id)?.archived = true;
        Ok(())
    }

    async fn unarchive(&self, id: &str) -> Result<(), ApiError> {
        let mut server = self.server.lock().unwrap();
        server.hit(Endpoint::Unarchive)?;
        server.find(id)?.archived = false;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Error(String),
    Success(String),
    ConfirmDelete,
}

/// Records popups; answers delete confirmations with a preset reply
pub struct RecordingNotifier {
    events: Mutex<Vec<Notification>>,
    confirm: Mutex<bool>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            confirm: Mutex::new(true),
        }
    }

    pub fn answer_confirm(&self, confirmed: bool) {
        *self.confirm.lock().unwrap() = confirmed;
    }

    pub fn events(&self) -> Vec<Notification> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: Notification) {
        self.events.lock().unwrap().push(event);
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) -> Dismissal {
        self.record(Notification::Error(message.to_string()));
        future::ready(()).boxed_local()
    }

    fn success(&self, message: &str) -> Dismissal {
        self.record(Notification::Success(message.to_string()));
        future::ready(()).boxed_local()
    }

    fn confirm_delete(&self) -> LocalBoxFuture<'static, bool> {
        self.record(Notification::ConfirmDelete);
        future::ready(*self.confirm.lock().unwrap()).boxed_local()
    }
}

/// Keeps every published board
#[derive(Default)]
pub struct RecordingBoard {
    boards: Mutex<Vec<Board>>,
}

impl RecordingBoard {
    pub fn history(&self) -> Vec<Board> {
        self.boards.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Board> {
        self.boards.lock().unwrap().last().cloned()
    }
}

impl BoardSink for RecordingBoard {
    fn publish(&self, board: Board) {
        self.boards.lock().unwrap().push(board);
    }
}

/// A client wired to test doubles
pub struct Harness {
    pub client: NotesClient,
    pub api: Arc<MockNotesApi>,
    pub notifier: Arc<RecordingNotifier>,
    pub board: Arc<RecordingBoard>,
}

impl Harness {
    pub fn with_notes(notes: Vec<Note>) -> Self {
        let api = Arc::new(MockNotesApi::with_notes(notes));
        let notifier = Arc::new(RecordingNotifier::new());
        let board = Arc::new(RecordingBoard::default());
        let client = NotesClient::new(api.clone(), notifier.clone(), board.clone());
        Self { client, api, notifier, board }
    }

    pub fn empty() -> Self {
        Self::with_notes(Vec::new())
    }
}
