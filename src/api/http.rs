//! HTTP implementation of `NotesApi` over `fetch` (gloo-net).

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use super::{ApiError, NotesApi};
use crate::config::ApiConfig;
use crate::models::{Envelope, NewNote, Note};

const CONTENT_TYPE: &str = "Content-Type";
const APPLICATION_JSON: &str = "application/json";

/// Characters escaped in a note id path segment
const ID_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Debug, Clone)]
pub struct HttpNotesApi {
    config: ApiConfig,
}

impl HttpNotesApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn note_url(&self, id: &str, action: Option<&str>) -> String {
        note_url(&self.config, id, action)
    }
}

fn note_url(config: &ApiConfig, id: &str, action: Option<&str>) -> String {
    let id = utf8_percent_encode(id, ID_SEGMENT);
    match action {
        Some(action) => config.url(&format!("/notes/{id}/{action}")),
        None => config.url(&format!("/notes/{id}")),
    }
}

/// Send a request, turning non-success statuses into `ApiError::Status`
async fn dispatch(request: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
    let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if response.ok() {
        return Ok(response);
    }
    let message = match response.text().await {
        Ok(body) => error_message(&body),
        Err(_) => None,
    };
    Err(ApiError::Status { code: response.status(), message })
}

/// Pull `message` out of an error body, tolerating non-JSON bodies
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Envelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .filter(|message| !message.is_empty())
}

async fn read_data<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let envelope: Envelope<T> = response.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("response has no data field".to_string()))
}

#[async_trait(?Send)]
impl NotesApi for HttpNotesApi {
    async fn list_active(&self) -> Result<Vec<Note>, ApiError> {
        let request = Request::get(&self.config.url("/notes"))
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .build();
        read_data(dispatch(request).await?).await
    }

    async fn list_archived(&self) -> Result<Vec<Note>, ApiError> {
        let request = Request::get(&self.config.url("/notes/archived"))
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .build();
        read_data(dispatch(request).await?).await
    }

    async fn create(&self, note: &NewNote) -> Result<Note, ApiError> {
        let request = Request::post(&self.config.url("/notes"))
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .json(note);
        read_data(dispatch(request).await?).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let request = Request::delete(&self.note_url(id, None))
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .build();
        dispatch(request).await.map(|_| ())
    }

    async fn archive(&self, id: &str) -> Result<(), ApiError> {
        let request = Request::post(&self.note_url(id, Some("archive")))
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .build();
        dispatch(request).await.map(|_| ())
    }

    async fn unarchive(&self, id: &str) -> Result<(), ApiError> {
        let request = Request::post(&self.note_url(id, Some("unarchive")))
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .build();
        dispatch(request).await.map(|_| ())
    }
}
