use thiserror::Error;

/// Failure of a single call to the notes service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-success HTTP status, with the body's `message` when it had one
    #[error("server responded with status {code}")]
    Status { code: u16, message: Option<String> },

    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// A success response whose body could not be read
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the service, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
