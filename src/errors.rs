//! Error types for the GET client.
//!
//! There are two kinds of failure: a **transport** failure (anything that goes
//! wrong while talking to the server, including a non-2xx status) and a
//! **decode** failure (the body is not UTF-8 or not valid JSON).

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("An error occurred during the request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("An error occurred during the request: {status} for url ({url})")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to decode or parse JSON from the response: {0}")]
    Decode(#[from] DecodeError),
}

impl FetchError {
    /// True for connection-level failures and non-success status codes.
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_) | FetchError::Status { .. })
    }

    /// True when the body arrived but could not be turned into a JSON document.
    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("body is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
