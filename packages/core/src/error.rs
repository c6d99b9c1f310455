use thiserror::Error;

/// Fatal startup error.
///
/// Raised before the poll loop starts. Once polling, failures are
/// `StoreError`/`NotifyError` values that are logged per cycle.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
}

/// Errors from a single store-locator fetch.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Decode error: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    #[error("Store API returned error code {code}")]
    Api { code: i64 },
}

/// Errors from push-notification delivery.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Notification transport error: {message}")]
    Transport { message: String },

    #[error("Notification rejected (code {code}): {message}")]
    Rejected { code: i64, message: String },

    #[error("Notification key must not be blank")]
    InvalidKey,
}

impl StoreError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { message: message.into() }
    }
}

impl NotifyError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { message: message.into() }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err.to_string())
    }
}

impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err.to_string())
    }
}
