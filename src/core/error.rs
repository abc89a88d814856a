use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum DashError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body could not be decoded as JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The provider returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from the provider was in an unexpected shape or was
    /// missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// An invalid date range was requested (start must not be after end).
    #[error("invalid date range: start must not be after end")]
    InvalidRange,
}
