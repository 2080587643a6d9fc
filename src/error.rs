//! Error types shared across the summarization pipeline.

use thiserror::Error;

/// Errors produced by the fetch/prompt/backend/render pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// Network failure or non-success status while retrieving the target page.
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Required backend configuration is missing.
    #[error("missing configuration: {0}")]
    Config(String),

    /// The summarization backend answered with a non-success status.
    #[error("backend request failed with status {status}: {body}")]
    Backend { status: u16, body: String },

    /// The HTTP transport failed before the backend produced a response.
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    /// The backend answered 2xx but the payload carried no usable summary.
    #[error("malformed backend response: {0}")]
    MalformedResponse(String),

    /// Unrecognized backend choice string.
    #[error("unsupported model choice '{0}', choose from: gpt, llama")]
    UnsupportedModel(String),

    /// A backend was invoked with nothing to send.
    #[error("refusing to send an empty message sequence to the backend")]
    EmptyPrompt,

    /// The target URL has no host to derive the output file name from.
    #[error("URL '{0}' has no host component")]
    MissingHost(String),

    #[error("failed to initialize HTTP client: {0}")]
    HttpClient(String),

    #[error("failed to write summary: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
