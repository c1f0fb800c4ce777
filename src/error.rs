use reqwest::StatusCode;
use thiserror::Error;

/// Possible error types while talking to Plutora.
#[derive(Debug, Error)]
pub enum PlutoraError {
    /// The OAuth2 token endpoint rejected our credentials.
    #[error("authentication failed ({status}): {body}")]
    AuthenticationFailed { status: StatusCode, body: String },

    /// A resource endpoint answered with a non-success status.
    #[error("request failed ({status}): {body}")]
    HttpRequestFailed { status: StatusCode, body: String },

    /// A name, field or path could not be resolved.
    #[error("not found: {0}")]
    LookupNotFound(String),

    /// The response was valid JSON, but not in the shape we expected.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("unable to read configuration: {0}")]
    ConfigRead(#[source] std::io::Error),

    #[error("unable to prompt for credentials: {0}")]
    Prompt(#[source] std::io::Error),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}
