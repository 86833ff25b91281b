/// Errors returned by the LEAP API client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A credential was missing or empty. Raised before any I/O.
    #[error("missing credentials: an API key, client ID, and password are required")]
    Authentication,

    /// A required parameter was absent or the request data was malformed.
    #[error("invalid request: {0}")]
    Validation(String),

    /// Network failure, timeout, or non-success HTTP status. Not retried.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request envelope could not be serialized.
    #[error("failed to encode request envelope: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
