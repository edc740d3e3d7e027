use thiserror::Error;

/// Failure of a single generation round-trip
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("API key is not configured; set GEMINI_API_KEY")]
    MissingApiKey,

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx answer; `message` is the service's own explanation
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("malformed response from generation service: {0}")]
    Decode(String),
}
