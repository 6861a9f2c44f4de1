use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToaglossError {
    /// Toadua API interaction failure beyond the transport itself.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Propagated HTTP transport error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Propagated JSON parse or serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Propagated TSV writer error.
    #[error("tsv error: {0}")]
    Tsv(#[from] csv::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Catch all for unexpected internal problems.
    #[error("internal error: {0}")]
    Internal(String),
}
