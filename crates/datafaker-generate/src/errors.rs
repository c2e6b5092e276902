use thiserror::Error;

/// Errors emitted by producers, generators, sinks and stores.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("unsupported: {0}")]
    Unsupported(String),
    #[error(transparent)]
    Catalog(#[from] datafaker_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
