use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("document not found: {0}")]
    DocumentNotFound(String),

    #[error("session is not authenticated")]
    Unauthenticated,

    #[error("unknown status filter: {0}")]
    InvalidStatus(String),

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}
