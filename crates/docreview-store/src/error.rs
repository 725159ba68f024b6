use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("dataset file not found: {0}")]
    DatasetNotFound(std::path::PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("attributes listed for unknown document: {0}")]
    OrphanAttributes(String),

    #[error("duplicate document id: {0}")]
    DuplicateDocument(String),
}
