use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("resource not found")]
    NotFound,

    #[error("store operation failed: {0}")]
    StoreUnavailable(String),

    #[error("object storage error: {0}")]
    ObjectStorageError(String),

    #[error("internal server error")]
    InternalServerError,
}
