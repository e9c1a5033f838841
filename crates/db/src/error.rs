use chronicle_core::error::CoreError;

/// Error type for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A domain-level error from `chronicle_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx, including foreign key violations.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
