use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The store broke a guarantee it must always uphold (e.g. an insert
    /// that produced no generated key). Never recoverable by retrying.
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),
}
