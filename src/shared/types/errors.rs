use thiserror::Error;

/// Failures surfaced by the storage layer.
///
/// Absence is never an error here: lookups return `Option` and deletes
/// return `bool`.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
