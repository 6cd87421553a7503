//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Guest accounts cannot create posts")]
    Forbidden,

    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Insert failed: {0}")]
    Insert(String),
}
