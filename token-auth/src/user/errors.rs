use thiserror::Error;

/// Error reported by a [`UserRepository`](super::ports::UserRepository).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Username already exists: {0}")]
    UsernameTaken(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
