use thiserror::Error;

/// Error type for password operations.
///
/// `VerificationFailed` covers both a wrong password and an unreadable stored
/// hash. It carries no detail so callers cannot tell the two apart.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed")]
    VerificationFailed,
}
