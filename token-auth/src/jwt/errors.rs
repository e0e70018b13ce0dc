use thiserror::Error;

/// Error type for token signing and verification.
///
/// `InvalidToken` is the only error `verify` ever returns, whatever the cause.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid signing key: {0}")]
    InvalidKey(String),

    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Invalid token")]
    InvalidToken,
}
