use std::sync::Arc;

use crate::customizer::ClaimsCustomizer;
use crate::jwt::Claims;
use crate::jwt::TokenError;
use crate::jwt::TokenSigner;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::user::AuthUser;
use crate::user::RepositoryError;
use crate::user::UserRepository;

/// Authentication operation errors.
///
/// `InvalidPassword` and `InvalidToken` carry no cause.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password")]
    InvalidPassword,

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Claims customizer rejected login: {0}")]
    CustomizerRejected(#[source] anyhow::Error),

    #[error("Token signing failed: {0}")]
    SigningFailed(String),

    #[error("Invalid token")]
    InvalidToken,
}

impl AuthError {
    /// True for failures an external caller should report as "invalid
    /// credentials" without saying which part was wrong.
    ///
    /// Both cases cost one Argon2 verification: an unknown user is checked
    /// against a stand-in hash. Storage lookup latency can still differ
    /// between hits and misses; that part is up to the repository.
    pub fn is_credential_failure(&self) -> bool {
        matches!(self, AuthError::UserNotFound(_) | AuthError::InvalidPassword)
    }
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::HashingFailed(message) => AuthError::HashingFailed(message),
            PasswordError::VerificationFailed => AuthError::InvalidPassword,
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidKey(message) | TokenError::SigningFailed(message) => {
                AuthError::SigningFailed(message)
            }
            TokenError::InvalidToken => AuthError::InvalidToken,
        }
    }
}

/// Authentication coordinator combining user storage, password verification
/// and token signing.
///
/// Collaborators are injected once at construction and never mutated, so a
/// single instance can be shared across threads behind an `Arc`.
pub struct AuthService<R, S>
where
    R: UserRepository,
    S: TokenSigner,
{
    repository: Arc<R>,
    signer: Arc<S>,
    password_hasher: PasswordHasher,
    claims_customizer: Option<Arc<dyn ClaimsCustomizer>>,
}

impl<R, S> AuthService<R, S>
where
    R: UserRepository,
    S: TokenSigner,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User storage implementation
    /// * `signer` - Token signing implementation
    ///
    /// # Returns
    /// Auth service without a claims customizer
    pub fn new(repository: Arc<R>, signer: Arc<S>) -> Self {
        Self {
            repository,
            signer,
            password_hasher: PasswordHasher::new(),
            claims_customizer: None,
        }
    }

    /// Install a closure that enriches login claims before signing.
    pub fn with_claims_customizer<F>(self, customizer: F) -> Self
    where
        F: Fn(&dyn AuthUser, &mut Claims) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.with_customizer(Arc::new(customizer))
    }

    /// Install a shared [`ClaimsCustomizer`] implementation.
    pub fn with_customizer(mut self, customizer: Arc<dyn ClaimsCustomizer>) -> Self {
        self.claims_customizer = Some(customizer);
        self
    }

    /// Register a new user.
    ///
    /// # Arguments
    /// * `username` - Login name
    /// * `password` - Plaintext password, hashed before it reaches storage
    ///
    /// # Returns
    /// User created by the repository
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing failed; storage was not touched
    /// * `Repository` - Storage rejected the user (e.g. `UsernameTaken`)
    pub fn signup(&self, username: &str, password: &str) -> Result<R::User, AuthError> {
        let password_hash = self.password_hasher.hash(password).map_err(|e| {
            tracing::error!(username = %username, error = %e, "Password hashing failed");
            AuthError::from(e)
        })?;

        let user = self
            .repository
            .create_user(username, &password_hash)
            .map_err(|e| {
                tracing::warn!(username = %username, error = %e, "Signup rejected by repository");
                e
            })?;

        tracing::info!(user_id = %user.id(), username = %user.username(), "User signed up");

        Ok(user)
    }

    /// Verify credentials and issue a token.
    ///
    /// # Arguments
    /// * `username` - Login name
    /// * `password` - Plaintext password to verify
    ///
    /// # Returns
    /// Signed token carrying `sub`, `username`, `exp` and any customizer claims
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this username
    /// * `Repository` - Lookup failed
    /// * `InvalidPassword` - Password does not match (or stored hash unreadable)
    /// * `CustomizerRejected` - The claims customizer aborted the login
    /// * `SigningFailed` - Token generation failed
    pub fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let user = self
            .repository
            .find_by_username(username)?
            .ok_or_else(|| {
                self.password_hasher.verify_dummy(password);
                tracing::warn!(username = %username, "Login rejected: unknown user");
                AuthError::UserNotFound(username.to_string())
            })?;

        if self
            .password_hasher
            .verify(password, user.password_hash())
            .is_err()
        {
            tracing::warn!(username = %username, "Login rejected: invalid password");
            return Err(AuthError::InvalidPassword);
        }

        let mut claims = Claims::for_user(user.id(), user.username());

        if let Some(customizer) = &self.claims_customizer {
            customizer.customize(&user, &mut claims).map_err(|e| {
                tracing::warn!(username = %username, error = %e, "Claims customizer rejected login");
                AuthError::CustomizerRejected(e)
            })?;
        }

        let token = self.signer.sign(&claims)?;

        tracing::info!(
            user_id = %user.id(),
            username = %username,
            algorithm = ?self.signer.algorithm(),
            "Token issued"
        );

        Ok(token)
    }

    /// Validate a token and return its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature, algorithm, expiry or structure check failed
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        Ok(self.signer.verify(token)?)
    }
}
