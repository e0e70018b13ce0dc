use super::errors::RepositoryError;

/// Minimal view of a user the authentication core reads.
///
/// Implemented by the host's user model. The core never constructs or
/// mutates users, it only reads these accessors.
pub trait AuthUser {
    /// Stable identity, written into the `sub` claim.
    fn id(&self) -> String;

    /// Login name, written into the `username` claim.
    fn username(&self) -> &str;

    /// PHC-format password hash produced by the password hasher.
    fn password_hash(&self) -> &str;
}

/// User storage the authentication core depends on.
pub trait UserRepository: Send + Sync + 'static {
    type User: AuthUser;

    /// Retrieve user by username.
    ///
    /// # Arguments
    /// * `username` - Username to search for
    ///
    /// # Returns
    /// Optional user (None if not found)
    ///
    /// # Errors
    /// * `Storage` - Storage operation failed
    fn find_by_username(&self, username: &str) -> Result<Option<Self::User>, RepositoryError>;

    /// Persist a new user.
    ///
    /// # Arguments
    /// * `username` - Login name
    /// * `password_hash` - Hash already computed by the password hasher
    ///
    /// # Returns
    /// Created user
    ///
    /// # Errors
    /// * `UsernameTaken` - Username is already taken
    /// * `Storage` - Storage operation failed
    fn create_user(&self, username: &str, password_hash: &str)
        -> Result<Self::User, RepositoryError>;
}
