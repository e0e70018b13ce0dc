use std::collections::HashMap;
use std::sync::RwLock;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use super::errors::RepositoryError;
use super::ports::AuthUser;
use super::ports::UserRepository;

/// User record kept by [`InMemoryUserRepository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryUser {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl AuthUser for MemoryUser {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

/// Process-local user store keyed by username.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, MemoryUser>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users, still readable after a writer panicked.
    pub fn len(&self) -> usize {
        self.users
            .read()
            .map(|users| users.len())
            .unwrap_or_else(|poisoned| poisoned.into_inner().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> RepositoryError {
    RepositoryError::Storage("user store lock poisoned".to_string())
}

impl UserRepository for InMemoryUserRepository {
    type User = MemoryUser;

    fn find_by_username(&self, username: &str) -> Result<Option<MemoryUser>, RepositoryError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(username).cloned())
    }

    fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<MemoryUser, RepositoryError> {
        let mut users = self.users.write().map_err(poisoned)?;

        if users.contains_key(username) {
            return Err(RepositoryError::UsernameTaken(username.to_string()));
        }

        let user = MemoryUser {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.insert(username.to_string(), user.clone());

        tracing::debug!(user_id = %user.id, username = %user.username, "User stored");

        Ok(user)
    }
}
