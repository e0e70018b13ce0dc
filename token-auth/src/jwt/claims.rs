use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Subject claim key.
pub const SUBJECT: &str = "sub";

/// Login name claim key.
pub const USERNAME: &str = "username";

/// Expiration claim key (Unix timestamp).
pub const EXPIRATION: &str = "exp";

/// Dynamic JWT claim set.
///
/// A string-keyed bag of JSON values, serialized flat into the token payload.
/// Numbers may come back from a verified token in a different JSON number
/// representation than they were signed with (e.g. `7.0` as `7`), so callers
/// should read identities through [`Claims::subject`], which is always a string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Claims(HashMap<String, Value>);

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the mandatory claims for an authenticated user.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier (stored in `sub`)
    /// * `username` - Login name (stored in `username`)
    ///
    /// # Returns
    /// Claims with `sub` and `username` set
    pub fn for_user(user_id: impl ToString, username: impl ToString) -> Self {
        Self::new()
            .with_subject(user_id)
            .with_extra(USERNAME, username.to_string())
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.0
            .insert(SUBJECT.to_string(), Value::String(sub.to_string()));
        self
    }

    /// Add a custom field.
    ///
    /// Values that fail to serialize are skipped.
    pub fn with_extra(mut self, key: impl ToString, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.0.insert(key.to_string(), json_value);
        }
        self
    }

    /// Insert or overwrite a claim, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove a claim, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Subject (user identity), if present as a string.
    pub fn subject(&self) -> Option<&str> {
        self.0.get(SUBJECT).and_then(Value::as_str)
    }

    /// Login name, if present as a string.
    pub fn username(&self) -> Option<&str> {
        self.0.get(USERNAME).and_then(Value::as_str)
    }

    /// Expiration as a Unix timestamp.
    ///
    /// Accepts integral floats, since some encoders emit `exp` as a float.
    pub fn expiration(&self) -> Option<i64> {
        let exp = self.0.get(EXPIRATION)?;
        exp.as_i64().or_else(|| exp.as_f64().map(|f| f as i64))
    }

    /// Set expiration (Unix timestamp).
    pub fn set_expiration(&mut self, exp: i64) {
        self.0.insert(EXPIRATION.to_string(), Value::from(exp));
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.expiration()
            .map_or(false, |exp| exp < current_timestamp)
    }

    pub fn into_inner(self) -> HashMap<String, Value> {
        self.0
    }
}

impl From<HashMap<String, Value>> for Claims {
    fn from(map: HashMap<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new().with_subject("user123");
        assert_eq!(claims.subject(), Some("user123"));
        assert!(claims.expiration().is_none());
    }

    #[test]
    fn test_for_user() {
        let claims = Claims::for_user(42, "alice");

        assert_eq!(claims.subject(), Some("42"));
        assert_eq!(claims.username(), Some("alice"));
        assert_eq!(claims.len(), 2);
    }

    #[test]
    fn test_builder_pattern() {
        let claims = Claims::new()
            .with_subject("user123")
            .with_extra("role", "admin")
            .with_extra("scopes", vec!["read", "write"]);

        assert_eq!(claims.subject(), Some("user123"));
        assert_eq!(claims.get("role"), Some(&json!("admin")));
        assert_eq!(claims.get("scopes"), Some(&json!(["read", "write"])));
    }

    #[test]
    fn test_insert_overwrites() {
        let mut claims = Claims::for_user("user123", "alice");

        let previous = claims.insert("username", "bob");

        assert_eq!(previous, Some(json!("alice")));
        assert_eq!(claims.username(), Some("bob"));
    }

    #[test]
    fn test_serializes_flat() {
        let mut claims = Claims::for_user("user123", "alice");
        claims.set_expiration(1000);

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(
            value,
            json!({"sub": "user123", "username": "alice", "exp": 1000})
        );

        let decoded: Claims = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_expiration_from_float() {
        let claims: Claims = serde_json::from_value(json!({"exp": 1700000000.0})).unwrap();
        assert_eq!(claims.expiration(), Some(1_700_000_000));
    }

    #[test]
    fn test_is_expired() {
        let mut claims = Claims::new();
        claims.set_expiration(1000);

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_is_expired_no_exp_claim() {
        let claims = Claims::new();
        assert!(!claims.is_expired(9999999999));
    }

    #[test]
    fn test_non_string_subject() {
        let claims: Claims = serde_json::from_value(json!({"sub": 7})).unwrap();
        assert_eq!(claims.subject(), None);
        assert!(claims.contains_key("sub"));
    }
}
