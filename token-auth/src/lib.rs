//! Token authentication core
//!
//! Issues and verifies signed bearer tokens for users held in host-supplied
//! storage:
//! - Password hashing (Argon2id)
//! - JWT signing and verification, RS256 or HS256, with algorithm-family pinning
//! - Login orchestration with an optional claims customizer
//!
//! The host implements [`AuthUser`] and [`UserRepository`] and picks a
//! [`TokenSigner`]; [`AuthService`] does the rest.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use token_auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).is_ok());
//! ```
//!
//! ## JWT Tokens
//! ```
//! use token_auth::{Claims, Hs256Signer, TokenSigner};
//!
//! let signer = Hs256Signer::new(b"secret_key_at_least_32_bytes_long!");
//! let token = signer.sign(&Claims::for_user("user123", "alice")).unwrap();
//! let claims = signer.verify(&token).unwrap();
//! assert_eq!(claims.subject(), Some("user123"));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use std::sync::Arc;
//!
//! use token_auth::{AuthService, AuthUser, Claims, Hs256Signer, InMemoryUserRepository};
//!
//! let service = AuthService::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     Arc::new(Hs256Signer::new(b"secret_key_at_least_32_bytes_long!")),
//! )
//! .with_claims_customizer(|_user: &dyn AuthUser, claims: &mut Claims| {
//!     claims.insert("role", "member");
//!     Ok(())
//! });
//!
//! // Register: hash password and store the user
//! let user = service.signup("alice", "password123").unwrap();
//!
//! // Login: verify password and issue a token
//! let token = service.login("alice", "password123").unwrap();
//!
//! // Validate token
//! let claims = service.verify_token(&token).unwrap();
//! assert_eq!(claims.subject(), Some(user.id().as_str()));
//! ```

pub mod config;
pub mod customizer;
pub mod jwt;
pub mod password;
pub mod service;
pub mod user;

// Re-export commonly used items
pub use customizer::ClaimsCustomizer;
pub use jwt::AlgorithmFamily;
pub use jwt::Claims;
pub use jwt::Hs256Signer;
pub use jwt::Rs256Signer;
pub use jwt::Signer;
pub use jwt::TokenError;
pub use jwt::TokenSigner;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use service::AuthError;
pub use service::AuthService;
pub use user::AuthUser;
pub use user::InMemoryUserRepository;
pub use user::MemoryUser;
pub use user::RepositoryError;
pub use user::UserRepository;
