#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Once;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use token_auth::AuthService;
use token_auth::Hs256Signer;
use token_auth::InMemoryUserRepository;
use token_auth::Rs256Signer;
use token_auth::TokenSigner;

pub const PRIVATE_KEY: &[u8] = include_bytes!("../fixtures/rsa_private.pem");
pub const PUBLIC_KEY: &[u8] = include_bytes!("../fixtures/rsa_public.pem");
pub const OTHER_PRIVATE_KEY: &[u8] = include_bytes!("../fixtures/rsa_other_private.pem");
pub const OTHER_PUBLIC_KEY: &[u8] = include_bytes!("../fixtures/rsa_other_public.pem");

pub const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

static TRACING: Once = Once::new();

/// Install a test subscriber once; filter with RUST_LOG.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "token_auth=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

pub fn rs256_signer() -> Rs256Signer {
    Rs256Signer::from_pem(PRIVATE_KEY, PUBLIC_KEY).expect("Failed to load RSA keys")
}

pub fn hs256_signer() -> Hs256Signer {
    Hs256Signer::new(SECRET)
}

/// Auth service over a fresh in-memory repository.
pub fn service_with<S: TokenSigner>(signer: S) -> AuthService<InMemoryUserRepository, S> {
    init_tracing();
    AuthService::new(Arc::new(InMemoryUserRepository::new()), Arc::new(signer))
}

/// Flip one bit of the decoded signature and re-encode the token.
pub fn flip_signature_bit(token: &str, byte_index: usize, bit: u8) -> String {
    let (signed, signature) = token.rsplit_once('.').expect("Token has no signature");
    let mut bytes = URL_SAFE_NO_PAD
        .decode(signature)
        .expect("Signature is not base64url");
    bytes[byte_index] ^= 1 << bit;
    format!("{}.{}", signed, URL_SAFE_NO_PAD.encode(bytes))
}

/// Decoded signature length in bytes.
pub fn signature_len(token: &str) -> usize {
    let (_, signature) = token.rsplit_once('.').expect("Token has no signature");
    URL_SAFE_NO_PAD
        .decode(signature)
        .expect("Signature is not base64url")
        .len()
}
