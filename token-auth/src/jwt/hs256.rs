use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;

use super::claims::Claims;
use super::errors::TokenError;
use super::signer::sign_claims;
use super::signer::verify_claims;
use super::signer::AlgorithmFamily;
use super::signer::TokenSigner;

/// Shared-secret signer: signs and verifies with the same HMAC key.
pub struct Hs256Signer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Hs256Signer {
    /// Create a new signer with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Rotating the secret means building a new signer
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }
}

impl TokenSigner for Hs256Signer {
    fn algorithm(&self) -> Algorithm {
        Algorithm::HS256
    }

    fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        sign_claims(Algorithm::HS256, &self.encoding_key, claims)
    }

    fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        verify_claims(AlgorithmFamily::Hmac, &self.decoding_key, token)
    }
}
