use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;

use super::claims::Claims;
use super::errors::TokenError;
use super::signer::sign_claims;
use super::signer::verify_claims;
use super::signer::AlgorithmFamily;
use super::signer::TokenSigner;

/// Asymmetric-key signer: signs with an RSA private key, verifies with the
/// matching public key.
pub struct Rs256Signer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Rs256Signer {
    /// Create a signer from PEM-encoded RSA keys.
    ///
    /// # Arguments
    /// * `private_key_pem` - PKCS#1 or PKCS#8 private key
    /// * `public_key_pem` - PKCS#1 or SPKI public key
    ///
    /// # Errors
    /// * `InvalidKey` - Either key could not be parsed
    pub fn from_pem(private_key_pem: &[u8], public_key_pem: &[u8]) -> Result<Self, TokenError> {
        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem)
            .map_err(|e| TokenError::InvalidKey(format!("RSA private key: {}", e)))?;
        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem)
            .map_err(|e| TokenError::InvalidKey(format!("RSA public key: {}", e)))?;

        Ok(Self {
            encoding_key,
            decoding_key,
        })
    }
}

impl TokenSigner for Rs256Signer {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RS256
    }

    fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        sign_claims(Algorithm::RS256, &self.encoding_key, claims)
    }

    fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        verify_claims(AlgorithmFamily::Rsa, &self.decoding_key, token)
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::decode_header;

    use super::*;

    const PRIVATE_KEY: &[u8] = include_bytes!("../../tests/fixtures/rsa_private.pem");
    const PUBLIC_KEY: &[u8] = include_bytes!("../../tests/fixtures/rsa_public.pem");
    const OTHER_PUBLIC_KEY: &[u8] = include_bytes!("../../tests/fixtures/rsa_other_public.pem");

    fn signer() -> Rs256Signer {
        Rs256Signer::from_pem(PRIVATE_KEY, PUBLIC_KEY).expect("Failed to load RSA keys")
    }

    #[test]
    fn test_sign_and_verify() {
        let signer = signer();
        let claims = Claims::for_user("user123", "alice").with_extra("role", "admin");

        let token = signer.sign(&claims).expect("Failed to sign token");
        assert_eq!(token.split('.').count(), 3);
        assert_eq!(decode_header(&token).unwrap().alg, Algorithm::RS256);

        let decoded = signer.verify(&token).expect("Failed to verify token");
        assert_eq!(decoded.subject(), Some("user123"));
        assert_eq!(decoded.username(), Some("alice"));
        assert_eq!(decoded.get("role").and_then(|v| v.as_str()), Some("admin"));
        assert!(decoded.expiration().is_some());
    }

    #[test]
    fn test_verify_with_wrong_public_key() {
        let token = signer()
            .sign(&Claims::for_user("user123", "alice"))
            .expect("Failed to sign token");

        let other = Rs256Signer::from_pem(PRIVATE_KEY, OTHER_PUBLIC_KEY)
            .expect("Failed to load RSA keys");

        assert_eq!(other.verify(&token), Err(TokenError::InvalidToken));
    }

    #[test]
    fn test_from_pem_rejects_garbage() {
        let result = Rs256Signer::from_pem(b"not a key", PUBLIC_KEY);
        assert!(matches!(result, Err(TokenError::InvalidKey(_))));

        let result = Rs256Signer::from_pem(PRIVATE_KEY, b"not a key");
        assert!(matches!(result, Err(TokenError::InvalidKey(_))));
    }
}
