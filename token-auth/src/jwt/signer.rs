use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::decode_header;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;
use super::hs256::Hs256Signer;
use super::rs256::Rs256Signer;

/// Lifetime of every issued token.
pub const TOKEN_TTL_HOURS: i64 = 72;

/// Signs claim sets into compact JWTs and verifies them back.
///
/// Implementations must only accept tokens whose header algorithm belongs to
/// their own [`AlgorithmFamily`]; [`sign_claims`] and [`verify_claims`] do
/// the shared work.
pub trait TokenSigner: Send + Sync + 'static {
    /// Algorithm written into the header of issued tokens.
    fn algorithm(&self) -> Algorithm;

    /// Sign a claim set.
    ///
    /// The caller's claims are copied and `exp` is set to now + 72 hours,
    /// replacing any `exp` the caller supplied.
    ///
    /// # Errors
    /// * `SigningFailed` - The signing primitive failed (e.g. unusable key)
    fn sign(&self, claims: &Claims) -> Result<String, TokenError>;

    /// Verify a token and return its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - Wrong algorithm family, bad signature, expired, or malformed
    fn verify(&self, token: &str) -> Result<Claims, TokenError>;
}

/// Class of signing schemes a verifier accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmFamily {
    /// RSASSA-PKCS1-v1_5 (`RS256`, `RS384`, `RS512`)
    Rsa,
    /// HMAC (`HS256`, `HS384`, `HS512`)
    Hmac,
}

impl AlgorithmFamily {
    pub fn algorithms(self) -> &'static [Algorithm] {
        match self {
            AlgorithmFamily::Rsa => &[Algorithm::RS256, Algorithm::RS384, Algorithm::RS512],
            AlgorithmFamily::Hmac => &[Algorithm::HS256, Algorithm::HS384, Algorithm::HS512],
        }
    }

    pub fn contains(self, algorithm: Algorithm) -> bool {
        self.algorithms().contains(&algorithm)
    }
}

/// Stamp the expiration on a copy of `claims` and sign it.
pub(crate) fn sign_claims(
    algorithm: Algorithm,
    key: &EncodingKey,
    claims: &Claims,
) -> Result<String, TokenError> {
    let mut claims = claims.clone();
    let expiration = Utc::now() + Duration::hours(TOKEN_TTL_HOURS);
    claims.set_expiration(expiration.timestamp());

    encode(&Header::new(algorithm), &claims, key).map_err(|e| {
        tracing::error!(algorithm = ?algorithm, error = %e, "Token signing failed");
        TokenError::SigningFailed(e.to_string())
    })
}

/// Verify `token` against `key`, accepting only algorithms of `family`.
///
/// The header algorithm is checked before the key is used, so a token can
/// never make the verifier treat key material as belonging to another family
/// (e.g. an RSA public key used as an HMAC secret).
pub(crate) fn verify_claims(
    family: AlgorithmFamily,
    key: &DecodingKey,
    token: &str,
) -> Result<Claims, TokenError> {
    let header = decode_header(token).map_err(|e| {
        tracing::debug!(error = %e, "Rejected token with unreadable header");
        TokenError::InvalidToken
    })?;

    if !family.contains(header.alg) {
        tracing::debug!(
            algorithm = ?header.alg,
            expected = ?family,
            "Rejected token with unexpected signing method"
        );
        return Err(TokenError::InvalidToken);
    }

    let mut validation = Validation::new(header.alg);
    validation.algorithms = family.algorithms().to_vec();
    validation.leeway = 0;
    validation.validate_exp = true;
    validation.validate_aud = false;

    decode::<Claims>(token, key, &validation)
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!(error = %e, "Rejected token");
            TokenError::InvalidToken
        })
}

/// Signer selected at runtime, typically from configuration.
pub enum Signer {
    Rs256(Rs256Signer),
    Hs256(Hs256Signer),
}

impl TokenSigner for Signer {
    fn algorithm(&self) -> Algorithm {
        match self {
            Signer::Rs256(signer) => signer.algorithm(),
            Signer::Hs256(signer) => signer.algorithm(),
        }
    }

    fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        match self {
            Signer::Rs256(signer) => signer.sign(claims),
            Signer::Hs256(signer) => signer.sign(claims),
        }
    }

    fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        match self {
            Signer::Rs256(signer) => signer.verify(token),
            Signer::Hs256(signer) => signer.verify(token),
        }
    }
}

impl From<Rs256Signer> for Signer {
    fn from(signer: Rs256Signer) -> Self {
        Signer::Rs256(signer)
    }
}

impl From<Hs256Signer> for Signer {
    fn from(signer: Hs256Signer) -> Self {
        Signer::Hs256(signer)
    }
}
