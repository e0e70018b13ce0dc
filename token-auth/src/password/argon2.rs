use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as PasswordHashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Memory cost in KiB.
pub const MEMORY_COST_KIB: u32 = 19_456;

/// Number of passes over memory.
pub const TIME_COST: u32 = 2;

/// Degree of parallelism.
pub const PARALLELISM: u32 = 1;

// Fixed salt and output for the stand-in hash verified when a stored hash is
// unusable. The output is arbitrary bytes, not the hash of a chosen password.
const DUMMY_SALT: &str = "SlZwq3ksDjvuvlJrYZWrrg";
const DUMMY_OUTPUT: &str = "g42Vyhj/XbpoIOX+11swWnQK0hQlQ8Pw/ZGulgtAz3I";

/// Password hashing implementation.
///
/// Provides cryptographic password hashing (internally uses Argon2id) with a
/// fixed work factor, roughly the cost of bcrypt at 12 rounds.
pub struct PasswordHasher {
    params: Params,
    dummy_hash: String,
}

impl PasswordHasher {
    /// Create a new password hasher instance.
    ///
    /// # Returns
    /// PasswordHasher instance configured with the fixed work factor
    pub fn new() -> Self {
        // Constant parameters, always within argon2's accepted ranges.
        let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, None)
            .unwrap_or_default();

        let dummy_hash = format!(
            "$argon2id$v=19$m={},t={},p={}${}${}",
            MEMORY_COST_KIB, TIME_COST, PARALLELISM, DUMMY_SALT, DUMMY_OUTPUT
        );

        Self { params, dummy_hash }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a plaintext password securely.
    ///
    /// Uses Argon2id with random salt generation.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Parameters are read back from the PHC string, so hashes produced with a
    /// different work factor still verify.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// A stored hash that cannot be used (unparseable, unsupported algorithm)
    /// still costs one full Argon2 run against a stand-in hash, so it fails in
    /// about the same time as a wrong password.
    ///
    /// # Errors
    /// * `VerificationFailed` - Password does not match, or the hash is malformed
    pub fn verify(&self, password: &str, hash: &str) -> Result<(), PasswordError> {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            self.verify_dummy(password);
            return Err(PasswordError::VerificationFailed);
        };

        match self.argon2().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(()),
            Err(PasswordHashError::Password) => Err(PasswordError::VerificationFailed),
            Err(_) => {
                self.verify_dummy(password);
                Err(PasswordError::VerificationFailed)
            }
        }
    }

    /// Spend one Argon2 verification on a stand-in hash and discard the result.
    ///
    /// Lets callers without a stored hash (e.g. an unknown user) take as long
    /// as a real verification.
    pub fn verify_dummy(&self, password: &str) {
        if let Ok(dummy) = PasswordHash::new(&self.dummy_hash) {
            let _ = self.argon2().verify_password(password.as_bytes(), &dummy);
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
