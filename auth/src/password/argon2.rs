use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as HashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as _;
use argon2::password_hash::PasswordVerifier as _;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Argon2id password hasher.
///
/// Hashes are PHC strings, so algorithm, parameters and salt travel with
/// the stored value and verification needs nothing but the string.
#[derive(Clone, Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Errors
    /// * `HashingFailed` - Argon2 rejected the input or parameters
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Check a plaintext password against a stored PHC hash.
    ///
    /// A well-formed hash that does not match yields `Ok(false)`.
    ///
    /// # Errors
    /// * `MalformedHash` - Stored value is not a PHC string
    /// * `VerificationFailed` - Argon2 failed for a reason other than mismatch
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed =
            PasswordHash::new(hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_phc_argon2id() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("any_value").expect("Failed to hash password");

        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_hash_uses_fresh_salt() {
        let hasher = PasswordHasher::new();
        let first = hasher.hash("any_value").expect("Failed to hash password");
        let second = hasher.hash("any_value").expect("Failed to hash password");

        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_matching_password() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("any_value").expect("Failed to hash password");

        assert!(hasher
            .verify("any_value", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_verify_wrong_password() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("any_value").expect("Failed to hash password");

        assert!(!hasher
            .verify("invalid_value", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_verify_malformed_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("any_value", "any_hash");

        assert!(matches!(result, Err(PasswordError::MalformedHash(_))));
    }
}
