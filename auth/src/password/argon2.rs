use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Fixed suffix appended to every credential before hashing.
///
/// Not a per-user secret and not a hardening measure: it normalizes very
/// short inputs. The hashing and verifying paths must use the identical
/// byte string, so it lives here as a single constant.
const PEPPER: &str = "hashing";

/// Credential hashing implementation.
///
/// Wraps Argon2id with per-call salt generation and the fixed pepper
/// suffix applied on both the hashing and verifying paths.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext credential for storage.
    ///
    /// The salt is regenerated on every call, so hashing the same input
    /// twice yields two different digests that both verify against it.
    ///
    /// # Arguments
    /// * `password` - Plaintext credential to hash
    ///
    /// # Returns
    /// PHC string format digest (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingUnavailable` - The hash primitive failed to produce a digest
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let peppered = format!("{}{}", password, PEPPER);
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(peppered.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|e| PasswordError::HashingUnavailable(e.to_string()))
    }

    /// Verify a plaintext credential against a stored digest.
    ///
    /// Returns `false` both for a mismatch and for a digest that does not
    /// parse as a PHC string; a negative verification is a result the
    /// caller turns into an auth rejection, not a failure.
    ///
    /// # Arguments
    /// * `password` - Plaintext credential to verify
    /// * `digest` - Stored digest in PHC string format
    pub fn verify(&self, password: &str, digest: &str) -> bool {
        let parsed = match PasswordHash::new(digest) {
            Ok(parsed) => parsed,
            Err(_) => return false,
        };

        let peppered = format!("{}{}", password, PEPPER);
        Argon2::default()
            .verify_password(peppered.as_bytes(), &parsed)
            .is_ok()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let digest = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher.verify(password, &digest));
        assert!(!hasher.verify("wrong_password", &digest));
    }

    #[test]
    fn test_hash_is_salted_per_call() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let first = hasher.hash(password).expect("Failed to hash password");
        let second = hasher.hash(password).expect("Failed to hash password");

        assert_ne!(first, second);
        assert!(hasher.verify(password, &first));
        assert!(hasher.verify(password, &second));
    }

    #[test]
    fn test_verify_malformed_digest_is_false() {
        let hasher = PasswordHasher::new();

        assert!(!hasher.verify("password", "not_a_phc_string"));
        assert!(!hasher.verify("password", ""));
    }

    #[test]
    fn test_verify_digest_of_other_password() {
        let hasher = PasswordHasher::new();

        let digest = hasher.hash("first").expect("Failed to hash password");
        assert!(!hasher.verify("second", &digest));
    }
}
