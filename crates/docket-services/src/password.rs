//! Argon2 implementation of the password hash seam

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordVerifier, SaltString};
use argon2::password_hash::PasswordHasher as _;
use argon2::Argon2;
use docket_domain::traits::PasswordHasher;
use docket_domain::HashError;

/// Argon2id hasher producing salted PHC-format strings
///
/// The salt travels inside the stored string, so verification needs nothing
/// but the hash itself. Verification is failure-closed: a malformed stored
/// hash verifies as `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl PasswordHasher for Argon2Hasher {
    fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| HashError(e.to_string()))
    }

    fn verify_password(&self, password: &str, stored: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verifies_and_embeds_salt() {
        let hasher = Argon2Hasher;
        let hash = hasher.hash_password("correct horse").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(hasher.verify_password("correct horse", &hash));
        assert!(!hasher.verify_password("wrong horse", &hash));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let hasher = Argon2Hasher;
        let a = hasher.hash_password("secret").unwrap();
        let b = hasher.hash_password("secret").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_stored_hash_fails_closed() {
        let hasher = Argon2Hasher;
        assert!(!hasher.verify_password("anything", "not-a-phc-string"));
        assert!(!hasher.verify_password("anything", ""));
    }
}
