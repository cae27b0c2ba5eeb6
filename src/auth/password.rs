//! Secret hashing and verification.
//!
//! Credential rows are provisioned out-of-band and historically stored their
//! secrets in plaintext. Newly provisioned rows carry Argon2id PHC strings
//! instead; [`verify_secret`] accepts both so the legacy rows keep working
//! while the data is migrated. A row with no stored secret always rejects.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::errors::Error;

/// Prefix shared by every Argon2 PHC string ($argon2id$, $argon2i$, ...)
const PHC_PREFIX: &str = "$argon2";

/// Hash a secret using Argon2id with default parameters. Used by
/// provisioning tooling when rotating legacy plaintext rows.
pub fn hash_secret(input: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(input.as_bytes(), &salt).map_err(|e| Error::Other(anyhow::anyhow!("hash secret: {e}")))?;
    Ok(hash.to_string())
}

/// Verify a provided secret against the stored one.
///
/// - `None` stored secret rejects unconditionally.
/// - PHC-formatted stored secrets verify with the parameters embedded in the
///   hash.
/// - Anything else is a legacy plaintext row and compares by equality.
pub fn verify_secret(provided: &str, stored: Option<&str>) -> bool {
    match stored {
        None => false,
        Some(hash) if hash.starts_with(PHC_PREFIX) => match PasswordHash::new(hash) {
            Ok(parsed) => Argon2::default().verify_password(provided.as_bytes(), &parsed).is_ok(),
            Err(_) => false,
        },
        Some(plain) => plain == provided,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_secret_verifies() {
        let hash = hash_secret("secreto123").unwrap();
        assert!(hash.starts_with(PHC_PREFIX));
        assert!(verify_secret("secreto123", Some(&hash)));
        assert!(!verify_secret("otro", Some(&hash)));
    }

    #[test]
    fn legacy_plaintext_compares_by_equality() {
        assert!(verify_secret("abc123", Some("abc123")));
        assert!(!verify_secret("abc123", Some("abc124")));
    }

    #[test]
    fn missing_secret_always_rejects() {
        assert!(!verify_secret("anything", None));
        assert!(!verify_secret("", None));
    }

    #[test]
    fn malformed_phc_string_rejects() {
        assert!(!verify_secret("abc", Some("$argon2id$not-a-real-hash")));
    }
}
