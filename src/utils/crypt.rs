//! Password hashing.
//!
//! Hashes are Argon2id PHC strings (`$argon2id$v=19$m=...$salt$hash`) produced
//! with the `argon2` crate's default parameters. The salt is either generated
//! from the OS RNG or supplied by the caller, which makes the output
//! reproducible.

use argon2::password_hash::{
    self, rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::{Argon2, MIN_SALT_LEN};
use thiserror::Error;

/// Large enough for the longest salt `SaltString` accepts.
const SALT_BUF_LEN: usize = 64;

#[derive(Debug, Error)]
pub enum CryptError {
    #[error("invalid salt {salt:?}: {reason}")]
    InvalidSalt { salt: String, reason: String },

    #[error("invalid password hash: {0}")]
    InvalidHash(String),

    #[error("password hashing failed: {0}")]
    Hash(String),
}

/// Hash `value` and return the encoded hash string.
///
/// `salt` must be unpadded standard base64 (the PHC `B64` alphabet) of at
/// most 64 characters that decodes to at least 8 bytes, e.g. `c29tZXNhbHQ`
/// (`somesalt`). `None` generates a fresh random salt.
///
/// # Examples
///
/// ```
/// use compass_utils::utils::crypt::{encrypt, verify};
///
/// let hash = encrypt("root", None).unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// assert!(verify("root", &hash).unwrap());
/// ```
pub fn encrypt(value: &str, salt: Option<&str>) -> Result<String, CryptError> {
    let salt = match salt {
        Some(s) => caller_salt(s)?,
        None => SaltString::generate(&mut OsRng),
    };

    Argon2::default()
        .hash_password(value.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!(error = %e, "password hashing failed");
            CryptError::Hash(e.to_string())
        })
}

fn caller_salt(salt: &str) -> Result<SaltString, CryptError> {
    let invalid = |reason: String| {
        tracing::warn!(reason = %reason, "rejected caller supplied salt");
        CryptError::InvalidSalt {
            salt: salt.to_string(),
            reason,
        }
    };

    let parsed = SaltString::from_b64(salt).map_err(|e| invalid(e.to_string()))?;

    let mut buf = [0u8; SALT_BUF_LEN];
    let decoded = parsed
        .as_salt()
        .decode_b64(&mut buf)
        .map_err(|e| invalid(e.to_string()))?;
    if decoded.len() < MIN_SALT_LEN {
        return Err(invalid(format!(
            "decodes to {} bytes, at least {} required",
            decoded.len(),
            MIN_SALT_LEN
        )));
    }

    Ok(parsed)
}

/// Check `value` against a hash produced by [`encrypt`].
///
/// Returns `Ok(false)` on a mismatch and an error only when `hash` cannot be
/// parsed.
pub fn verify(value: &str, hash: &str) -> Result<bool, CryptError> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        tracing::warn!(error = %e, "malformed password hash");
        CryptError::InvalidHash(e.to_string())
    })?;

    match Argon2::default().verify_password(value.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => {
            tracing::warn!(error = %e, "password verification failed");
            Err(CryptError::InvalidHash(e.to_string()))
        }
    }
}
