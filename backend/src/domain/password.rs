//! Password hashing and verification for stored credentials.
//!
//! Hashes are stored in PHC string format so the parameters travel with the
//! hash and verification never needs out-of-band configuration.

use std::fmt;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced while hashing or verifying passwords.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordHashError {
    /// The hashing algorithm rejected the input.
    #[error("password hashing failed: {message}")]
    Hashing { message: String },
    /// A stored hash could not be parsed as a PHC string.
    #[error("stored password hash is malformed: {message}")]
    Malformed { message: String },
}

/// An Argon2 password hash in PHC string format.
///
/// The debug representation is redacted so hashes never leak into logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHashString(String);

impl PasswordHashString {
    /// Wrap an already-encoded PHC string, e.g. when loading from storage.
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Borrow the encoded PHC string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHashString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHashString(<redacted>)")
    }
}

/// Hash a plain-text password with Argon2 and a fresh random salt.
pub fn hash_password(password: &str) -> Result<PasswordHashString, PasswordHashError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| PasswordHashString(hash.to_string()))
        .map_err(|err| PasswordHashError::Hashing {
            message: err.to_string(),
        })
}

/// Verify a candidate password against a stored hash.
///
/// Returns `Ok(false)` on a mismatch; a hash that fails to parse is reported
/// as [`PasswordHashError::Malformed`] so callers can log it.
pub fn verify_password(
    hash: &PasswordHashString,
    candidate: &str,
) -> Result<bool, PasswordHashError> {
    let parsed = PasswordHash::new(hash.as_str()).map_err(|err| PasswordHashError::Malformed {
        message: err.to_string(),
    })?;

    match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(err) => Err(PasswordHashError::Malformed {
            message: err.to_string(),
        }),
    }
}
