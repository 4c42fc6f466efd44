//! Password hashing and verification utilities
//!
//! Dealer and admin passwords are stored as Argon2id hashes and verified
//! against the stored hash on login.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::{debug, error};

/// Error types for password operations
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
    #[error("Failed to verify password: {0}")]
    VerificationFailed(String),
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

pub trait PasswordUtils {
    /// Hashes the given password using Argon2id algorithm
    fn hash_password(password: &str) -> Result<String, PasswordError>;

    /// Verifies the given password against the stored hash
    fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError>;
}

pub struct PasswordUtilsImpl;

impl PasswordUtils for PasswordUtilsImpl {
    fn hash_password(password: &str) -> Result<String, PasswordError> {
        debug!("Hashing password");

        let salt = SaltString::generate(OsRng);
        let argon2 = Argon2::default();

        match argon2.hash_password(password.as_bytes(), &salt) {
            Ok(password_hash) => Ok(password_hash.to_string()),
            Err(err) => {
                error!("Failed to hash password: {}", err);
                Err(PasswordError::HashingFailed(err.to_string()))
            }
        }
    }

    fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
        debug!("Verifying password against hash");

        let parsed_hash = match PasswordHash::new(hash) {
            Ok(hash) => hash,
            Err(err) => {
                error!("Invalid password hash format: {}", err);
                return Err(PasswordError::InvalidHashFormat);
            }
        };

        let argon2 = Argon2::default();

        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(err) => {
                error!("Password verification error: {}", err);
                Err(PasswordError::VerificationFailed(err.to_string()))
            }
        }
    }
}
