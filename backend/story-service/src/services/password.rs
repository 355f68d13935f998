/// Password hashing and verification using Argon2id
use crate::error::{ServiceError, ServiceResult};
use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};

/// Hash a password; the result is a PHC string suitable for storage
pub fn hash_password(password: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(rand::thread_rng());

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| ServiceError::Internal("Failed to hash password".to_string()))
}

/// Verify a password against a stored hash
pub fn verify_password(password: &str, hash: &str) -> ServiceResult<()> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| ServiceError::Internal("Invalid password hash format".to_string()))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| ServiceError::InvalidCredentials)
}
