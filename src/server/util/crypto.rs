//! Password hashing, API token generation and basic credential decoding.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::server::error::{auth::AuthError, Error};

/// Hashes a password with Argon2id and a random salt, returning the PHC string.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::InternalError(format!("Failed to hash password: {}", e)))
}

/// Checks a password against a stored PHC string.
///
/// A stored hash that cannot be parsed never verifies.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!("Stored password hash could not be parsed: {}", e);
            false
        }
    }
}

/// Generates a new API token key: 20 random bytes as 40 lowercase hex characters.
pub fn generate_token() -> String {
    let bytes: [u8; 20] = rand::random();

    bytes.iter().map(|byte| format!("{:02x}", byte)).collect()
}

/// Decodes the credentials part of an `Authorization: Basic` header into username and password.
pub fn decode_basic_credentials(encoded: &str) -> Result<(String, String), AuthError> {
    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| AuthError::InvalidBasicHeader("Credentials not correctly base64 encoded."))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|_| AuthError::InvalidBasicHeader("Credentials not correctly base64 encoded."))?;

    match decoded.split_once(':') {
        Some((username, password)) => Ok((username.to_string(), password.to_string())),
        None => Err(AuthError::InvalidBasicHeader(
            "Credentials not correctly base64 encoded.",
        )),
    }
}
