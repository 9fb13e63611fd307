//! Password hashing plus the password and nickname rules applied at sign-up
//!
//! Uses Argon2id for password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

const PASSWORD_MIN_CHARS: usize = 8;
const PASSWORD_MAX_CHARS: usize = 20;
const NICKNAME_MIN_CHARS: usize = 2;
const NICKNAME_MAX_CHARS: usize = 10;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a hash
///
/// # Errors
/// Returns an error if the stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Check the password rule: 8-20 characters with a letter, a digit and a
/// special character
///
/// # Errors
/// Returns a validation error naming the first rule that fails
pub fn validate_password_rules(password: &str) -> Result<(), AppError> {
    let len = password.chars().count();
    if !(PASSWORD_MIN_CHARS..=PASSWORD_MAX_CHARS).contains(&len) {
        return Err(AppError::Validation(format!(
            "Password must be {PASSWORD_MIN_CHARS}-{PASSWORD_MAX_CHARS} characters long"
        )));
    }

    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::Validation(
            "Password must contain a letter".to_string(),
        ));
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "Password must contain a digit".to_string(),
        ));
    }

    if !password
        .chars()
        .any(|c| c.is_ascii_punctuation())
    {
        return Err(AppError::Validation(
            "Password must contain a special character".to_string(),
        ));
    }

    if password.chars().any(char::is_whitespace) {
        return Err(AppError::Validation(
            "Password must not contain whitespace".to_string(),
        ));
    }

    Ok(())
}

/// Check the nickname rule: 2-10 characters of letters, digits or Hangul
///
/// # Errors
/// Returns a validation error if the nickname breaks the rule
pub fn validate_nickname(nickname: &str) -> Result<(), AppError> {
    let len = nickname.chars().count();
    if !(NICKNAME_MIN_CHARS..=NICKNAME_MAX_CHARS).contains(&len) {
        return Err(AppError::Validation(format!(
            "Nickname must be {NICKNAME_MIN_CHARS}-{NICKNAME_MAX_CHARS} characters long"
        )));
    }

    if !nickname.chars().all(|c| c.is_ascii_alphanumeric() || is_hangul(c)) {
        return Err(AppError::Validation(
            "Nickname may only contain letters, digits and Hangul".to_string(),
        ));
    }

    Ok(())
}

fn is_hangul(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7A3}' | '\u{3131}'..='\u{318E}')
}
