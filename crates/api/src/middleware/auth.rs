//! # Authentication Module
//!
//! Password hashing (Argon2) and opaque bearer-token authentication for
//! the TutorHub API. Tokens are random bytes, hex-encoded, stored
//! server-side; nothing is ever decoded from them.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use axum::http::HeaderMap;
use eyre::Result;
use rand::RngCore;
use sqlx::PgPool;
use tutorhub_core::errors::{TutorError, TutorResult};
use tutorhub_db::models::{DbStudent, DbTeacher, DbUser};
use tutorhub_db::repositories::{profile, token, user};

/// Hashes a password using the Argon2 algorithm.
///
/// Generates a random salt and returns the PHC string format (algorithm,
/// version, parameters, salt, and hash).
pub fn hash_password(password: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    // Create default Argon2 instance
    let argon2 = Argon2::default();

    // Hash the password with salt
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Verifies a plain text password against a stored Argon2 hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| eyre::eyre!("Invalid password hash: {}", e))?;
    let is_valid = Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok();
    Ok(is_valid)
}

/// Generates a fresh opaque bearer token: 32 random bytes, hex-encoded.
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Issues and persists a new token for the given user.
pub async fn issue_token(pool: &PgPool, user_id: uuid::Uuid) -> TutorResult<String> {
    let token_value = generate_token();
    token::create_token(pool, &token_value, user_id)
        .await
        .map_err(TutorError::Database)?;
    Ok(token_value)
}

/// Pulls the bearer token out of the Authorization header.
pub fn bearer_token(headers: &HeaderMap) -> TutorResult<&str> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| TutorError::Authentication("Missing Authorization header".to_string()))?;

    header
        .strip_prefix("Bearer ")
        .ok_or_else(|| TutorError::Authentication("Expected a bearer token".to_string()))
}

/// Resolves the acting user from the request's bearer token.
pub async fn authenticate(pool: &PgPool, headers: &HeaderMap) -> TutorResult<DbUser> {
    let token_value = bearer_token(headers)?;

    let token_row = token::get_token(pool, token_value)
        .await
        .map_err(TutorError::Database)?
        .ok_or_else(|| TutorError::Authentication("Invalid or expired token".to_string()))?;

    let account = user::get_user_by_id(pool, token_row.user_id)
        .await
        .map_err(TutorError::Database)?
        .ok_or_else(|| TutorError::Authentication("Token user no longer exists".to_string()))?;

    if !account.enabled {
        return Err(TutorError::Authentication("Account is disabled".to_string()));
    }

    Ok(account)
}

/// Authenticates the request and resolves the caller's teacher profile.
pub async fn current_teacher(
    pool: &PgPool,
    headers: &HeaderMap,
) -> TutorResult<(DbUser, DbTeacher)> {
    let account = authenticate(pool, headers).await?;

    let teacher = profile::get_teacher_by_user_id(pool, account.id)
        .await
        .map_err(TutorError::Database)?
        .ok_or_else(|| TutorError::NotFound("Teacher profile not found".to_string()))?;

    Ok((account, teacher))
}

/// Authenticates the request and resolves the caller's student profile.
pub async fn current_student(
    pool: &PgPool,
    headers: &HeaderMap,
) -> TutorResult<(DbUser, DbStudent)> {
    let account = authenticate(pool, headers).await?;

    let student = profile::get_student_by_user_id(pool, account.id)
        .await
        .map_err(TutorError::Database)?
        .ok_or_else(|| TutorError::NotFound("Student profile not found".to_string()))?;

    Ok((account, student))
}

/// Authenticates the request and requires the ADMIN role.
pub async fn require_admin(pool: &PgPool, headers: &HeaderMap) -> TutorResult<DbUser> {
    let account = authenticate(pool, headers).await?;

    if account.role != "ADMIN" {
        return Err(TutorError::NotOwner(
            "Administrator privileges required".to_string(),
        ));
    }

    Ok(account)
}
