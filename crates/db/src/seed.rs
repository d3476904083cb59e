//! Startup seeding of the administrator account.

use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHasher};
use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::{info, warn};

use crate::repositories::{profile, user};

/// Ensures the configured admin account exists. Safe to run on every
/// startup: an existing admin is left alone, and a username or email
/// collision with a non-admin account skips seeding with a warning.
pub async fn seed_admin(
    pool: &Pool<Postgres>,
    username: &str,
    password: &str,
    email: &str,
) -> Result<()> {
    if let Some(existing) = user::get_user_by_username(pool, username).await? {
        if existing.role != "ADMIN" {
            warn!(
                "Seed admin username '{}' exists but is not an admin; skipping seeding",
                username
            );
            return Ok(());
        }

        if profile::get_admin_by_user_id(pool, existing.id).await?.is_none() {
            profile::create_admin(pool, existing.id).await?;
            info!("Seed admin profile created for existing user '{}'", username);
        } else {
            info!("Seed admin already exists: '{}'", username);
        }
        return Ok(());
    }

    if user::exists_by_email(pool, email).await? {
        warn!("Seed admin email '{}' already exists; skipping seeding", email);
        return Ok(());
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing admin password: {}", e))?
        .to_string();

    let admin_user = user::create_user(pool, username, &password_hash, email, "ADMIN").await?;
    profile::create_admin(pool, admin_user.id).await?;

    info!("Seed admin created: '{}'", username);
    Ok(())
}
