use crate::models::DbUser;
use chrono::Utc;
use eyre::Result;
use sqlx::PgExecutor;
use uuid::Uuid;

pub async fn create_user(
    executor: impl PgExecutor<'_>,
    username: &str,
    password_hash: &str,
    email: &str,
    role: &str,
) -> Result<DbUser> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (id, username, password, email, role, enabled, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, TRUE, $6, $6)
        RETURNING id, username, password, email, role, enabled, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .bind(email)
    .bind(role)
    .bind(now)
    .fetch_one(executor)
    .await?;

    Ok(user)
}

pub async fn get_user_by_id(executor: impl PgExecutor<'_>, id: Uuid) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, password, email, role, enabled, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(user)
}

pub async fn get_user_by_username(
    executor: impl PgExecutor<'_>,
    username: &str,
) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, password, email, role, enabled, created_at, updated_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(executor)
    .await?;

    Ok(user)
}

pub async fn exists_by_username(executor: impl PgExecutor<'_>, username: &str) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (SELECT 1 FROM users WHERE username = $1);
        "#,
    )
    .bind(username)
    .fetch_one(executor)
    .await?;

    Ok(exists)
}

pub async fn exists_by_email(executor: impl PgExecutor<'_>, email: &str) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (SELECT 1 FROM users WHERE email = $1);
        "#,
    )
    .bind(email)
    .fetch_one(executor)
    .await?;

    Ok(exists)
}
