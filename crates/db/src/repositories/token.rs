use crate::models::DbAuthToken;
use chrono::Utc;
use eyre::Result;
use sqlx::PgExecutor;
use uuid::Uuid;

pub async fn create_token(
    executor: impl PgExecutor<'_>,
    token: &str,
    user_id: Uuid,
) -> Result<DbAuthToken> {
    let row = sqlx::query_as::<_, DbAuthToken>(
        r#"
        INSERT INTO auth_tokens (token, user_id, created_at)
        VALUES ($1, $2, $3)
        RETURNING token, user_id, created_at
        "#,
    )
    .bind(token)
    .bind(user_id)
    .bind(Utc::now())
    .fetch_one(executor)
    .await?;

    Ok(row)
}

pub async fn get_token(executor: impl PgExecutor<'_>, token: &str) -> Result<Option<DbAuthToken>> {
    let row = sqlx::query_as::<_, DbAuthToken>(
        r#"
        SELECT token, user_id, created_at
        FROM auth_tokens
        WHERE token = $1
        "#,
    )
    .bind(token)
    .fetch_optional(executor)
    .await?;

    Ok(row)
}

pub async fn delete_token(executor: impl PgExecutor<'_>, token: &str) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM auth_tokens
        WHERE token = $1
        "#,
    )
    .bind(token)
    .execute(executor)
    .await?;

    Ok(())
}
