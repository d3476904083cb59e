use crate::models::DbRegistrationRequest;
use chrono::Utc;
use eyre::Result;
use sqlx::PgExecutor;
use uuid::Uuid;

pub async fn create_request(
    executor: impl PgExecutor<'_>,
    username: &str,
    password_hash: &str,
    cv_url: &str,
    skills: &[String],
    status: &str,
) -> Result<DbRegistrationRequest> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let request = sqlx::query_as::<_, DbRegistrationRequest>(
        r#"
        INSERT INTO teacher_registration_requests
            (id, username, password_hash, cv_url, skills, status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
        RETURNING id, username, password_hash, cv_url, skills, status, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .bind(cv_url)
    .bind(skills)
    .bind(status)
    .bind(now)
    .fetch_one(executor)
    .await?;

    Ok(request)
}

pub async fn get_request_by_id(
    executor: impl PgExecutor<'_>,
    id: Uuid,
) -> Result<Option<DbRegistrationRequest>> {
    let request = sqlx::query_as::<_, DbRegistrationRequest>(
        r#"
        SELECT id, username, password_hash, cv_url, skills, status, created_at, updated_at
        FROM teacher_registration_requests
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(request)
}

pub async fn exists_by_username_and_status(
    executor: impl PgExecutor<'_>,
    username: &str,
    status: &str,
) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM teacher_registration_requests
            WHERE username = $1 AND status = $2
        );
        "#,
    )
    .bind(username)
    .bind(status)
    .fetch_one(executor)
    .await?;

    Ok(exists)
}

pub async fn list_requests(executor: impl PgExecutor<'_>) -> Result<Vec<DbRegistrationRequest>> {
    let requests = sqlx::query_as::<_, DbRegistrationRequest>(
        r#"
        SELECT id, username, password_hash, cv_url, skills, status, created_at, updated_at
        FROM teacher_registration_requests
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(executor)
    .await?;

    Ok(requests)
}

pub async fn list_requests_by_status(
    executor: impl PgExecutor<'_>,
    status: &str,
) -> Result<Vec<DbRegistrationRequest>> {
    let requests = sqlx::query_as::<_, DbRegistrationRequest>(
        r#"
        SELECT id, username, password_hash, cv_url, skills, status, created_at, updated_at
        FROM teacher_registration_requests
        WHERE status = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(status)
    .fetch_all(executor)
    .await?;

    Ok(requests)
}

pub async fn set_request_status(
    executor: impl PgExecutor<'_>,
    id: Uuid,
    status: &str,
) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE teacher_registration_requests
        SET status = $2, updated_at = $3
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(status)
    .bind(Utc::now())
    .execute(executor)
    .await?;

    Ok(())
}
