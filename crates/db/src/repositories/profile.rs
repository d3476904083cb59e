use crate::models::{DbAdmin, DbStudent, DbTeacher};
use chrono::Utc;
use eyre::Result;
use sqlx::PgExecutor;
use uuid::Uuid;

pub async fn create_student(executor: impl PgExecutor<'_>, user_id: Uuid) -> Result<DbStudent> {
    let id = Uuid::new_v4();

    let student = sqlx::query_as::<_, DbStudent>(
        r#"
        INSERT INTO student_profiles (id, user_id)
        VALUES ($1, $2)
        RETURNING id, user_id
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_one(executor)
    .await?;

    Ok(student)
}

pub async fn get_student_by_id(
    executor: impl PgExecutor<'_>,
    id: Uuid,
) -> Result<Option<DbStudent>> {
    let student = sqlx::query_as::<_, DbStudent>(
        r#"
        SELECT id, user_id
        FROM student_profiles
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(student)
}

pub async fn get_student_by_user_id(
    executor: impl PgExecutor<'_>,
    user_id: Uuid,
) -> Result<Option<DbStudent>> {
    let student = sqlx::query_as::<_, DbStudent>(
        r#"
        SELECT id, user_id
        FROM student_profiles
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await?;

    Ok(student)
}

pub async fn create_teacher(
    executor: impl PgExecutor<'_>,
    user_id: Uuid,
    cv_url: &str,
) -> Result<DbTeacher> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let teacher = sqlx::query_as::<_, DbTeacher>(
        r#"
        INSERT INTO teacher_profiles (id, user_id, cv_url, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $4)
        RETURNING id, user_id, cv_url, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(cv_url)
    .bind(now)
    .fetch_one(executor)
    .await?;

    Ok(teacher)
}

pub async fn get_teacher_by_id(
    executor: impl PgExecutor<'_>,
    id: Uuid,
) -> Result<Option<DbTeacher>> {
    let teacher = sqlx::query_as::<_, DbTeacher>(
        r#"
        SELECT id, user_id, cv_url, created_at, updated_at
        FROM teacher_profiles
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(teacher)
}

pub async fn get_teacher_by_user_id(
    executor: impl PgExecutor<'_>,
    user_id: Uuid,
) -> Result<Option<DbTeacher>> {
    let teacher = sqlx::query_as::<_, DbTeacher>(
        r#"
        SELECT id, user_id, cv_url, created_at, updated_at
        FROM teacher_profiles
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await?;

    Ok(teacher)
}

pub async fn list_teachers(executor: impl PgExecutor<'_>) -> Result<Vec<DbTeacher>> {
    let teachers = sqlx::query_as::<_, DbTeacher>(
        r#"
        SELECT id, user_id, cv_url, created_at, updated_at
        FROM teacher_profiles
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(executor)
    .await?;

    Ok(teachers)
}

pub async fn create_admin(executor: impl PgExecutor<'_>, user_id: Uuid) -> Result<DbAdmin> {
    let id = Uuid::new_v4();

    let admin = sqlx::query_as::<_, DbAdmin>(
        r#"
        INSERT INTO admin_profiles (id, user_id)
        VALUES ($1, $2)
        RETURNING id, user_id
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_one(executor)
    .await?;

    Ok(admin)
}

pub async fn get_admin_by_user_id(
    executor: impl PgExecutor<'_>,
    user_id: Uuid,
) -> Result<Option<DbAdmin>> {
    let admin = sqlx::query_as::<_, DbAdmin>(
        r#"
        SELECT id, user_id
        FROM admin_profiles
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await?;

    Ok(admin)
}
