use crate::models::DbSlot;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::PgExecutor;
use uuid::Uuid;

pub async fn create_slot(
    executor: impl PgExecutor<'_>,
    teacher_id: Uuid,
    start_date_time: DateTime<Utc>,
    end_date_time: DateTime<Utc>,
) -> Result<DbSlot> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let slot = sqlx::query_as::<_, DbSlot>(
        r#"
        INSERT INTO slots (id, teacher_id, start_date_time, end_date_time, available, created_at)
        VALUES ($1, $2, $3, $4, TRUE, $5)
        RETURNING id, teacher_id, start_date_time, end_date_time, available, created_at
        "#,
    )
    .bind(id)
    .bind(teacher_id)
    .bind(start_date_time)
    .bind(end_date_time)
    .bind(now)
    .fetch_one(executor)
    .await?;

    Ok(slot)
}

pub async fn get_slot_by_id(executor: impl PgExecutor<'_>, id: Uuid) -> Result<Option<DbSlot>> {
    let slot = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, teacher_id, start_date_time, end_date_time, available, created_at
        FROM slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(slot)
}

/// Fetches a slot with a row lock held until the surrounding transaction
/// ends. Serializes concurrent reserve attempts on the same slot.
pub async fn get_slot_by_id_for_update(
    executor: impl PgExecutor<'_>,
    id: Uuid,
) -> Result<Option<DbSlot>> {
    let slot = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, teacher_id, start_date_time, end_date_time, available, created_at
        FROM slots
        WHERE id = $1
        FOR UPDATE
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(slot)
}

pub async fn get_slots_by_teacher_id(
    executor: impl PgExecutor<'_>,
    teacher_id: Uuid,
) -> Result<Vec<DbSlot>> {
    let slots = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, teacher_id, start_date_time, end_date_time, available, created_at
        FROM slots
        WHERE teacher_id = $1
        ORDER BY start_date_time ASC
        "#,
    )
    .bind(teacher_id)
    .fetch_all(executor)
    .await?;

    Ok(slots)
}

pub async fn get_available_slots_by_teacher_id(
    executor: impl PgExecutor<'_>,
    teacher_id: Uuid,
) -> Result<Vec<DbSlot>> {
    let slots = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, teacher_id, start_date_time, end_date_time, available, created_at
        FROM slots
        WHERE teacher_id = $1 AND available = TRUE
        ORDER BY start_date_time ASC
        "#,
    )
    .bind(teacher_id)
    .fetch_all(executor)
    .await?;

    Ok(slots)
}

pub async fn set_slot_availability(
    executor: impl PgExecutor<'_>,
    id: Uuid,
    available: bool,
) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE slots
        SET available = $2
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(available)
    .execute(executor)
    .await?;

    Ok(())
}

pub async fn delete_slot(executor: impl PgExecutor<'_>, id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(())
}
