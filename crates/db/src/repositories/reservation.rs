use crate::models::DbReservation;
use chrono::Utc;
use eyre::Result;
use sqlx::PgExecutor;
use uuid::Uuid;

pub async fn create_reservation(
    executor: impl PgExecutor<'_>,
    student_id: Uuid,
    slot_id: Uuid,
    status: &str,
) -> Result<DbReservation> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let reservation = sqlx::query_as::<_, DbReservation>(
        r#"
        INSERT INTO reservations (id, student_id, slot_id, status, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, student_id, slot_id, status, created_at
        "#,
    )
    .bind(id)
    .bind(student_id)
    .bind(slot_id)
    .bind(status)
    .bind(now)
    .fetch_one(executor)
    .await?;

    Ok(reservation)
}

pub async fn get_reservation_by_id(
    executor: impl PgExecutor<'_>,
    id: Uuid,
) -> Result<Option<DbReservation>> {
    let reservation = sqlx::query_as::<_, DbReservation>(
        r#"
        SELECT id, student_id, slot_id, status, created_at
        FROM reservations
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(reservation)
}

/// Looks up any reservation linking this student to this slot, whatever
/// its status. A cancelled row still counts.
pub async fn get_reservation_by_student_and_slot(
    executor: impl PgExecutor<'_>,
    student_id: Uuid,
    slot_id: Uuid,
) -> Result<Option<DbReservation>> {
    let reservation = sqlx::query_as::<_, DbReservation>(
        r#"
        SELECT id, student_id, slot_id, status, created_at
        FROM reservations
        WHERE student_id = $1 AND slot_id = $2
        LIMIT 1
        "#,
    )
    .bind(student_id)
    .bind(slot_id)
    .fetch_optional(executor)
    .await?;

    Ok(reservation)
}

pub async fn get_reservations_by_student_id(
    executor: impl PgExecutor<'_>,
    student_id: Uuid,
) -> Result<Vec<DbReservation>> {
    let reservations = sqlx::query_as::<_, DbReservation>(
        r#"
        SELECT id, student_id, slot_id, status, created_at
        FROM reservations
        WHERE student_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(student_id)
    .fetch_all(executor)
    .await?;

    Ok(reservations)
}

pub async fn set_reservation_status(
    executor: impl PgExecutor<'_>,
    id: Uuid,
    status: &str,
) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE reservations
        SET status = $2
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(status)
    .execute(executor)
    .await?;

    Ok(())
}
