use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;
use tutorhub_core::{
    errors::TutorError,
    models::reservation::{
        Reservation, ReservationRequest, ReservationResponse, ReservationStatus,
    },
    models::slot::{Slot, SlotResponse},
    reservation,
};
use uuid::Uuid;

use crate::{
    handlers::tx_err,
    middleware::{auth, error_handling::AppError},
    ApiState,
};

fn reservation_response(reservation: Reservation) -> ReservationResponse {
    ReservationResponse {
        id: reservation.id,
        student_id: reservation.student_id,
        slot_id: reservation.slot_id,
        status: reservation.status,
        created_at: reservation.created_at,
    }
}

/// Reserves an available slot for the calling student.
///
/// The slot row is locked for the duration of the transaction, so two
/// concurrent reserve calls on the same slot serialize and the loser sees
/// `available = false`.
#[axum::debug_handler]
pub async fn reserve_slot(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<ReservationRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), AppError> {
    let (_, student) = auth::current_student(&state.db_pool, &headers).await?;

    let mut tx = state.db_pool.begin().await.map_err(tx_err)?;

    let slot: Slot =
        tutorhub_db::repositories::slot::get_slot_by_id_for_update(&mut *tx, payload.slot_id)
            .await
            .map_err(TutorError::Database)?
            .ok_or_else(|| TutorError::NotFound("Slot not found".to_string()))?
            .into();

    let prior = tutorhub_db::repositories::reservation::get_reservation_by_student_and_slot(
        &mut *tx,
        student.id,
        slot.id,
    )
    .await
    .map_err(TutorError::Database)?
    .map(|row| row.into_domain())
    .transpose()?;

    reservation::ensure_reservable(&slot, prior.as_ref())?;

    let created = tutorhub_db::repositories::reservation::create_reservation(
        &mut *tx,
        student.id,
        slot.id,
        ReservationStatus::Active.as_str(),
    )
    .await
    .map_err(TutorError::Database)?
    .into_domain()?;

    tutorhub_db::repositories::slot::set_slot_availability(&mut *tx, slot.id, false)
        .await
        .map_err(TutorError::Database)?;

    tx.commit().await.map_err(tx_err)?;

    tracing::info!("Reservation created - Student: {}, Slot: {}", student.id, slot.id);

    Ok((StatusCode::CREATED, Json(reservation_response(created))))
}

/// Cancels a reservation owned by the calling student and reopens its
/// slot. The reopen does not check whether someone else has reserved the
/// slot in the meantime.
#[axum::debug_handler]
pub async fn cancel_reservation(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(reservation_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let (_, student) = auth::current_student(&state.db_pool, &headers).await?;

    let mut tx = state.db_pool.begin().await.map_err(tx_err)?;

    let existing =
        tutorhub_db::repositories::reservation::get_reservation_by_id(&mut *tx, reservation_id)
            .await
            .map_err(TutorError::Database)?
            .ok_or_else(|| TutorError::NotFound("Reservation not found".to_string()))?
            .into_domain()?;

    reservation::ensure_cancellable(&existing, student.id)?;

    tutorhub_db::repositories::reservation::set_reservation_status(
        &mut *tx,
        existing.id,
        ReservationStatus::Cancelled.as_str(),
    )
    .await
    .map_err(TutorError::Database)?;

    tutorhub_db::repositories::slot::set_slot_availability(&mut *tx, existing.slot_id, true)
        .await
        .map_err(TutorError::Database)?;

    tx.commit().await.map_err(tx_err)?;

    tracing::info!("Reservation {} cancelled", existing.id);

    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn list_reservations(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<ReservationResponse>>, AppError> {
    let (_, student) = auth::current_student(&state.db_pool, &headers).await?;

    let rows = tutorhub_db::repositories::reservation::get_reservations_by_student_id(
        &state.db_pool,
        student.id,
    )
    .await
    .map_err(TutorError::Database)?;

    let mut reservations = Vec::with_capacity(rows.len());
    for row in rows {
        reservations.push(reservation_response(row.into_domain()?));
    }

    Ok(Json(reservations))
}

/// Lists a teacher's open slots for the calling student to choose from.
#[axum::debug_handler]
pub async fn teacher_available_slots(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(teacher_id): Path<Uuid>,
) -> Result<Json<Vec<SlotResponse>>, AppError> {
    auth::current_student(&state.db_pool, &headers).await?;

    tutorhub_db::repositories::profile::get_teacher_by_id(&state.db_pool, teacher_id)
        .await
        .map_err(TutorError::Database)?
        .ok_or_else(|| TutorError::NotFound(format!("Teacher with ID {} not found", teacher_id)))?;

    let slots = tutorhub_db::repositories::slot::get_available_slots_by_teacher_id(
        &state.db_pool,
        teacher_id,
    )
    .await
    .map_err(TutorError::Database)?;

    Ok(Json(
        slots
            .into_iter()
            .map(|slot| SlotResponse {
                id: slot.id,
                start_date_time: slot.start_date_time,
                end_date_time: slot.end_date_time,
                available: slot.available,
                created_at: slot.created_at,
            })
            .collect(),
    ))
}
