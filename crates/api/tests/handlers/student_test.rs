use axum::Json;
use chrono::{Duration, Utc};
use mockall::predicate;
use tutorhub_core::{
    errors::TutorError,
    models::reservation::{ReservationResponse, ReservationStatus},
    reservation::{ensure_cancellable, ensure_reservable},
};
use tutorhub_db::models::{DbReservation, DbSlot};
use uuid::Uuid;

use crate::test_utils::TestContext;
use tutorhub_api::middleware::error_handling::AppError;

fn db_slot(id: Uuid, available: bool) -> DbSlot {
    let start = Utc::now();
    DbSlot {
        id,
        teacher_id: Uuid::new_v4(),
        start_date_time: start,
        end_date_time: start + Duration::hours(1),
        available,
        created_at: start,
    }
}

fn db_reservation(student_id: Uuid, slot_id: Uuid, status: &str) -> DbReservation {
    DbReservation {
        id: Uuid::new_v4(),
        student_id,
        slot_id,
        status: status.to_string(),
        created_at: Utc::now(),
    }
}

// Wrapper that runs the reservation flow against the mocks: load the
// slot, check the prior-reservation guard, persist, close the slot.
async fn test_reserve_slot_wrapper(
    ctx: &mut TestContext,
    student_id: Uuid,
    slot_id: Uuid,
) -> Result<Json<ReservationResponse>, AppError> {
    let slot = ctx
        .slot_repo
        .get_slot_by_id(slot_id)
        .await?
        .ok_or_else(|| AppError(TutorError::NotFound("Slot not found".to_string())))?;

    let prior = ctx
        .reservation_repo
        .get_reservation_by_student_and_slot(student_id, slot_id)
        .await?;
    let prior = match prior {
        Some(row) => Some(row.into_domain()?),
        None => None,
    };

    let slot: tutorhub_core::models::slot::Slot = slot.into();
    ensure_reservable(&slot, prior.as_ref())?;

    let created = ctx
        .reservation_repo
        .create_reservation(student_id, slot_id, "ACTIVE")
        .await?;
    ctx.slot_repo.set_slot_availability(slot_id, false).await?;

    let reservation = created.into_domain()?;
    Ok(Json(ReservationResponse {
        id: reservation.id,
        student_id: reservation.student_id,
        slot_id: reservation.slot_id,
        status: reservation.status,
        created_at: reservation.created_at,
    }))
}

// Wrapper for cancellation: ownership guard, status flip, slot reopen.
async fn test_cancel_reservation_wrapper(
    ctx: &mut TestContext,
    student_id: Uuid,
    reservation_id: Uuid,
) -> Result<(), AppError> {
    let reservation = ctx
        .reservation_repo
        .get_reservation_by_id(reservation_id)
        .await?
        .ok_or_else(|| AppError(TutorError::NotFound("Reservation not found".to_string())))?
        .into_domain()?;

    ensure_cancellable(&reservation, student_id)?;

    ctx.reservation_repo
        .set_reservation_status(reservation_id, "CANCELLED")
        .await?;
    ctx.slot_repo
        .set_slot_availability(reservation.slot_id, true)
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_reserve_slot_success() {
    let mut ctx = TestContext::new();
    let student_id = Uuid::new_v4();
    let slot_id = Uuid::new_v4();

    ctx.slot_repo
        .expect_get_slot_by_id()
        .with(predicate::eq(slot_id))
        .returning(move |id| Ok(Some(db_slot(id, true))));

    ctx.reservation_repo
        .expect_get_reservation_by_student_and_slot()
        .with(predicate::eq(student_id), predicate::eq(slot_id))
        .returning(|_, _| Ok(None));

    ctx.reservation_repo
        .expect_create_reservation()
        .with(
            predicate::eq(student_id),
            predicate::eq(slot_id),
            predicate::eq("ACTIVE"),
        )
        .times(1)
        .returning(|student_id, slot_id, status| {
            Ok(db_reservation(student_id, slot_id, status))
        });

    ctx.slot_repo
        .expect_set_slot_availability()
        .with(predicate::eq(slot_id), predicate::eq(false))
        .times(1)
        .returning(|_, _| Ok(()));

    let result = test_reserve_slot_wrapper(&mut ctx, student_id, slot_id).await;

    let response = result.unwrap();
    assert_eq!(response.0.student_id, student_id);
    assert_eq!(response.0.slot_id, slot_id);
    assert_eq!(response.0.status, ReservationStatus::Active);
}

#[tokio::test]
async fn test_reserve_missing_slot_is_not_found() {
    let mut ctx = TestContext::new();
    let slot_id = Uuid::new_v4();

    ctx.slot_repo
        .expect_get_slot_by_id()
        .with(predicate::eq(slot_id))
        .returning(|_| Ok(None));

    let result = test_reserve_slot_wrapper(&mut ctx, Uuid::new_v4(), slot_id).await;

    match result.unwrap_err().0 {
        TutorError::NotFound(_) => {}
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_reserve_unavailable_slot_is_rejected() {
    let mut ctx = TestContext::new();
    let student_id = Uuid::new_v4();
    let slot_id = Uuid::new_v4();

    // Another student already holds the slot; availability is false and
    // this student has no prior reservation of their own.
    ctx.slot_repo
        .expect_get_slot_by_id()
        .with(predicate::eq(slot_id))
        .returning(move |id| Ok(Some(db_slot(id, false))));

    ctx.reservation_repo
        .expect_get_reservation_by_student_and_slot()
        .returning(|_, _| Ok(None));

    ctx.reservation_repo
        .expect_create_reservation()
        .times(0)
        .returning(|_, _, _| panic!("Should not be called"));

    let result = test_reserve_slot_wrapper(&mut ctx, student_id, slot_id).await;

    match result.unwrap_err().0 {
        TutorError::SlotUnavailable(_) => {}
        e => panic!("Expected SlotUnavailable error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_reserve_after_cancel_is_rejected() {
    let mut ctx = TestContext::new();
    let student_id = Uuid::new_v4();
    let slot_id = Uuid::new_v4();

    // The slot reopened after cancellation, but the student's cancelled
    // reservation still blocks a second attempt.
    ctx.slot_repo
        .expect_get_slot_by_id()
        .with(predicate::eq(slot_id))
        .returning(move |id| Ok(Some(db_slot(id, true))));

    ctx.reservation_repo
        .expect_get_reservation_by_student_and_slot()
        .with(predicate::eq(student_id), predicate::eq(slot_id))
        .returning(move |student_id, slot_id| {
            Ok(Some(db_reservation(student_id, slot_id, "CANCELLED")))
        });

    ctx.reservation_repo
        .expect_create_reservation()
        .times(0)
        .returning(|_, _, _| panic!("Should not be called"));

    let result = test_reserve_slot_wrapper(&mut ctx, student_id, slot_id).await;

    match result.unwrap_err().0 {
        TutorError::DuplicateReservation(_) => {}
        e => panic!("Expected DuplicateReservation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_reserve_with_active_reservation_is_rejected() {
    let mut ctx = TestContext::new();
    let student_id = Uuid::new_v4();
    let slot_id = Uuid::new_v4();

    ctx.slot_repo
        .expect_get_slot_by_id()
        .returning(move |id| Ok(Some(db_slot(id, true))));

    ctx.reservation_repo
        .expect_get_reservation_by_student_and_slot()
        .returning(move |student_id, slot_id| {
            Ok(Some(db_reservation(student_id, slot_id, "ACTIVE")))
        });

    let result = test_reserve_slot_wrapper(&mut ctx, student_id, slot_id).await;

    match result.unwrap_err().0 {
        TutorError::DuplicateReservation(_) => {}
        e => panic!("Expected DuplicateReservation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_cancel_reservation_reopens_slot() {
    let mut ctx = TestContext::new();
    let student_id = Uuid::new_v4();
    let slot_id = Uuid::new_v4();
    let reservation_id = Uuid::new_v4();

    ctx.reservation_repo
        .expect_get_reservation_by_id()
        .with(predicate::eq(reservation_id))
        .returning(move |id| {
            let mut row = db_reservation(student_id, slot_id, "ACTIVE");
            row.id = id;
            Ok(Some(row))
        });

    ctx.reservation_repo
        .expect_set_reservation_status()
        .with(predicate::eq(reservation_id), predicate::eq("CANCELLED"))
        .times(1)
        .returning(|_, _| Ok(()));

    ctx.slot_repo
        .expect_set_slot_availability()
        .with(predicate::eq(slot_id), predicate::eq(true))
        .times(1)
        .returning(|_, _| Ok(()));

    let result = test_cancel_reservation_wrapper(&mut ctx, student_id, reservation_id).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_cancel_missing_reservation_is_not_found() {
    let mut ctx = TestContext::new();
    let reservation_id = Uuid::new_v4();

    ctx.reservation_repo
        .expect_get_reservation_by_id()
        .with(predicate::eq(reservation_id))
        .returning(|_| Ok(None));

    let result = test_cancel_reservation_wrapper(&mut ctx, Uuid::new_v4(), reservation_id).await;

    match result.unwrap_err().0 {
        TutorError::NotFound(_) => {}
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_cancel_other_students_reservation_is_forbidden() {
    let mut ctx = TestContext::new();
    let owner_id = Uuid::new_v4();
    let reservation_id = Uuid::new_v4();

    ctx.reservation_repo
        .expect_get_reservation_by_id()
        .returning(move |id| {
            let mut row = db_reservation(owner_id, Uuid::new_v4(), "ACTIVE");
            row.id = id;
            Ok(Some(row))
        });

    ctx.reservation_repo
        .expect_set_reservation_status()
        .times(0)
        .returning(|_, _| panic!("Should not be called"));

    let result = test_cancel_reservation_wrapper(&mut ctx, Uuid::new_v4(), reservation_id).await;

    match result.unwrap_err().0 {
        TutorError::NotOwner(_) => {}
        e => panic!("Expected NotOwner error, got: {:?}", e),
    }
}
