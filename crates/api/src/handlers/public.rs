use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::PgPool;
use std::sync::Arc;
use tutorhub_core::{
    errors::{TutorError, TutorResult},
    models::registration::{RegistrationStatusResponse, RegistrationSubmitRequest, RequestStatus},
    models::skill::SkillResponse,
    models::slot::SlotResponse,
    models::user::{derived_email, AuthRequest, TeacherResponse, UserRole},
    registration,
};
use tutorhub_db::models::DbTeacher;
use uuid::Uuid;

use crate::{
    handlers::tx_err,
    middleware::{auth, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn register_student(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<AuthRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    registration::validate_credentials(&payload.username, &payload.password)?;

    if tutorhub_db::repositories::user::exists_by_username(&state.db_pool, &payload.username)
        .await
        .map_err(TutorError::Database)?
    {
        return Err(AppError(TutorError::Conflict(
            "Username already taken".to_string(),
        )));
    }

    let password_hash = auth::hash_password(&payload.password).map_err(TutorError::Database)?;
    let email = derived_email(&payload.username);

    let mut tx = state.db_pool.begin().await.map_err(tx_err)?;

    let account = tutorhub_db::repositories::user::create_user(
        &mut *tx,
        &payload.username,
        &password_hash,
        &email,
        UserRole::Student.as_str(),
    )
    .await
    .map_err(TutorError::Database)?;

    tutorhub_db::repositories::profile::create_student(&mut *tx, account.id)
        .await
        .map_err(TutorError::Database)?;

    tx.commit().await.map_err(tx_err)?;

    tracing::info!("Student registered: {}", account.username);

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "message": "Student registered successfully" })),
    ))
}

/// Builds the public view of a teacher: account name, CV, skills, and the
/// slots still open for reservation.
pub(crate) async fn teacher_view(pool: &PgPool, teacher: DbTeacher) -> TutorResult<TeacherResponse> {
    let account = tutorhub_db::repositories::user::get_user_by_id(pool, teacher.user_id)
        .await
        .map_err(TutorError::Database)?
        .ok_or_else(|| TutorError::NotFound("Teacher user not found".to_string()))?;

    let skills = tutorhub_db::repositories::skill::get_skills_by_teacher_id(pool, teacher.id)
        .await
        .map_err(TutorError::Database)?;

    let slots =
        tutorhub_db::repositories::slot::get_available_slots_by_teacher_id(pool, teacher.id)
            .await
            .map_err(TutorError::Database)?;

    Ok(TeacherResponse {
        id: teacher.id,
        user_id: teacher.user_id,
        username: account.username,
        cv_url: teacher.cv_url,
        skills: skills
            .into_iter()
            .map(|skill| SkillResponse {
                id: skill.id,
                skill_name: skill.skill_name,
            })
            .collect(),
        available_slots: slots
            .into_iter()
            .map(|slot| SlotResponse {
                id: slot.id,
                start_date_time: slot.start_date_time,
                end_date_time: slot.end_date_time,
                available: slot.available,
                created_at: slot.created_at,
            })
            .collect(),
    })
}

#[axum::debug_handler]
pub async fn list_teachers(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<TeacherResponse>>, AppError> {
    let teachers = tutorhub_db::repositories::profile::list_teachers(&state.db_pool)
        .await
        .map_err(TutorError::Database)?;

    let mut views = Vec::with_capacity(teachers.len());
    for teacher in teachers {
        views.push(teacher_view(&state.db_pool, teacher).await?);
    }

    Ok(Json(views))
}

#[axum::debug_handler]
pub async fn get_teacher(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeacherResponse>, AppError> {
    let teacher = tutorhub_db::repositories::profile::get_teacher_by_id(&state.db_pool, id)
        .await
        .map_err(TutorError::Database)?
        .ok_or_else(|| TutorError::NotFound(format!("Teacher with ID {} not found", id)))?;

    let view = teacher_view(&state.db_pool, teacher).await?;

    Ok(Json(view))
}

/// Submits a teacher registration request for admin review.
#[axum::debug_handler]
pub async fn submit_teacher_request(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<RegistrationSubmitRequest>,
) -> Result<(StatusCode, Json<RegistrationStatusResponse>), AppError> {
    registration::validate_submission(&payload)?;

    if tutorhub_db::repositories::user::exists_by_username(&state.db_pool, &payload.username)
        .await
        .map_err(TutorError::Database)?
    {
        return Err(AppError(TutorError::Conflict(
            "Username already taken".to_string(),
        )));
    }

    // Only a PENDING request collides; an approved or rejected request
    // does not block a new submission.
    if tutorhub_db::repositories::registration::exists_by_username_and_status(
        &state.db_pool,
        &payload.username,
        RequestStatus::Pending.as_str(),
    )
    .await
    .map_err(TutorError::Database)?
    {
        return Err(AppError(TutorError::Conflict(
            "Registration request already pending".to_string(),
        )));
    }

    let password_hash = auth::hash_password(&payload.password).map_err(TutorError::Database)?;
    let skills = registration::normalize_skills(&payload.skills);

    let request = tutorhub_db::repositories::registration::create_request(
        &state.db_pool,
        &payload.username,
        &password_hash,
        &payload.cv_url,
        &skills,
        RequestStatus::Pending.as_str(),
    )
    .await
    .map_err(TutorError::Database)?;

    tracing::info!("Teacher registration request created: {}", request.id);

    let response = RegistrationStatusResponse {
        request_id: request.id,
        username: request.username,
        status: RequestStatus::Pending,
    };

    Ok((StatusCode::CREATED, Json(response)))
}
