use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tutorhub_core::{
    errors::TutorError,
    models::registration::{RegistrationStatusResponse, RegistrationSummary, RequestStatus},
    models::user::{derived_email, AdminTeacherCreateRequest, AdminTeacherCreateResponse, UserRole},
    registration,
};
use uuid::Uuid;

use crate::{
    handlers::tx_err,
    middleware::{auth, error_handling::AppError},
    ApiState,
};

/// Creates a teacher account directly, bypassing the request queue.
#[axum::debug_handler]
pub async fn create_teacher(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<AdminTeacherCreateRequest>,
) -> Result<(StatusCode, Json<AdminTeacherCreateResponse>), AppError> {
    auth::require_admin(&state.db_pool, &headers).await?;

    registration::validate_credentials(&payload.username, &payload.password)?;

    if tutorhub_db::repositories::user::exists_by_username(&state.db_pool, &payload.username)
        .await
        .map_err(TutorError::Database)?
    {
        return Err(AppError(TutorError::Conflict(
            "Username already taken".to_string(),
        )));
    }

    let email = derived_email(&payload.username);
    if tutorhub_db::repositories::user::exists_by_email(&state.db_pool, &email)
        .await
        .map_err(TutorError::Database)?
    {
        return Err(AppError(TutorError::Conflict(
            "Email already registered".to_string(),
        )));
    }

    let password_hash = auth::hash_password(&payload.password).map_err(TutorError::Database)?;
    let cv_url = match payload.cv_url.as_deref() {
        Some(url) if !registration::is_blank(url) => url.to_string(),
        _ => registration::DEFAULT_CV_URL.to_string(),
    };

    let mut tx = state.db_pool.begin().await.map_err(tx_err)?;

    let account = tutorhub_db::repositories::user::create_user(
        &mut *tx,
        &payload.username,
        &password_hash,
        &email,
        UserRole::Teacher.as_str(),
    )
    .await
    .map_err(TutorError::Database)?;

    let teacher =
        tutorhub_db::repositories::profile::create_teacher(&mut *tx, account.id, &cv_url)
            .await
            .map_err(TutorError::Database)?;

    tx.commit().await.map_err(tx_err)?;

    tracing::info!("Teacher created by admin: {}", account.username);

    let response = AdminTeacherCreateResponse {
        user_id: account.id,
        teacher_id: teacher.id,
        username: account.username,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Approves a pending registration request, materializing the teacher's
/// account, profile, and skills.
#[axum::debug_handler]
pub async fn approve_request(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(request_id): Path<Uuid>,
) -> Result<Json<RegistrationStatusResponse>, AppError> {
    auth::require_admin(&state.db_pool, &headers).await?;

    let mut tx = state.db_pool.begin().await.map_err(tx_err)?;

    let request =
        tutorhub_db::repositories::registration::get_request_by_id(&mut *tx, request_id)
            .await
            .map_err(TutorError::Database)?
            .ok_or_else(|| TutorError::NotFound("Registration request not found".to_string()))?
            .into_domain()?;

    if request.status != RequestStatus::Pending {
        return Err(AppError(TutorError::InvalidState(
            "Registration request is not pending".to_string(),
        )));
    }

    if tutorhub_db::repositories::user::exists_by_username(&mut *tx, &request.username)
        .await
        .map_err(TutorError::Database)?
    {
        return Err(AppError(TutorError::Conflict(
            "Username already taken".to_string(),
        )));
    }

    let email = derived_email(&request.username);
    if tutorhub_db::repositories::user::exists_by_email(&mut *tx, &email)
        .await
        .map_err(TutorError::Database)?
    {
        return Err(AppError(TutorError::Conflict(
            "Email already registered".to_string(),
        )));
    }

    // The password was hashed at submission; approval stores it as-is.
    let account = tutorhub_db::repositories::user::create_user(
        &mut *tx,
        &request.username,
        &request.password_hash,
        &email,
        UserRole::Teacher.as_str(),
    )
    .await
    .map_err(TutorError::Database)?;

    let teacher =
        tutorhub_db::repositories::profile::create_teacher(&mut *tx, account.id, &request.cv_url)
            .await
            .map_err(TutorError::Database)?;

    // Skill import has no duplicate guard; replaying it would double-add.
    for skill_name in &request.skills {
        tutorhub_db::repositories::skill::create_skill(&mut *tx, teacher.id, skill_name)
            .await
            .map_err(TutorError::Database)?;
    }

    tutorhub_db::repositories::registration::set_request_status(
        &mut *tx,
        request.id,
        RequestStatus::Approved.as_str(),
    )
    .await
    .map_err(TutorError::Database)?;

    tx.commit().await.map_err(tx_err)?;

    tracing::info!("Teacher registration request approved: {}", request.id);

    let response = RegistrationStatusResponse {
        request_id: request.id,
        username: request.username,
        status: RequestStatus::Approved,
    };

    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
pub struct ListRequestsQuery {
    pub status: Option<String>,
}

#[axum::debug_handler]
pub async fn list_requests(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Query(query): Query<ListRequestsQuery>,
) -> Result<Json<Vec<RegistrationSummary>>, AppError> {
    auth::require_admin(&state.db_pool, &headers).await?;

    let rows = match query.status.as_deref() {
        None => tutorhub_db::repositories::registration::list_requests(&state.db_pool)
            .await
            .map_err(TutorError::Database)?,
        Some(value) if registration::is_blank(value) => {
            tutorhub_db::repositories::registration::list_requests(&state.db_pool)
                .await
                .map_err(TutorError::Database)?
        }
        Some(value) => {
            let status = RequestStatus::parse(value)?;
            tutorhub_db::repositories::registration::list_requests_by_status(
                &state.db_pool,
                status.as_str(),
            )
            .await
            .map_err(TutorError::Database)?
        }
    };

    let mut summaries = Vec::with_capacity(rows.len());
    for row in rows {
        let request = row.into_domain()?;
        summaries.push(RegistrationSummary {
            request_id: request.id,
            username: request.username,
            cv_url: request.cv_url,
            skills: request.skills,
            status: request.status,
            created_at: request.created_at,
        });
    }

    Ok(Json(summaries))
}
