use axum::{extract::State, Json};
use std::sync::Arc;
use tutorhub_core::{
    errors::TutorError,
    models::registration::TeacherRegisterRequest,
    models::user::{AuthRequest, AuthResponse, UserRole},
    slots,
};

use crate::{
    handlers::tx_err,
    middleware::{auth, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<AuthRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let account = tutorhub_db::repositories::user::get_user_by_username(
        &state.db_pool,
        &payload.username,
    )
    .await
    .map_err(TutorError::Database)?
    .ok_or_else(|| TutorError::Authentication("Invalid username or password".to_string()))?;

    let is_valid = auth::verify_password(&payload.password, &account.password)
        .map_err(TutorError::Database)?;
    if !is_valid || !account.enabled {
        return Err(AppError(TutorError::Authentication(
            "Invalid username or password".to_string(),
        )));
    }

    let token = auth::issue_token(&state.db_pool, account.id).await?;

    let response = AuthResponse {
        token,
        username: account.username,
        role: UserRole::parse(&account.role)?,
        user_id: account.id,
    };

    Ok(Json(response))
}

/// Direct teacher self-registration: account, profile, skills, and
/// availability slots in one request, returning a login token.
#[axum::debug_handler]
pub async fn register_teacher(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<TeacherRegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    if tutorhub_db::repositories::user::exists_by_username(&state.db_pool, &payload.username)
        .await
        .map_err(TutorError::Database)?
    {
        return Err(AppError(TutorError::Conflict(
            "Username already taken".to_string(),
        )));
    }

    if tutorhub_db::repositories::user::exists_by_email(&state.db_pool, &payload.email)
        .await
        .map_err(TutorError::Database)?
    {
        return Err(AppError(TutorError::Conflict(
            "Email already registered".to_string(),
        )));
    }

    let password_hash = auth::hash_password(&payload.password).map_err(TutorError::Database)?;

    // Slot ranges are validated up front so an invalid range fails the
    // whole registration before anything is written.
    let periods = slots::expand_ranges(&payload.slot_ranges)?;

    let mut tx = state.db_pool.begin().await.map_err(tx_err)?;

    let account = tutorhub_db::repositories::user::create_user(
        &mut *tx,
        &payload.username,
        &password_hash,
        &payload.email,
        UserRole::Teacher.as_str(),
    )
    .await
    .map_err(TutorError::Database)?;

    let teacher = tutorhub_db::repositories::profile::create_teacher(
        &mut *tx,
        account.id,
        &payload.cv_url,
    )
    .await
    .map_err(TutorError::Database)?;

    for skill_name in &payload.skills {
        tutorhub_db::repositories::skill::create_skill(&mut *tx, teacher.id, skill_name)
            .await
            .map_err(TutorError::Database)?;
    }

    for period in &periods {
        tutorhub_db::repositories::slot::create_slot(&mut *tx, teacher.id, period.start, period.end)
            .await
            .map_err(TutorError::Database)?;
    }

    tx.commit().await.map_err(tx_err)?;

    let token = auth::issue_token(&state.db_pool, account.id).await?;

    tracing::info!("Teacher registered: {}", account.username);

    let response = AuthResponse {
        token,
        username: account.username,
        role: UserRole::Teacher,
        user_id: account.id,
    };

    Ok(Json(response))
}
