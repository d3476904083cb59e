use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;
use tutorhub_core::{
    errors::TutorError,
    models::skill::{CreateSkillRequest, SkillResponse},
    models::slot::{SlotRangeRequest, SlotRangesRequest, SlotResponse},
    models::user::TeacherResponse,
    slots,
};
use tutorhub_db::models::DbSlot;
use uuid::Uuid;

use crate::{
    handlers::tx_err,
    middleware::{auth, error_handling::AppError},
    ApiState,
};

fn slot_response(slot: DbSlot) -> SlotResponse {
    SlotResponse {
        id: slot.id,
        start_date_time: slot.start_date_time,
        end_date_time: slot.end_date_time,
        available: slot.available,
        created_at: slot.created_at,
    }
}

#[axum::debug_handler]
pub async fn get_profile(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
) -> Result<Json<TeacherResponse>, AppError> {
    let (account, teacher) = auth::current_teacher(&state.db_pool, &headers).await?;

    let skills =
        tutorhub_db::repositories::skill::get_skills_by_teacher_id(&state.db_pool, teacher.id)
            .await
            .map_err(TutorError::Database)?;

    // The profile shows every slot, reserved ones included.
    let teacher_slots =
        tutorhub_db::repositories::slot::get_slots_by_teacher_id(&state.db_pool, teacher.id)
            .await
            .map_err(TutorError::Database)?;

    let response = TeacherResponse {
        id: teacher.id,
        user_id: account.id,
        username: account.username,
        cv_url: teacher.cv_url,
        skills: skills
            .into_iter()
            .map(|skill| SkillResponse {
                id: skill.id,
                skill_name: skill.skill_name,
            })
            .collect(),
        available_slots: teacher_slots.into_iter().map(slot_response).collect(),
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn add_skill(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<CreateSkillRequest>,
) -> Result<(StatusCode, Json<SkillResponse>), AppError> {
    let (_, teacher) = auth::current_teacher(&state.db_pool, &headers).await?;

    let skill = tutorhub_db::repositories::skill::create_skill(
        &state.db_pool,
        teacher.id,
        &payload.skill_name,
    )
    .await
    .map_err(TutorError::Database)?;

    tracing::info!("Skill '{}' added for teacher: {}", skill.skill_name, teacher.id);

    let response = SkillResponse {
        id: skill.id,
        skill_name: skill.skill_name,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[axum::debug_handler]
pub async fn delete_skill(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(skill_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let (_, teacher) = auth::current_teacher(&state.db_pool, &headers).await?;

    let skill = tutorhub_db::repositories::skill::get_skill_by_id(&state.db_pool, skill_id)
        .await
        .map_err(TutorError::Database)?
        .ok_or_else(|| TutorError::NotFound("Skill not found".to_string()))?;

    if skill.teacher_id != teacher.id {
        return Err(AppError(TutorError::NotOwner(
            "Skill does not belong to this teacher".to_string(),
        )));
    }

    tutorhub_db::repositories::skill::delete_skill(&state.db_pool, skill_id)
        .await
        .map_err(TutorError::Database)?;

    tracing::info!("Skill '{}' deleted", skill_id);

    Ok(StatusCode::NO_CONTENT)
}

/// Publishes availability from a single time range, one slot per hour.
#[axum::debug_handler]
pub async fn add_slots_range(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<SlotRangeRequest>,
) -> Result<(StatusCode, Json<Vec<SlotResponse>>), AppError> {
    let (_, teacher) = auth::current_teacher(&state.db_pool, &headers).await?;

    let created = create_slots_for_range(&state, teacher.id, &payload).await?;

    tracing::info!("Added {} slots for teacher: {}", created.len(), teacher.id);

    Ok((StatusCode::CREATED, Json(created)))
}

/// Publishes availability from several ranges. Ranges are processed in
/// order and the first failure aborts the batch; slots from earlier
/// ranges stay committed.
#[axum::debug_handler]
pub async fn add_slots_ranges(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<SlotRangesRequest>,
) -> Result<(StatusCode, Json<Vec<SlotResponse>>), AppError> {
    let (_, teacher) = auth::current_teacher(&state.db_pool, &headers).await?;

    let mut created = Vec::new();
    for range in &payload.ranges {
        created.extend(create_slots_for_range(&state, teacher.id, range).await?);
    }

    tracing::info!("Added {} slots for teacher: {}", created.len(), teacher.id);

    Ok((StatusCode::CREATED, Json(created)))
}

async fn create_slots_for_range(
    state: &ApiState,
    teacher_id: Uuid,
    range: &SlotRangeRequest,
) -> Result<Vec<SlotResponse>, AppError> {
    let periods = slots::expand_range(range)?;

    let mut tx = state.db_pool.begin().await.map_err(tx_err)?;

    let mut created = Vec::with_capacity(periods.len());
    for period in periods {
        let slot = tutorhub_db::repositories::slot::create_slot(
            &mut *tx,
            teacher_id,
            period.start,
            period.end,
        )
        .await
        .map_err(TutorError::Database)?;
        created.push(slot_response(slot));
    }

    tx.commit().await.map_err(tx_err)?;

    Ok(created)
}

#[axum::debug_handler]
pub async fn list_slots(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<SlotResponse>>, AppError> {
    let (_, teacher) = auth::current_teacher(&state.db_pool, &headers).await?;

    let teacher_slots =
        tutorhub_db::repositories::slot::get_slots_by_teacher_id(&state.db_pool, teacher.id)
            .await
            .map_err(TutorError::Database)?;

    Ok(Json(teacher_slots.into_iter().map(slot_response).collect()))
}

#[axum::debug_handler]
pub async fn delete_slot(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(slot_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let (_, teacher) = auth::current_teacher(&state.db_pool, &headers).await?;

    let slot = tutorhub_db::repositories::slot::get_slot_by_id(&state.db_pool, slot_id)
        .await
        .map_err(TutorError::Database)?
        .ok_or_else(|| TutorError::NotFound("Slot not found".to_string()))?;

    if slot.teacher_id != teacher.id {
        return Err(AppError(TutorError::NotOwner(
            "Slot does not belong to this teacher".to_string(),
        )));
    }

    tutorhub_db::repositories::slot::delete_slot(&state.db_pool, slot_id)
        .await
        .map_err(TutorError::Database)?;

    tracing::info!("Slot {} deleted", slot_id);

    Ok(StatusCode::NO_CONTENT)
}
