use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    /// Original file name, used only for its extension.
    pub file_name: String,
}

#[axum::debug_handler]
pub async fn upload(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<UploadQuery>,
    body: Bytes,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let stored_name = state.file_store.store(&body, &query.file_name).await?;
    let url = state.file_store.url_for(&stored_name);

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "file_name": stored_name, "url": url })),
    ))
}

#[axum::debug_handler]
pub async fn download(
    State(state): State<Arc<ApiState>>,
    Path(file_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = state.file_store.retrieve(&file_name).await?;

    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        bytes,
    ))
}
