use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{TutorError, TutorResult};
use crate::models::slot::SlotRangeRequest;

/// Lifecycle of a teacher registration request. PENDING is the only
/// non-terminal state. REJECTED is representable but no endpoint currently
/// produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::Approved => "APPROVED",
            RequestStatus::Rejected => "REJECTED",
        }
    }

    pub fn parse(value: &str) -> TutorResult<Self> {
        match value.trim().to_uppercase().as_str() {
            "PENDING" => Ok(RequestStatus::Pending),
            "APPROVED" => Ok(RequestStatus::Approved),
            "REJECTED" => Ok(RequestStatus::Rejected),
            other => Err(TutorError::Validation(format!(
                "Unknown request status: {other}"
            ))),
        }
    }
}

/// A pending application to become a teacher, awaiting admin review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub cv_url: String,
    pub skills: Vec<String>,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationSubmitRequest {
    pub username: String,
    pub password: String,
    pub cv_url: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationStatusResponse {
    pub request_id: Uuid,
    pub username: String,
    pub status: RequestStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationSummary {
    pub request_id: Uuid,
    pub username: String,
    pub cv_url: String,
    pub skills: Vec<String>,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

/// Direct teacher self-registration, bypassing the admin queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherRegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub cv_url: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub slot_ranges: Vec<SlotRangeRequest>,
}
