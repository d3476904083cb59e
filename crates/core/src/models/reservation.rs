use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{TutorError, TutorResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Active,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Active => "ACTIVE",
            ReservationStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn parse(value: &str) -> TutorResult<Self> {
        match value {
            "ACTIVE" => Ok(ReservationStatus::Active),
            "CANCELLED" => Ok(ReservationStatus::Cancelled),
            other => Err(TutorError::Validation(format!(
                "Unknown reservation status: {other}"
            ))),
        }
    }
}

/// A student's claim on a slot. Cancelled reservations are kept forever;
/// they still block the same student from re-reserving the slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub student_id: Uuid,
    pub slot_id: Uuid,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub slot_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub slot_id: Uuid,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}
