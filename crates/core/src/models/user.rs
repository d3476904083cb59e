use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{TutorError, TutorResult};

/// Role attached to a user account. Each user owns exactly one matching
/// profile row (student, teacher, or admin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Student,
    Teacher,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "STUDENT",
            UserRole::Teacher => "TEACHER",
            UserRole::Admin => "ADMIN",
        }
    }

    pub fn parse(value: &str) -> TutorResult<Self> {
        match value {
            "STUDENT" => Ok(UserRole::Student),
            "TEACHER" => Ok(UserRole::Teacher),
            "ADMIN" => Ok(UserRole::Admin),
            other => Err(TutorError::Validation(format!("Unknown role: {other}"))),
        }
    }
}

/// Domain for synthetic email addresses when none is supplied.
pub const DEFAULT_EMAIL_DOMAIN: &str = "@trs.local";

/// Builds the synthetic `<username>@trs.local` address. Part of the
/// stored-data contract, so the format must not change.
pub fn derived_email(username: &str) -> String {
    format!("{username}{DEFAULT_EMAIL_DOMAIN}")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Opaque credential hash. Hashing and verification happen at the
    /// boundary; the core never sees a plaintext password.
    pub password: String,
    pub email: String,
    pub role: UserRole,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: Uuid,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: Uuid,
    pub user_id: Uuid,
    pub cv_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub id: Uuid,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    pub role: UserRole,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminTeacherCreateRequest {
    pub username: String,
    pub password: String,
    pub cv_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminTeacherCreateResponse {
    pub user_id: Uuid,
    pub teacher_id: Uuid,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub cv_url: String,
    pub skills: Vec<crate::models::skill::SkillResponse>,
    pub available_slots: Vec<crate::models::slot::SlotResponse>,
}
