use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutorhub_core::errors::TutorResult;
use tutorhub_core::models::registration::{RegistrationRequest, RequestStatus};
use tutorhub_core::models::reservation::{Reservation, ReservationStatus};
use tutorhub_core::models::skill::Skill;
use tutorhub_core::models::slot::Slot;
use tutorhub_core::models::user::{Admin, Student, Teacher, User, UserRole};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbUser {
    pub fn into_domain(self) -> TutorResult<User> {
        Ok(User {
            id: self.id,
            username: self.username,
            password: self.password,
            email: self.email,
            role: UserRole::parse(&self.role)?,
            enabled: self.enabled,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStudent {
    pub id: Uuid,
    pub user_id: Uuid,
}

impl From<DbStudent> for Student {
    fn from(row: DbStudent) -> Self {
        Student {
            id: row.id,
            user_id: row.user_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTeacher {
    pub id: Uuid,
    pub user_id: Uuid,
    pub cv_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbTeacher> for Teacher {
    fn from(row: DbTeacher) -> Self {
        Teacher {
            id: row.id,
            user_id: row.user_id,
            cv_url: row.cv_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAdmin {
    pub id: Uuid,
    pub user_id: Uuid,
}

impl From<DbAdmin> for Admin {
    fn from(row: DbAdmin) -> Self {
        Admin {
            id: row.id,
            user_id: row.user_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSkill {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub skill_name: String,
}

impl From<DbSkill> for Skill {
    fn from(row: DbSkill) -> Self {
        Skill {
            id: row.id,
            teacher_id: row.teacher_id,
            skill_name: row.skill_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSlot {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

impl From<DbSlot> for Slot {
    fn from(row: DbSlot) -> Self {
        Slot {
            id: row.id,
            teacher_id: row.teacher_id,
            start_date_time: row.start_date_time,
            end_date_time: row.end_date_time,
            available: row.available,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbReservation {
    pub id: Uuid,
    pub student_id: Uuid,
    pub slot_id: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl DbReservation {
    pub fn into_domain(self) -> TutorResult<Reservation> {
        Ok(Reservation {
            id: self.id,
            student_id: self.student_id,
            slot_id: self.slot_id,
            status: ReservationStatus::parse(&self.status)?,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbRegistrationRequest {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub cv_url: String,
    pub skills: Vec<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbRegistrationRequest {
    pub fn into_domain(self) -> TutorResult<RegistrationRequest> {
        Ok(RegistrationRequest {
            id: self.id,
            username: self.username,
            password_hash: self.password_hash,
            cv_url: self.cv_url,
            skills: self.skills,
            status: RequestStatus::parse(&self.status)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAuthToken {
    pub token: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}
