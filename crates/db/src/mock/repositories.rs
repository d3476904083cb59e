use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::{
    DbRegistrationRequest, DbReservation, DbSkill, DbSlot, DbStudent, DbTeacher, DbUser,
};

// Mock repositories for testing
mock! {
    pub UserRepo {
        pub async fn create_user(
            &self,
            username: &'static str,
            password_hash: &'static str,
            email: &'static str,
            role: &'static str,
        ) -> eyre::Result<DbUser>;

        pub async fn get_user_by_id(&self, id: Uuid) -> eyre::Result<Option<DbUser>>;

        pub async fn get_user_by_username(
            &self,
            username: &'static str,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn exists_by_username(&self, username: &'static str) -> eyre::Result<bool>;

        pub async fn exists_by_email(&self, email: &'static str) -> eyre::Result<bool>;
    }
}

mock! {
    pub ProfileRepo {
        pub async fn create_student(&self, user_id: Uuid) -> eyre::Result<DbStudent>;

        pub async fn get_student_by_id(&self, id: Uuid) -> eyre::Result<Option<DbStudent>>;

        pub async fn create_teacher(
            &self,
            user_id: Uuid,
            cv_url: &'static str,
        ) -> eyre::Result<DbTeacher>;

        pub async fn get_teacher_by_id(&self, id: Uuid) -> eyre::Result<Option<DbTeacher>>;

        pub async fn list_teachers(&self) -> eyre::Result<Vec<DbTeacher>>;
    }
}

mock! {
    pub SkillRepo {
        pub async fn create_skill(
            &self,
            teacher_id: Uuid,
            skill_name: &'static str,
        ) -> eyre::Result<DbSkill>;

        pub async fn get_skill_by_id(&self, id: Uuid) -> eyre::Result<Option<DbSkill>>;

        pub async fn get_skills_by_teacher_id(
            &self,
            teacher_id: Uuid,
        ) -> eyre::Result<Vec<DbSkill>>;

        pub async fn delete_skill(&self, id: Uuid) -> eyre::Result<()>;
    }
}

mock! {
    pub SlotRepo {
        pub async fn create_slot(
            &self,
            teacher_id: Uuid,
            start_date_time: DateTime<Utc>,
            end_date_time: DateTime<Utc>,
        ) -> eyre::Result<DbSlot>;

        pub async fn get_slot_by_id(&self, id: Uuid) -> eyre::Result<Option<DbSlot>>;

        pub async fn get_slots_by_teacher_id(
            &self,
            teacher_id: Uuid,
        ) -> eyre::Result<Vec<DbSlot>>;

        pub async fn get_available_slots_by_teacher_id(
            &self,
            teacher_id: Uuid,
        ) -> eyre::Result<Vec<DbSlot>>;

        pub async fn set_slot_availability(
            &self,
            id: Uuid,
            available: bool,
        ) -> eyre::Result<()>;

        pub async fn delete_slot(&self, id: Uuid) -> eyre::Result<()>;
    }
}

mock! {
    pub ReservationRepo {
        pub async fn create_reservation(
            &self,
            student_id: Uuid,
            slot_id: Uuid,
            status: &'static str,
        ) -> eyre::Result<DbReservation>;

        pub async fn get_reservation_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbReservation>>;

        pub async fn get_reservation_by_student_and_slot(
            &self,
            student_id: Uuid,
            slot_id: Uuid,
        ) -> eyre::Result<Option<DbReservation>>;

        pub async fn get_reservations_by_student_id(
            &self,
            student_id: Uuid,
        ) -> eyre::Result<Vec<DbReservation>>;

        pub async fn set_reservation_status(
            &self,
            id: Uuid,
            status: &'static str,
        ) -> eyre::Result<()>;
    }
}

mock! {
    pub RegistrationRepo {
        pub async fn create_request(
            &self,
            username: &'static str,
            password_hash: &'static str,
            cv_url: &'static str,
            skills: Vec<String>,
            status: &'static str,
        ) -> eyre::Result<DbRegistrationRequest>;

        pub async fn get_request_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbRegistrationRequest>>;

        pub async fn exists_by_username_and_status(
            &self,
            username: &'static str,
            status: &'static str,
        ) -> eyre::Result<bool>;

        pub async fn list_requests(&self) -> eyre::Result<Vec<DbRegistrationRequest>>;

        pub async fn list_requests_by_status(
            &self,
            status: &'static str,
        ) -> eyre::Result<Vec<DbRegistrationRequest>>;

        pub async fn set_request_status(
            &self,
            id: Uuid,
            status: &'static str,
        ) -> eyre::Result<()>;
    }
}
