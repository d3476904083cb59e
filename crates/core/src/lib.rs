//! # TutorHub Core
//!
//! Domain types and pure business rules for the TutorHub booking service.
//! This crate has no I/O: persistence and HTTP live in `tutorhub-db` and
//! `tutorhub-api`. What lives here is everything that can be checked
//! without a database:
//!
//! - **Models**: users, teachers, students, skills, slots, reservations,
//!   and teacher registration requests, plus the request/response DTOs
//! - **Slots**: expansion of a time range into one-hour availability slots
//! - **Reservation**: the guards enforcing slot availability and the
//!   strict one-reservation-per-student-and-slot rule
//! - **Registration**: validation and skill normalization for the teacher
//!   registration workflow

pub mod errors;
pub mod models;
pub mod registration;
pub mod reservation;
pub mod slots;
