pub mod admin;
pub mod auth;
pub mod files;
pub mod public;
pub mod student;
pub mod teacher;

use tutorhub_core::errors::TutorError;

/// Converts a transaction begin/commit failure into the domain error.
pub(crate) fn tx_err(e: sqlx::Error) -> TutorError {
    TutorError::Database(e.into())
}
