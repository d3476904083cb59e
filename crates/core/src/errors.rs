use thiserror::Error;

#[derive(Error, Debug)]
pub enum TutorError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid slot range: {0}")]
    InvalidRange(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not the owner of this resource: {0}")]
    NotOwner(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Slot is not available: {0}")]
    SlotUnavailable(String),

    #[error("Duplicate reservation: {0}")]
    DuplicateReservation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type TutorResult<T> = Result<T, TutorError>;
