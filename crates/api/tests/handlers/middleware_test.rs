use argon2::PasswordVerifier;
use tutorhub_api::middleware::auth;
use tutorhub_api::middleware::error_handling::map_error;
use tutorhub_core::errors::TutorError;

#[tokio::test]
async fn test_error_handling_not_found() {
    let error = TutorError::NotFound("Resource not found".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    let error = TutorError::Validation("Invalid input".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_invalid_range() {
    let error = TutorError::InvalidRange("Start time must be before end time".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_conflict() {
    let error = TutorError::Conflict("Username already taken".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_error_handling_slot_unavailable() {
    let error = TutorError::SlotUnavailable("slot id".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_error_handling_duplicate_reservation() {
    let error = TutorError::DuplicateReservation("already reserved".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_error_handling_invalid_state() {
    let error = TutorError::InvalidState("Registration request is not pending".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_error_handling_not_owner() {
    let error = TutorError::NotOwner("Skill does not belong to this teacher".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_error_handling_authentication() {
    let error = TutorError::Authentication("Invalid username or password".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_error_handling_database() {
    let error = TutorError::Database(eyre::eyre!("Database error"));

    let response = map_error(error);

    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_error_handling_internal() {
    let error = TutorError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    let response = map_error(error);

    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_hash_password() {
    let password = "test_password";
    let hashed = auth::hash_password(password).unwrap();

    assert_ne!(hashed, password);
    assert!(hashed.starts_with("$argon2"));
}

#[tokio::test]
async fn test_verify_password_round_trip() {
    let password = "test_password";
    let hashed = auth::hash_password(password).unwrap();

    assert!(auth::verify_password(password, &hashed).unwrap());
    assert!(!auth::verify_password("wrong_password", &hashed).unwrap());

    // Cross-check against argon2 directly.
    let argon2 = argon2::Argon2::default();
    let parsed_hash = argon2::PasswordHash::new(&hashed).unwrap();
    assert!(argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok());
}

#[tokio::test]
async fn test_generated_tokens_are_unique_hex() {
    let first = auth::generate_token();
    let second = auth::generate_token();

    assert_eq!(first.len(), 64);
    assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_bearer_token_extraction() {
    let mut headers = axum::http::HeaderMap::new();
    headers.insert(
        axum::http::header::AUTHORIZATION,
        "Bearer abc123".parse().unwrap(),
    );
    assert_eq!(auth::bearer_token(&headers).unwrap(), "abc123");

    let mut basic = axum::http::HeaderMap::new();
    basic.insert(
        axum::http::header::AUTHORIZATION,
        "Basic abc123".parse().unwrap(),
    );
    assert!(matches!(
        auth::bearer_token(&basic),
        Err(TutorError::Authentication(_))
    ));

    let empty = axum::http::HeaderMap::new();
    assert!(matches!(
        auth::bearer_token(&empty),
        Err(TutorError::Authentication(_))
    ));
}
