//! Validation and normalization rules for the teacher registration
//! workflow. The workflow itself (persistence, account materialization)
//! lives behind the admin handlers; the rules here are pure.

use crate::errors::{TutorError, TutorResult};
use crate::models::registration::RegistrationSubmitRequest;

/// Sentinel CV reference used when an admin creates a teacher without one.
pub const DEFAULT_CV_URL: &str = "pending";

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates a public registration submission: username, password, and
/// cv_url are all required.
pub fn validate_submission(request: &RegistrationSubmitRequest) -> TutorResult<()> {
    if is_blank(&request.username) || is_blank(&request.password) || is_blank(&request.cv_url) {
        return Err(TutorError::Validation(
            "Username, password, and cv_url are required".to_string(),
        ));
    }

    Ok(())
}

/// Validates the admin direct-create path, where cv_url is optional.
pub fn validate_credentials(username: &str, password: &str) -> TutorResult<()> {
    if is_blank(username) || is_blank(password) {
        return Err(TutorError::Validation(
            "Username and password are required".to_string(),
        ));
    }

    Ok(())
}

/// Normalizes a submitted skill list: trims entries, drops blanks, and
/// removes exact duplicates keeping first-occurrence order. The
/// comparison is case-sensitive, so "Math" and "math" both survive.
pub fn normalize_skills(skills: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for skill in skills {
        if is_blank(skill) {
            continue;
        }
        let trimmed = skill.trim().to_string();
        if !normalized.contains(&trimmed) {
            normalized.push(trimmed);
        }
    }
    normalized
}
