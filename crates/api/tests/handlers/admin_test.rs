use axum::Json;
use chrono::Utc;
use mockall::predicate;
use tutorhub_core::{
    errors::TutorError,
    models::{
        registration::{RegistrationStatusResponse, RegistrationSummary, RequestStatus},
        user::{derived_email, AdminTeacherCreateRequest, AdminTeacherCreateResponse},
    },
    registration::{validate_credentials, DEFAULT_CV_URL},
};
use tutorhub_db::models::{DbRegistrationRequest, DbSkill, DbTeacher, DbUser};
use uuid::Uuid;

use crate::test_utils::TestContext;
use tutorhub_api::middleware::error_handling::AppError;

fn db_request(username: &str, status: &str, skills: Vec<String>) -> DbRegistrationRequest {
    let now = Utc::now();
    DbRegistrationRequest {
        id: Uuid::new_v4(),
        username: username.to_string(),
        password_hash: "$argon2id$stored-hash".to_string(),
        cv_url: "http://example.com/cv.pdf".to_string(),
        skills,
        status: status.to_string(),
        created_at: now,
        updated_at: now,
    }
}

fn db_user(id: Uuid, username: &str, role: &str) -> DbUser {
    let now = Utc::now();
    DbUser {
        id,
        username: username.to_string(),
        password: "$argon2id$stored-hash".to_string(),
        email: derived_email(username),
        role: role.to_string(),
        enabled: true,
        created_at: now,
        updated_at: now,
    }
}

fn leak(value: String) -> &'static str {
    Box::leak(value.into_boxed_str())
}

// Wrapper for the approval flow: guard the request state, materialize
// the user, teacher profile, and skills, then mark the request approved.
async fn test_approve_request_wrapper(
    ctx: &mut TestContext,
    request_id: Uuid,
) -> Result<Json<RegistrationStatusResponse>, AppError> {
    let request = ctx
        .registration_repo
        .get_request_by_id(request_id)
        .await?
        .ok_or_else(|| {
            AppError(TutorError::NotFound(
                "Registration request not found".to_string(),
            ))
        })?;

    if request.status != "PENDING" {
        return Err(AppError(TutorError::InvalidState(
            "Registration request is not pending".to_string(),
        )));
    }

    let username = leak(request.username.clone());
    if ctx.user_repo.exists_by_username(username).await? {
        return Err(AppError(TutorError::Conflict(
            "Username already taken".to_string(),
        )));
    }

    let email = leak(derived_email(username));
    if ctx.user_repo.exists_by_email(email).await? {
        return Err(AppError(TutorError::Conflict(
            "Email already taken".to_string(),
        )));
    }

    // The password was hashed at submission time; stored hash is reused.
    let account = ctx
        .user_repo
        .create_user(username, leak(request.password_hash.clone()), email, "TEACHER")
        .await?;
    let teacher = ctx
        .profile_repo
        .create_teacher(account.id, leak(request.cv_url.clone()))
        .await?;

    for skill in &request.skills {
        ctx.skill_repo
            .create_skill(teacher.id, leak(skill.clone()))
            .await?;
    }

    ctx.registration_repo
        .set_request_status(request_id, "APPROVED")
        .await?;

    Ok(Json(RegistrationStatusResponse {
        request_id,
        username: request.username,
        status: RequestStatus::Approved,
    }))
}

// Wrapper for listing requests with an optional status filter.
async fn test_list_requests_wrapper(
    ctx: &mut TestContext,
    status: Option<String>,
) -> Result<Json<Vec<RegistrationSummary>>, AppError> {
    let rows = match status.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(raw) => {
            let parsed = RequestStatus::parse(raw)?;
            ctx.registration_repo
                .list_requests_by_status(parsed.as_str())
                .await?
        }
        None => ctx.registration_repo.list_requests().await?,
    };

    let mut summaries = Vec::with_capacity(rows.len());
    for row in rows {
        let request = row.into_domain()?;
        summaries.push(RegistrationSummary {
            request_id: request.id,
            username: request.username,
            cv_url: request.cv_url,
            skills: request.skills,
            status: request.status,
            created_at: request.created_at,
        });
    }

    Ok(Json(summaries))
}

// Wrapper for direct teacher creation by an admin.
async fn test_create_teacher_wrapper(
    ctx: &mut TestContext,
    request: AdminTeacherCreateRequest,
) -> Result<Json<AdminTeacherCreateResponse>, AppError> {
    validate_credentials(&request.username, &request.password)?;

    let username = leak(request.username.clone());
    if ctx.user_repo.exists_by_username(username).await? {
        return Err(AppError(TutorError::Conflict(
            "Username already taken".to_string(),
        )));
    }

    let email = leak(derived_email(username));
    if ctx.user_repo.exists_by_email(email).await? {
        return Err(AppError(TutorError::Conflict(
            "Email already taken".to_string(),
        )));
    }

    let cv_url = match request.cv_url.as_deref() {
        Some(url) if !url.trim().is_empty() => url.to_string(),
        _ => DEFAULT_CV_URL.to_string(),
    };

    let account = ctx
        .user_repo
        .create_user(username, leak("hashed".to_string()), email, "TEACHER")
        .await?;
    let teacher = ctx
        .profile_repo
        .create_teacher(account.id, leak(cv_url))
        .await?;

    Ok(Json(AdminTeacherCreateResponse {
        user_id: account.id,
        teacher_id: teacher.id,
        username: request.username,
    }))
}

#[tokio::test]
async fn test_approve_request_success() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let teacher_id = Uuid::new_v4();
    let now = Utc::now();

    let request = db_request(
        "newteacher",
        "PENDING",
        vec!["Math".to_string(), "Physics".to_string()],
    );
    let request_id = request.id;

    ctx.registration_repo
        .expect_get_request_by_id()
        .with(predicate::eq(request_id))
        .returning(move |_| Ok(Some(request.clone())));

    ctx.user_repo
        .expect_exists_by_username()
        .with(predicate::eq("newteacher"))
        .returning(|_| Ok(false));

    ctx.user_repo
        .expect_exists_by_email()
        .with(predicate::eq("newteacher@trs.local"))
        .returning(|_| Ok(false));

    ctx.user_repo
        .expect_create_user()
        .with(
            predicate::eq("newteacher"),
            predicate::eq("$argon2id$stored-hash"),
            predicate::eq("newteacher@trs.local"),
            predicate::eq("TEACHER"),
        )
        .times(1)
        .returning(move |username, _, _, role| Ok(db_user(user_id, username, role)));

    ctx.profile_repo
        .expect_create_teacher()
        .with(predicate::eq(user_id), predicate::always())
        .times(1)
        .returning(move |user_id, cv_url| {
            Ok(DbTeacher {
                id: teacher_id,
                user_id,
                cv_url: cv_url.to_string(),
                created_at: now,
                updated_at: now,
            })
        });

    // One skill row per skill on the request.
    ctx.skill_repo
        .expect_create_skill()
        .with(predicate::eq(teacher_id), predicate::always())
        .times(2)
        .returning(|teacher_id, skill_name| {
            Ok(DbSkill {
                id: Uuid::new_v4(),
                teacher_id,
                skill_name: skill_name.to_string(),
            })
        });

    ctx.registration_repo
        .expect_set_request_status()
        .with(predicate::eq(request_id), predicate::eq("APPROVED"))
        .times(1)
        .returning(|_, _| Ok(()));

    let result = test_approve_request_wrapper(&mut ctx, request_id).await;

    let response = result.unwrap();
    assert_eq!(response.0.username, "newteacher");
    assert_eq!(response.0.status, RequestStatus::Approved);
}

#[tokio::test]
async fn test_approve_missing_request_is_not_found() {
    let mut ctx = TestContext::new();
    let request_id = Uuid::new_v4();

    ctx.registration_repo
        .expect_get_request_by_id()
        .with(predicate::eq(request_id))
        .returning(|_| Ok(None));

    let result = test_approve_request_wrapper(&mut ctx, request_id).await;

    match result.unwrap_err().0 {
        TutorError::NotFound(_) => {}
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_approve_already_approved_request_is_rejected() {
    let mut ctx = TestContext::new();
    let request = db_request("oldteacher", "APPROVED", vec![]);
    let request_id = request.id;

    ctx.registration_repo
        .expect_get_request_by_id()
        .returning(move |_| Ok(Some(request.clone())));

    // No identity writes may happen for a non-pending request.
    ctx.user_repo
        .expect_create_user()
        .times(0)
        .returning(|_, _, _, _| panic!("Should not be called"));

    ctx.registration_repo
        .expect_set_request_status()
        .times(0)
        .returning(|_, _| panic!("Should not be called"));

    let result = test_approve_request_wrapper(&mut ctx, request_id).await;

    match result.unwrap_err().0 {
        TutorError::InvalidState(_) => {}
        e => panic!("Expected InvalidState error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_approve_with_taken_username_is_conflict() {
    let mut ctx = TestContext::new();
    let request = db_request("taken", "PENDING", vec![]);
    let request_id = request.id;

    ctx.registration_repo
        .expect_get_request_by_id()
        .returning(move |_| Ok(Some(request.clone())));

    ctx.user_repo
        .expect_exists_by_username()
        .with(predicate::eq("taken"))
        .returning(|_| Ok(true));

    ctx.user_repo
        .expect_create_user()
        .times(0)
        .returning(|_, _, _, _| panic!("Should not be called"));

    let result = test_approve_request_wrapper(&mut ctx, request_id).await;

    match result.unwrap_err().0 {
        TutorError::Conflict(_) => {}
        e => panic!("Expected Conflict error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_list_requests_without_filter_returns_all() {
    let mut ctx = TestContext::new();

    ctx.registration_repo.expect_list_requests().returning(|| {
        Ok(vec![
            db_request("alice", "PENDING", vec![]),
            db_request("bob", "APPROVED", vec![]),
        ])
    });

    let result = test_list_requests_wrapper(&mut ctx, None).await;

    let response = result.unwrap();
    assert_eq!(response.0.len(), 2);
}

#[tokio::test]
async fn test_list_requests_with_status_filter() {
    let mut ctx = TestContext::new();

    ctx.registration_repo
        .expect_list_requests_by_status()
        .with(predicate::eq("PENDING"))
        .returning(|_| Ok(vec![db_request("alice", "PENDING", vec![])]));

    // Filter parsing is case-insensitive.
    let result = test_list_requests_wrapper(&mut ctx, Some("pending".to_string())).await;

    let response = result.unwrap();
    assert_eq!(response.0.len(), 1);
    assert_eq!(response.0[0].status, RequestStatus::Pending);
}

#[tokio::test]
async fn test_list_requests_with_invalid_filter_is_rejected() {
    let mut ctx = TestContext::new();

    let result = test_list_requests_wrapper(&mut ctx, Some("WAITING".to_string())).await;

    match result.unwrap_err().0 {
        TutorError::Validation(_) => {}
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_create_teacher_with_blank_password_is_rejected() {
    let mut ctx = TestContext::new();

    let request = AdminTeacherCreateRequest {
        username: "newbie".to_string(),
        password: "   ".to_string(),
        cv_url: None,
    };

    let result = test_create_teacher_wrapper(&mut ctx, request).await;

    match result.unwrap_err().0 {
        TutorError::Validation(_) => {}
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_create_teacher_defaults_cv_url() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let now = Utc::now();

    ctx.user_repo
        .expect_exists_by_username()
        .returning(|_| Ok(false));
    ctx.user_repo.expect_exists_by_email().returning(|_| Ok(false));

    ctx.user_repo
        .expect_create_user()
        .returning(move |username, _, _, role| Ok(db_user(user_id, username, role)));

    // Absent cv_url falls back to the "pending" sentinel.
    ctx.profile_repo
        .expect_create_teacher()
        .with(predicate::eq(user_id), predicate::eq(DEFAULT_CV_URL))
        .times(1)
        .returning(move |user_id, cv_url| {
            Ok(DbTeacher {
                id: Uuid::new_v4(),
                user_id,
                cv_url: cv_url.to_string(),
                created_at: now,
                updated_at: now,
            })
        });

    let request = AdminTeacherCreateRequest {
        username: "newbie".to_string(),
        password: "secret".to_string(),
        cv_url: None,
    };

    let result = test_create_teacher_wrapper(&mut ctx, request).await;

    let response = result.unwrap();
    assert_eq!(response.0.username, "newbie");
    assert_eq!(response.0.user_id, user_id);
}
