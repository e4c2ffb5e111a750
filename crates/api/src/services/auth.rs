//! Authentication service: credential checks and teacher registration.
//!
//! Handlers stay thin; the business rules live here so integration tests
//! can exercise them directly against a pool.

use classtrack_core::error::CoreError;
use classtrack_core::types::DbId;
use classtrack_core::validation::{validate_email, validate_password};
use classtrack_db::models::teacher::{CreateTeacher, Teacher, TeacherResponse};
use classtrack_db::repositories::TeacherRepo;
use classtrack_db::DbPool;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};

/// Input for [`register`]. The password is plaintext; hashing happens here.
#[derive(Debug)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Check an identifier (username or email) and password against the
/// `teachers` table.
///
/// The two failure messages are deliberately distinct: "Invalid username
/// or email" when no account matches, "Invalid password" when the account
/// exists but the password does not. Both map to 401.
pub async fn authenticate(
    pool: &DbPool,
    identifier: &str,
    password: &str,
) -> AppResult<TeacherResponse> {
    let teacher: Teacher = TeacherRepo::find_by_identifier(pool, identifier)
        .await?
        .ok_or_else(|| CoreError::Unauthorized("Invalid username or email".into()))?;

    let ok = verify_password(password, &teacher.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !ok {
        return Err(CoreError::Unauthorized("Invalid password".into()).into());
    }

    Ok(TeacherResponse::from(teacher))
}

/// Register a new teacher account, returning the new id.
///
/// Validates email format and password strength, pre-checks uniqueness for
/// a deterministic message, then stores an argon2id hash.
pub async fn register(pool: &DbPool, input: RegisterInput) -> AppResult<DbId> {
    if !validate_email(&input.email) {
        return Err(CoreError::Validation("Invalid email format".into()).into());
    }
    if !validate_password(&input.password) {
        return Err(
            CoreError::Validation("Password must be at least 6 characters long".into()).into(),
        );
    }

    if TeacherRepo::exists_by_username_or_email(pool, &input.username, &input.email).await? {
        return Err(CoreError::Conflict("Username or email already exists".into()).into());
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let teacher = TeacherRepo::create(
        pool,
        &CreateTeacher {
            username: input.username,
            email: input.email,
            password_hash,
            full_name: input.full_name,
        },
    )
    .await?;

    Ok(teacher.id)
}

/// Fetch a teacher's public fields by id.
pub async fn get_by_id(pool: &DbPool, id: DbId) -> AppResult<TeacherResponse> {
    let teacher = TeacherRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Teacher" })?;
    Ok(TeacherResponse::from(teacher))
}
