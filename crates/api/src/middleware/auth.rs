//! Session-cookie authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use classtrack_core::error::CoreError;
use classtrack_core::types::DbId;
use classtrack_db::models::teacher::TeacherResponse;
use classtrack_db::repositories::session_repo::SessionRepo;
use classtrack_db::repositories::teacher_repo::TeacherRepo;

use crate::auth::session::{extract_session_value, hash_session_token, verify_session_value};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated teacher extracted from the signed session cookie.
///
/// Use this as an extractor parameter in any handler that requires a login:
///
/// ```ignore
/// async fn my_handler(teacher: CurrentTeacher) -> AppResult<Json<()>> {
///     tracing::info!(teacher_id = teacher.teacher_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// Rejection is always a 401 with the message `Not authenticated`, never a
/// hint about which check failed.
#[derive(Debug, Clone)]
pub struct CurrentTeacher {
    /// The teacher's internal database id.
    pub teacher_id: DbId,
    /// The teacher's profile, safe to echo back in responses.
    pub teacher: TeacherResponse,
}

fn not_authenticated() -> AppError {
    AppError::Core(CoreError::Unauthorized("Not authenticated".into()))
}

/// Resolve a session cookie into the teacher it belongs to.
///
/// Checks, in order: cookie present, HMAC tag valid, session row alive,
/// teacher row still present. Any failure yields `None`.
async fn resolve_teacher(parts: &Parts, state: &AppState) -> Result<Option<CurrentTeacher>, AppError> {
    let Some(cookie_header) = parts.headers.get(COOKIE).and_then(|v| v.to_str().ok()) else {
        return Ok(None);
    };
    let Some(signed) = extract_session_value(cookie_header) else {
        return Ok(None);
    };
    let Some(token) = verify_session_value(signed, &state.config.secret_key) else {
        return Ok(None);
    };

    let token_hash = hash_session_token(&token);
    let Some(session) = SessionRepo::find_active_by_token_hash(&state.pool, &token_hash).await?
    else {
        return Ok(None);
    };

    // The teacher row is re-read on every request so a deleted account
    // invalidates its sessions immediately.
    let Some(teacher) = TeacherRepo::find_by_id(&state.pool, session.teacher_id).await? else {
        return Ok(None);
    };

    Ok(Some(CurrentTeacher {
        teacher_id: teacher.id,
        teacher: TeacherResponse::from(teacher),
    }))
}

impl FromRequestParts<AppState> for CurrentTeacher {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve_teacher(parts, state)
            .await?
            .ok_or_else(not_authenticated)
    }
}

/// Like [`CurrentTeacher`] but never rejects; page routes use it to decide
/// between rendering and redirecting to the login page.
#[derive(Debug, Clone)]
pub struct OptionalTeacher(pub Option<CurrentTeacher>);

impl FromRequestParts<AppState> for OptionalTeacher {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalTeacher(resolve_teacher(parts, state).await?))
    }
}
