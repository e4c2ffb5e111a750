//! Handlers for the auth endpoints (login, logout).

use axum::extract::State;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::{Duration, Utc};
use classtrack_db::models::session::CreateSession;
use classtrack_db::repositories::SessionRepo;
use serde::Deserialize;

use crate::auth::session::{
    clear_session_cookie, extract_session_value, generate_session_token, hash_session_token,
    session_cookie, verify_session_value,
};
use crate::config::AppEnv;
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::response::{LoginResponse, MessageResponse};
use crate::services;
use crate::state::AppState;

/// Request body for `POST /api/auth/login`.
///
/// Fields are optional so a missing key yields the presence-check message
/// instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// POST /api/auth/login
///
/// Authenticate with username (or email) + password. On success, persists
/// a session and sets the signed session cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Response> {
    let username = input.username.as_deref().unwrap_or("").trim().to_string();
    let password = input.password.unwrap_or_default();

    if username.is_empty() || password.is_empty() {
        return Err(AppError::BadRequest(
            "Username and password are required".into(),
        ));
    }

    let teacher = services::auth::authenticate(&state.pool, &username, &password).await?;

    // Housekeeping: stale sessions are swept opportunistically on login.
    let swept = SessionRepo::delete_expired(&state.pool).await?;
    if swept > 0 {
        tracing::debug!(count = swept, "Removed expired sessions");
    }

    let token = generate_session_token();
    let ttl = Duration::hours(state.config.session_ttl_hours);
    SessionRepo::create(
        &state.pool,
        &CreateSession {
            teacher_id: teacher.id,
            token_hash: hash_session_token(&token),
            expires_at: Utc::now() + ttl,
        },
    )
    .await?;

    let signed = crate::auth::session::sign_session_value(&token, &state.config.secret_key);
    let cookie = session_cookie(
        &signed,
        ttl.num_seconds(),
        state.config.env == AppEnv::Production,
    )
    .map_err(|e| AppError::InternalError(format!("Invalid cookie value: {e}")))?;

    tracing::info!(teacher_id = teacher.id, username = %teacher.username, "Teacher logged in");

    let body = Json(LoginResponse {
        success: true,
        message: "Login successful".into(),
        redirect_url: "/dashboard".into(),
    });

    Ok(([(SET_COOKIE, cookie)], body).into_response())
}

/// POST /api/auth/logout
///
/// Deletes the session row (when the cookie is valid) and clears the
/// cookie. Always succeeds, even without a live session.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Response> {
    delete_session_row(&state, &headers).await?;

    let cookie = clear_session_cookie(state.config.env == AppEnv::Production);
    let body = Json(MessageResponse::ok("Logged out successfully"));
    Ok((StatusCode::OK, [(SET_COOKIE, cookie)], body).into_response())
}

/// Best-effort removal of the session row referenced by the request cookie.
pub(crate) async fn delete_session_row(state: &AppState, headers: &HeaderMap) -> AppResult<()> {
    let token = headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(extract_session_value)
        .and_then(|signed| verify_session_value(signed, &state.config.secret_key));

    if let Some(token) = token {
        SessionRepo::delete_by_token_hash(&state.pool, &hash_session_token(&token)).await?;
    }
    Ok(())
}
