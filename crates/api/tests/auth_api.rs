//! HTTP-level integration tests for login, logout, and session handling.

mod common;

use assert_matches::assert_matches;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use classtrack_api::error::AppError;
use classtrack_api::services::auth::{self, RegisterInput};
use classtrack_core::error::CoreError;
use classtrack_db::seed::{DEMO_EMAIL, DEMO_PASSWORD, DEMO_USERNAME};
use common::{body_json, get, post_json, session_cookie_from};
use sqlx::SqlitePool;

/// Successful login returns the redirect target and sets the session cookie.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_success_sets_cookie(pool: SqlitePool) {
    common::seed(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": DEMO_USERNAME, "password": DEMO_PASSWORD });
    let response = post_json(&app, "/api/auth/login", body, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("login must set a cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("classtrack_session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Login successful");
    assert_eq!(json["redirect_url"], "/dashboard");
}

/// The identifier field accepts the account email as well as the username.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_accepts_email_identifier(pool: SqlitePool) {
    common::seed(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": DEMO_EMAIL, "password": DEMO_PASSWORD });
    let response = post_json(&app, "/api/auth/login", body, None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Unknown account and wrong password produce distinct 401 messages.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_failure_messages(pool: SqlitePool) {
    common::seed(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "nobody", "password": "whatever" });
    let response = post_json(&app, "/api/auth/login", body, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Invalid username or email");

    let body = serde_json::json!({ "username": DEMO_USERNAME, "password": "wrong-password" });
    let response = post_json(&app, "/api/auth/login", body, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid password");
}

/// Missing or blank fields hit the presence check, not authentication.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_requires_both_fields(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    for body in [
        serde_json::json!({}),
        serde_json::json!({ "username": "teacher1" }),
        serde_json::json!({ "username": "  ", "password": "teacher123" }),
        serde_json::json!({ "username": "teacher1", "password": "" }),
    ] {
        let response = post_json(&app, "/api/auth/login", body, None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Username and password are required");
    }
}

/// Logout removes the session row; the old cookie stops working.
#[sqlx::test(migrations = "../db/migrations")]
async fn logout_invalidates_session(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let cookie = common::login_demo(&app, &pool).await;

    let response = get(&app, "/api/students", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(&app, "/api/auth/logout", serde_json::json!({}), Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cleared = response
        .headers()
        .get(SET_COOKIE)
        .expect("logout must clear the cookie")
        .to_str()
        .unwrap();
    assert!(cleared.contains("Max-Age=0"));
    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let response = get(&app, "/api/students", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Not authenticated");
}

/// A cookie with a forged token fails tag verification and never hits the
/// sessions table.
#[sqlx::test(migrations = "../db/migrations")]
async fn tampered_cookie_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let cookie = common::login_demo(&app, &pool).await;

    // Flip the first character of the token.
    let value = cookie.strip_prefix("classtrack_session=").unwrap();
    let flipped = if value.starts_with('0') { "1" } else { "0" };
    let tampered = format!("classtrack_session={flipped}{}", &value[1..]);

    let response = get(&app, "/api/students", Some(&tampered)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Registration is a service capability without an HTTP route.
#[sqlx::test(migrations = "../db/migrations")]
async fn register_creates_account_that_can_log_in(pool: SqlitePool) {
    let id = auth::register(
        &pool,
        RegisterInput {
            username: "newteacher".into(),
            email: "new@example.com".into(),
            password: "s3cret!".into(),
            full_name: "New Teacher".into(),
        },
    )
    .await
    .expect("registration should succeed");
    assert!(id > 0);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "username": "newteacher", "password": "s3cret!" });
    let response = post_json(&app, "/api/auth/login", body, None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// `get_by_id` returns the public profile (no hash) or a teacher NotFound.
#[sqlx::test(migrations = "../db/migrations")]
async fn get_by_id_returns_profile_or_not_found(pool: SqlitePool) {
    let id = auth::register(
        &pool,
        RegisterInput {
            username: "lookup".into(),
            email: "lookup@example.com".into(),
            password: "s3cret!".into(),
            full_name: "Look Up".into(),
        },
    )
    .await
    .expect("registration should succeed");

    let profile = auth::get_by_id(&pool, id)
        .await
        .expect("lookup should succeed");
    assert_eq!(profile.id, id);
    assert_eq!(profile.username, "lookup");
    assert_eq!(profile.email, "lookup@example.com");
    assert_eq!(profile.full_name, "Look Up");

    let err = auth::get_by_id(&pool, id + 1).await.unwrap_err();
    assert_matches!(
        err,
        AppError::Core(CoreError::NotFound { entity }) if entity == "Teacher"
    );
}

/// Registration rejects bad email, short password, and taken identifiers.
#[sqlx::test(migrations = "../db/migrations")]
async fn register_validation_rules(pool: SqlitePool) {
    common::seed(&pool).await;

    let make = |username: &str, email: &str, password: &str| RegisterInput {
        username: username.into(),
        email: email.into(),
        password: password.into(),
        full_name: "Test".into(),
    };

    let err = auth::register(&pool, make("a", "not-an-email", "longenough"))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        AppError::Core(CoreError::Validation(m)) if m == "Invalid email format"
    );

    let err = auth::register(&pool, make("a", "a@example.com", "short"))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        AppError::Core(CoreError::Validation(m)) if m == "Password must be at least 6 characters long"
    );

    // Username collision with the seeded demo account.
    let err = auth::register(&pool, make(DEMO_USERNAME, "other@example.com", "longenough"))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        AppError::Core(CoreError::Conflict(m)) if m == "Username or email already exists"
    );

    // Email collision.
    let err = auth::register(&pool, make("otheruser", DEMO_EMAIL, "longenough"))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        AppError::Core(CoreError::Conflict(m)) if m == "Username or email already exists"
    );
}
