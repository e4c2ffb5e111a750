//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as `main.rs`)
//! on top of an `#[sqlx::test]`-provided pool, and wraps `tower::oneshot`
//! request plumbing so tests read as request/assert pairs.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use classtrack_api::auth::password::hash_password;
use classtrack_api::config::{AppEnv, ServerConfig};
use classtrack_api::router::build_app_router;
use classtrack_api::state::AppState;
use classtrack_db::seed::{seed_demo_data, DEMO_PASSWORD};
use classtrack_db::DbPool;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        env: AppEnv::Development,
        debug: true,
        secret_key: "test-secret-key".to_string(),
        database_url: "sqlite://:memory:".to_string(),
        session_ttl_hours: 24,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: DbPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Seed the demo teacher and students, as startup does.
pub async fn seed(pool: &DbPool) {
    let hash = hash_password(DEMO_PASSWORD).expect("hashing should succeed");
    seed_demo_data(pool, &hash)
        .await
        .expect("seeding should succeed");
}

async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone()
        .oneshot(request)
        .await
        .expect("request should complete")
}

/// Send a GET request, optionally with a session cookie.
pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(app, builder.body(Body::empty()).expect("valid request")).await
}

/// Send a JSON-body request, optionally with a session cookie.
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(
        app,
        builder
            .body(Body::from(body.to_string()))
            .expect("valid request"),
    )
    .await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    cookie: Option<&str>,
) -> Response<Body> {
    send_json(app, Method::POST, uri, body, cookie).await
}

/// Send a POST with a raw body and JSON content type, bypassing
/// serialization, for exercising malformed-body handling.
pub async fn post_raw(
    app: &Router,
    uri: &str,
    body: &str,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(
        app,
        builder
            .body(Body::from(body.to_string()))
            .expect("valid request"),
    )
    .await
}

pub async fn put_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    cookie: Option<&str>,
) -> Response<Body> {
    send_json(app, Method::PUT, uri, body, cookie).await
}

pub async fn delete(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(Method::DELETE).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(app, builder.body(Body::empty()).expect("valid request")).await
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Extract the `name=value` pair of the session cookie from a response's
/// `Set-Cookie` header, ready to send back in a `Cookie` header.
pub fn session_cookie_from(response: &Response<Body>) -> String {
    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("response should set a cookie")
        .to_str()
        .expect("cookie header should be valid UTF-8");
    set_cookie
        .split(';')
        .next()
        .expect("cookie header should have a value")
        .to_string()
}

/// Log in via the API and return the session cookie.
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/auth/login", body, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    session_cookie_from(&response)
}

/// Seed demo data and log in as the demo teacher.
pub async fn login_demo(app: &Router, pool: &DbPool) -> String {
    seed(pool).await;
    login(app, classtrack_db::seed::DEMO_USERNAME, DEMO_PASSWORD).await
}
