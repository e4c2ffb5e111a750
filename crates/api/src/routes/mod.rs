//! Route modules, one per resource. Each exposes a `router()` returning
//! `Router<AppState>`; the mounting happens in [`crate::router`].

pub mod auth;
pub mod health;
pub mod pages;
pub mod students;

use axum::Router;

use crate::state::AppState;

/// All `/api` routes combined.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/students", students::router())
}
