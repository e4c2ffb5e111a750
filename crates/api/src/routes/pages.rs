//! Route definitions for the HTML page shells.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Root-level page routes.
///
/// ```text
/// GET /           -> index (redirect)
/// GET /login      -> login page
/// GET /dashboard  -> dashboard
/// GET /logout     -> logout (clears session, redirect)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/login", get(pages::login_page))
        .route("/dashboard", get(pages::dashboard))
        .route("/logout", get(pages::logout))
}
