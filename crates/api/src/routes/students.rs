//! Route definitions for the `/students` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::students;
use crate::state::AppState;

/// Routes mounted at `/api/students`. All require authentication via the
/// session-cookie extractor on each handler.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> add_or_update
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(students::list))
        .route("/", post(students::add_or_update))
        .route("/{id}", get(students::get_by_id))
        .route("/{id}", put(students::update))
        .route("/{id}", delete(students::delete))
}
