//! Route definitions for the `/projects` resource.
//!
//! All endpoints require authentication.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> generate
/// DELETE /{id}     -> remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list).post(projects::generate))
        .route("/{id}", delete(projects::remove))
}
