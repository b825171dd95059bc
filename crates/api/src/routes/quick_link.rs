//! Route definitions for workspace quick links.
//!
//! Mounted at `/workspaces/{slug}/quick-links` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::quick_link;
use crate::state::AppState;

/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> retrieve
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> destroy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(quick_link::list).post(quick_link::create))
        .route(
            "/{id}",
            get(quick_link::retrieve)
                .patch(quick_link::update)
                .delete(quick_link::destroy),
        )
}
