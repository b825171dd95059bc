//! Route definitions for workspace and project membership.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::member;
use crate::state::AppState;

/// Mounted at `/workspaces/{slug}/members`.
///
/// ```text
/// GET    /              -> list_members
/// GET    /me            -> my_workspace_membership
/// PATCH  /{member_id}   -> update_member_role
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(member::list_members))
        .route("/me", get(member::my_workspace_membership))
        .route("/{member_id}", patch(member::update_member_role))
}

/// Mounted at `/workspaces/{slug}/projects/{project_id}/members`.
pub fn project_router() -> Router<AppState> {
    Router::new().route("/me", get(member::my_project_membership))
}
