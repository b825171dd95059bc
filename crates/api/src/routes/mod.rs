pub mod health;
pub mod member;
pub mod quick_link;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /workspaces/{slug}/quick-links                           list, create
/// /workspaces/{slug}/quick-links/{id}                      get, update, delete
///
/// /workspaces/{slug}/members                               list (admin, member)
/// /workspaces/{slug}/members/me                            caller's membership
/// /workspaces/{slug}/members/{member_id}                   change role (admin)
///
/// /workspaces/{slug}/projects/{project_id}/members/me      caller's project membership
/// ```
///
/// Every route is guarded by a `Gate` declared on its handler.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/workspaces/{slug}/quick-links", quick_link::router())
        .nest("/workspaces/{slug}/members", member::router())
        .nest(
            "/workspaces/{slug}/projects/{project_id}/members",
            member::project_router(),
        )
}
