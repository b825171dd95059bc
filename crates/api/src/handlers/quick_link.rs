//! Handlers for workspace quick links.
//!
//! Any active member of the workspace (guest, member or admin) may manage
//! their own quick links. Links are private to their owner: list, retrieve,
//! update and delete only ever see the caller's links in the addressed
//! workspace.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use orbit_core::error::CoreError;
use orbit_core::permission::Policy;
use orbit_core::quick_link::{
    duplicate_url_error, DUPLICATE_URL_CONSTRAINT, DUPLICATE_URL_MESSAGE,
};
use orbit_core::roles::{ScopeLevel, ALL_ROLES};
use orbit_core::types::DbId;
use orbit_db::models::quick_link::{CreateQuickLink, NewQuickLink, UpdateQuickLink};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParams};
use crate::middleware::permission::{AccessPolicy, Gate};
use crate::response::DataResponse;
use crate::state::AppState;

/// Workspace guests, members and admins.
pub struct QuickLinkAccess;

impl AccessPolicy for QuickLinkAccess {
    const POLICY: Policy = Policy::new(ALL_ROLES, ScopeLevel::Workspace);
}

#[derive(Debug, Deserialize)]
pub struct QuickLinkPath {
    pub id: DbId,
}

/// A concurrent write of the same url passes the pre-check and loses at the
/// unique constraint. Report it as a conflict on the url.
fn duplicate_url_race(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.constraint() == Some(DUPLICATE_URL_CONSTRAINT) {
            return CoreError::Conflict(DUPLICATE_URL_MESSAGE.into()).into();
        }
    }
    err.into()
}

/// POST /workspaces/{slug}/quick-links
///
/// The owner and workspace come from the caller and the route, never the body.
pub async fn create(
    State(state): State<AppState>,
    gate: Gate<QuickLinkAccess>,
    JsonBody(input): JsonBody<CreateQuickLink>,
) -> AppResult<impl IntoResponse> {
    let input = input.normalized();
    input.validate().map_err(CoreError::from)?;

    let workspace = state
        .workspaces
        .find_by_slug(&gate.slug)
        .await?
        .ok_or_else(|| CoreError::not_found("Workspace", &gate.slug))?;

    let url = input.url.ok_or_else(|| {
        AppError::InternalError("validated quick link is missing its url".into())
    })?;

    if state
        .quick_links
        .url_taken(workspace.id, gate.user_id(), &url, None)
        .await?
    {
        return Err(duplicate_url_error().into());
    }

    let link = state
        .quick_links
        .create(&NewQuickLink {
            workspace_id: workspace.id,
            owner_id: gate.user_id(),
            title: input.title,
            url,
            logo: input.logo,
        })
        .await
        .map_err(duplicate_url_race)?;

    tracing::info!(
        quick_link_id = link.id,
        workspace_id = workspace.id,
        user_id = gate.user_id(),
        "Quick link created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: link })))
}

/// GET /workspaces/{slug}/quick-links
pub async fn list(
    State(state): State<AppState>,
    gate: Gate<QuickLinkAccess>,
) -> AppResult<impl IntoResponse> {
    let links = state
        .quick_links
        .list_for_owner(&gate.slug, gate.user_id())
        .await?;
    Ok(Json(DataResponse { data: links }))
}

/// GET /workspaces/{slug}/quick-links/{id}
pub async fn retrieve(
    State(state): State<AppState>,
    gate: Gate<QuickLinkAccess>,
    PathParams(path): PathParams<QuickLinkPath>,
) -> AppResult<impl IntoResponse> {
    let link = state
        .quick_links
        .find_for_owner(&gate.slug, gate.user_id(), path.id)
        .await?
        .ok_or_else(|| CoreError::not_found("QuickLink", path.id))?;
    Ok(Json(DataResponse { data: link }))
}

/// PATCH /workspaces/{slug}/quick-links/{id}
///
/// Partial update. Omitted fields keep their stored values; `null` clears
/// `title` or `logo`.
pub async fn update(
    State(state): State<AppState>,
    gate: Gate<QuickLinkAccess>,
    PathParams(path): PathParams<QuickLinkPath>,
    JsonBody(input): JsonBody<UpdateQuickLink>,
) -> AppResult<impl IntoResponse> {
    let existing = state
        .quick_links
        .find_for_owner(&gate.slug, gate.user_id(), path.id)
        .await?
        .ok_or_else(|| CoreError::not_found("QuickLink", path.id))?;

    let input = input.normalized();
    input.validate_fields()?;

    if input.is_empty() {
        return Ok(Json(DataResponse { data: existing }));
    }

    if let Some(url) = input.new_url() {
        if state
            .quick_links
            .url_taken(existing.workspace_id, gate.user_id(), url, Some(existing.id))
            .await?
        {
            return Err(duplicate_url_error().into());
        }
    }

    let link = state
        .quick_links
        .update(existing.id, &input)
        .await
        .map_err(duplicate_url_race)?
        .ok_or_else(|| CoreError::not_found("QuickLink", path.id))?;

    tracing::info!(quick_link_id = link.id, user_id = gate.user_id(), "Quick link updated");

    Ok(Json(DataResponse { data: link }))
}

/// DELETE /workspaces/{slug}/quick-links/{id}
pub async fn destroy(
    State(state): State<AppState>,
    gate: Gate<QuickLinkAccess>,
    PathParams(path): PathParams<QuickLinkPath>,
) -> AppResult<StatusCode> {
    let deleted = state
        .quick_links
        .delete_for_owner(&gate.slug, gate.user_id(), path.id)
        .await?;

    if !deleted {
        return Err(CoreError::not_found("QuickLink", path.id).into());
    }

    tracing::info!(quick_link_id = path.id, user_id = gate.user_id(), "Quick link deleted");
    Ok(StatusCode::NO_CONTENT)
}
