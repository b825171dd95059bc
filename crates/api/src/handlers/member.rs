//! Handlers for workspace and project membership lookups.
//!
//! Each handler declares its own access policy, so the same resource mixes
//! open reads (`/me`), member-only reads and admin-only writes.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use orbit_core::error::{CoreError, FieldErrors};
use orbit_core::permission::Policy;
use orbit_core::roles::{Role, ScopeLevel, ADMIN_AND_MEMBER, ADMIN_ONLY, ALL_ROLES};
use orbit_core::types::DbId;
use orbit_db::models::member::UpdateMemberRole;
use orbit_db::models::workspace::Workspace;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParams};
use crate::middleware::permission::{AccessPolicy, Gate};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Policies
// ---------------------------------------------------------------------------

/// Any active workspace member.
pub struct AnyWorkspaceMember;

impl AccessPolicy for AnyWorkspaceMember {
    const POLICY: Policy = Policy::new(ALL_ROLES, ScopeLevel::Workspace);
}

/// Workspace admins and members. Guests cannot browse the directory.
pub struct WorkspaceMemberDirectory;

impl AccessPolicy for WorkspaceMemberDirectory {
    const POLICY: Policy = Policy::new(ADMIN_AND_MEMBER, ScopeLevel::Workspace);
}

pub struct WorkspaceAdmin;

impl AccessPolicy for WorkspaceAdmin {
    const POLICY: Policy = Policy::new(ADMIN_ONLY, ScopeLevel::Workspace);
}

/// Any active member of the addressed project.
pub struct AnyProjectMember;

impl AccessPolicy for AnyProjectMember {
    const POLICY: Policy = Policy::new(ALL_ROLES, ScopeLevel::Project);
}

#[derive(Debug, Deserialize)]
pub struct MemberPath {
    pub member_id: DbId,
}

#[derive(Debug, Deserialize)]
pub struct ProjectPath {
    pub project_id: DbId,
}

async fn load_workspace(state: &AppState, slug: &str) -> AppResult<Workspace> {
    let workspace = state
        .workspaces
        .find_by_slug(slug)
        .await?
        .ok_or_else(|| CoreError::not_found("Workspace", slug))?;
    Ok(workspace)
}

// ---------------------------------------------------------------------------
// Workspace members
// ---------------------------------------------------------------------------

/// GET /workspaces/{slug}/members/me
pub async fn my_workspace_membership(
    State(state): State<AppState>,
    gate: Gate<AnyWorkspaceMember>,
) -> AppResult<impl IntoResponse> {
    let workspace = load_workspace(&state, &gate.slug).await?;
    let membership = state
        .members
        .find_workspace_member(workspace.id, gate.user_id())
        .await?
        .ok_or_else(|| CoreError::not_found("WorkspaceMember", gate.user_id()))?;
    Ok(Json(DataResponse { data: membership }))
}

/// GET /workspaces/{slug}/members
pub async fn list_members(
    State(state): State<AppState>,
    gate: Gate<WorkspaceMemberDirectory>,
) -> AppResult<impl IntoResponse> {
    let workspace = load_workspace(&state, &gate.slug).await?;
    let members = state.members.list_workspace_members(workspace.id).await?;
    Ok(Json(DataResponse { data: members }))
}

/// PATCH /workspaces/{slug}/members/{member_id}
pub async fn update_member_role(
    State(state): State<AppState>,
    gate: Gate<WorkspaceAdmin>,
    PathParams(path): PathParams<MemberPath>,
    JsonBody(input): JsonBody<UpdateMemberRole>,
) -> AppResult<impl IntoResponse> {
    if path.member_id == gate.user_id() {
        return Err(AppError::BadRequest("You cannot update your own role.".into()));
    }

    let role = Role::try_from(input.role).map_err(|_| {
        CoreError::InvalidFields(FieldErrors::single("role", "Select a valid role."))
    })?;

    let workspace = load_workspace(&state, &gate.slug).await?;
    let member = state
        .members
        .update_workspace_role(workspace.id, path.member_id, role)
        .await?
        .ok_or_else(|| CoreError::not_found("WorkspaceMember", path.member_id))?;

    tracing::info!(
        workspace_id = workspace.id,
        member_id = member.member_id,
        role = %member.role,
        updated_by = gate.user_id(),
        "Workspace member role updated",
    );

    Ok(Json(DataResponse { data: member }))
}

// ---------------------------------------------------------------------------
// Project members
// ---------------------------------------------------------------------------

/// GET /workspaces/{slug}/projects/{project_id}/members/me
pub async fn my_project_membership(
    State(state): State<AppState>,
    gate: Gate<AnyProjectMember>,
    PathParams(path): PathParams<ProjectPath>,
) -> AppResult<impl IntoResponse> {
    let membership = state
        .members
        .find_project_member(&gate.slug, path.project_id, gate.user_id())
        .await?
        .ok_or_else(|| CoreError::not_found("ProjectMember", gate.user_id()))?;
    Ok(Json(DataResponse { data: membership }))
}
