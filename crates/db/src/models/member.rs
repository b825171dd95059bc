//! Workspace and project membership models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use orbit_core::roles::Role;
use orbit_core::types::{DbId, Timestamp};

/// A row from the `workspace_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkspaceMember {
    pub id: DbId,
    pub workspace_id: DbId,
    pub member_id: DbId,
    #[sqlx(try_from = "i16")]
    pub role: Role,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `project_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectMember {
    pub id: DbId,
    pub workspace_id: DbId,
    pub project_id: DbId,
    pub member_id: DbId,
    #[sqlx(try_from = "i16")]
    pub role: Role,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for changing a workspace member's role.
///
/// `role` is kept as the raw integer so an unknown value surfaces as a
/// field error instead of a body-parse rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMemberRole {
    pub role: i16,
}
