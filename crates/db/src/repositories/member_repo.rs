//! Repository for the `workspace_members` and `project_members` tables.

use sqlx::PgPool;
use orbit_core::roles::Role;
use orbit_core::types::DbId;

use crate::models::member::{ProjectMember, WorkspaceMember};

/// Column list for `workspace_members` queries.
const WM_COLUMNS: &str = "id, workspace_id, member_id, role, is_active, created_at, updated_at";

/// Column list for `project_members` queries.
const PM_COLUMNS: &str =
    "id, workspace_id, project_id, member_id, role, is_active, created_at, updated_at";

/// Provides role resolution and membership queries.
pub struct MemberRepo;

impl MemberRepo {
    /// Active role of `user_id` in the workspace with `slug`, if any.
    pub async fn workspace_role(
        pool: &PgPool,
        slug: &str,
        user_id: DbId,
    ) -> Result<Option<Role>, sqlx::Error> {
        let row: Option<(i16,)> = sqlx::query_as(
            "SELECT wm.role FROM workspace_members wm \
             JOIN workspaces w ON w.id = wm.workspace_id \
             WHERE w.slug = $1 AND wm.member_id = $2 AND wm.is_active",
        )
        .bind(slug)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
        row.map(|(value,)| decode_role(value)).transpose()
    }

    /// Active role of `user_id` in a project of the workspace with `slug`, if any.
    pub async fn project_role(
        pool: &PgPool,
        slug: &str,
        project_id: DbId,
        user_id: DbId,
    ) -> Result<Option<Role>, sqlx::Error> {
        let row: Option<(i16,)> = sqlx::query_as(
            "SELECT pm.role FROM project_members pm \
             JOIN workspaces w ON w.id = pm.workspace_id \
             WHERE w.slug = $1 AND pm.project_id = $2 AND pm.member_id = $3 AND pm.is_active",
        )
        .bind(slug)
        .bind(project_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
        row.map(|(value,)| decode_role(value)).transpose()
    }

    /// Find a workspace membership row regardless of `is_active`.
    pub async fn find_workspace_member(
        pool: &PgPool,
        workspace_id: DbId,
        member_id: DbId,
    ) -> Result<Option<WorkspaceMember>, sqlx::Error> {
        let query = format!(
            "SELECT {WM_COLUMNS} FROM workspace_members \
             WHERE workspace_id = $1 AND member_id = $2"
        );
        sqlx::query_as::<_, WorkspaceMember>(&query)
            .bind(workspace_id)
            .bind(member_id)
            .fetch_optional(pool)
            .await
    }

    /// List active members ordered by role (highest first), then join order.
    pub async fn list_workspace_members(
        pool: &PgPool,
        workspace_id: DbId,
    ) -> Result<Vec<WorkspaceMember>, sqlx::Error> {
        let query = format!(
            "SELECT {WM_COLUMNS} FROM workspace_members \
             WHERE workspace_id = $1 AND is_active \
             ORDER BY role DESC, id ASC"
        );
        sqlx::query_as::<_, WorkspaceMember>(&query)
            .bind(workspace_id)
            .fetch_all(pool)
            .await
    }

    /// Set the role of an active member.
    ///
    /// Returns `None` if no active membership matched.
    pub async fn update_workspace_role(
        pool: &PgPool,
        workspace_id: DbId,
        member_id: DbId,
        role: Role,
    ) -> Result<Option<WorkspaceMember>, sqlx::Error> {
        let query = format!(
            "UPDATE workspace_members SET role = $3 \
             WHERE workspace_id = $1 AND member_id = $2 AND is_active \
             RETURNING {WM_COLUMNS}"
        );
        sqlx::query_as::<_, WorkspaceMember>(&query)
            .bind(workspace_id)
            .bind(member_id)
            .bind(role.value())
            .fetch_optional(pool)
            .await
    }

    /// Find an active project membership, addressed through the workspace slug.
    pub async fn find_project_member(
        pool: &PgPool,
        slug: &str,
        project_id: DbId,
        member_id: DbId,
    ) -> Result<Option<ProjectMember>, sqlx::Error> {
        let query = format!(
            "SELECT {PM_COLUMNS} FROM project_members \
             WHERE workspace_id = (SELECT id FROM workspaces WHERE slug = $1) \
               AND project_id = $2 AND member_id = $3 AND is_active"
        );
        sqlx::query_as::<_, ProjectMember>(&query)
            .bind(slug)
            .bind(project_id)
            .bind(member_id)
            .fetch_optional(pool)
            .await
    }
}

/// Map a stored SMALLINT to a [`Role`], surfacing unknown values as a
/// decode error rather than silently granting or denying access.
fn decode_role(value: i16) -> Result<Role, sqlx::Error> {
    Role::try_from(value).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}
