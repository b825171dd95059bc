//! Store traits consumed by the API handlers.
//!
//! Handlers depend on these traits rather than on `PgPool` directly so the
//! same handler code runs against PostgreSQL ([`crate::pg::PgStore`]) and
//! the in-process [`crate::memory::MemoryStore`].

use std::sync::Arc;

use async_trait::async_trait;
use orbit_core::roles::Role;
use orbit_core::types::DbId;

use crate::models::member::{ProjectMember, WorkspaceMember};
use crate::models::quick_link::{NewQuickLink, QuickLink, UpdateQuickLink};
use crate::models::workspace::Workspace;

pub type StoreResult<T> = Result<T, sqlx::Error>;

#[async_trait]
pub trait WorkspaceStore: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> StoreResult<Option<Workspace>>;
}

/// Resolves the caller's active role at a scope. `None` means the caller
/// has no active membership there (or the scope does not exist).
#[async_trait]
pub trait RoleResolver: Send + Sync {
    async fn workspace_role(&self, slug: &str, user_id: DbId) -> StoreResult<Option<Role>>;

    async fn project_role(
        &self,
        slug: &str,
        project_id: DbId,
        user_id: DbId,
    ) -> StoreResult<Option<Role>>;
}

#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Membership row for a user in a workspace, active or not.
    async fn find_workspace_member(
        &self,
        workspace_id: DbId,
        member_id: DbId,
    ) -> StoreResult<Option<WorkspaceMember>>;

    /// Active members of a workspace, highest role first.
    async fn list_workspace_members(&self, workspace_id: DbId) -> StoreResult<Vec<WorkspaceMember>>;

    /// Change an active member's role. Returns `None` if no active row matched.
    async fn update_workspace_role(
        &self,
        workspace_id: DbId,
        member_id: DbId,
        role: Role,
    ) -> StoreResult<Option<WorkspaceMember>>;

    /// Active project membership for a user, addressed through the workspace slug.
    async fn find_project_member(
        &self,
        slug: &str,
        project_id: DbId,
        member_id: DbId,
    ) -> StoreResult<Option<ProjectMember>>;
}

/// Quick link persistence. Every read and delete is scoped to the
/// workspace slug and the owning user.
#[async_trait]
pub trait QuickLinkStore: Send + Sync {
    async fn create(&self, input: &NewQuickLink) -> StoreResult<QuickLink>;

    async fn find_for_owner(
        &self,
        slug: &str,
        owner_id: DbId,
        id: DbId,
    ) -> StoreResult<Option<QuickLink>>;

    /// The owner's links in the workspace, newest first.
    async fn list_for_owner(&self, slug: &str, owner_id: DbId) -> StoreResult<Vec<QuickLink>>;

    /// Whether the owner already has `url` in the workspace, ignoring
    /// the link `exclude_id` when given.
    async fn url_taken(
        &self,
        workspace_id: DbId,
        owner_id: DbId,
        url: &str,
        exclude_id: Option<DbId>,
    ) -> StoreResult<bool>;

    /// Apply the non-`None` fields of `input`. Returns `None` if the row is gone.
    async fn update(&self, id: DbId, input: &UpdateQuickLink) -> StoreResult<Option<QuickLink>>;

    /// Returns `true` if a row was removed.
    async fn delete_for_owner(&self, slug: &str, owner_id: DbId, id: DbId) -> StoreResult<bool>;
}

pub type WorkspaceStoreRef = Arc<dyn WorkspaceStore>;
pub type RoleResolverRef = Arc<dyn RoleResolver>;
pub type MemberStoreRef = Arc<dyn MemberStore>;
pub type QuickLinkStoreRef = Arc<dyn QuickLinkStore>;
