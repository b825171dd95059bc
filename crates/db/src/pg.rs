//! PostgreSQL-backed store delegating to the repositories.

use async_trait::async_trait;
use orbit_core::roles::Role;
use orbit_core::types::DbId;

use crate::models::member::{ProjectMember, WorkspaceMember};
use crate::models::quick_link::{NewQuickLink, QuickLink, UpdateQuickLink};
use crate::models::workspace::Workspace;
use crate::repositories::{MemberRepo, QuickLinkRepo, WorkspaceRepo};
use crate::store::{MemberStore, QuickLinkStore, RoleResolver, StoreResult, WorkspaceStore};
use crate::DbPool;

/// Implements every store trait on top of one connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkspaceStore for PgStore {
    async fn find_by_slug(&self, slug: &str) -> StoreResult<Option<Workspace>> {
        WorkspaceRepo::find_by_slug(&self.pool, slug).await
    }
}

#[async_trait]
impl RoleResolver for PgStore {
    async fn workspace_role(&self, slug: &str, user_id: DbId) -> StoreResult<Option<Role>> {
        MemberRepo::workspace_role(&self.pool, slug, user_id).await
    }

    async fn project_role(
        &self,
        slug: &str,
        project_id: DbId,
        user_id: DbId,
    ) -> StoreResult<Option<Role>> {
        MemberRepo::project_role(&self.pool, slug, project_id, user_id).await
    }
}

#[async_trait]
impl MemberStore for PgStore {
    async fn find_workspace_member(
        &self,
        workspace_id: DbId,
        member_id: DbId,
    ) -> StoreResult<Option<WorkspaceMember>> {
        MemberRepo::find_workspace_member(&self.pool, workspace_id, member_id).await
    }

    async fn list_workspace_members(&self, workspace_id: DbId) -> StoreResult<Vec<WorkspaceMember>> {
        MemberRepo::list_workspace_members(&self.pool, workspace_id).await
    }

    async fn update_workspace_role(
        &self,
        workspace_id: DbId,
        member_id: DbId,
        role: Role,
    ) -> StoreResult<Option<WorkspaceMember>> {
        MemberRepo::update_workspace_role(&self.pool, workspace_id, member_id, role).await
    }

    async fn find_project_member(
        &self,
        slug: &str,
        project_id: DbId,
        member_id: DbId,
    ) -> StoreResult<Option<ProjectMember>> {
        MemberRepo::find_project_member(&self.pool, slug, project_id, member_id).await
    }
}

#[async_trait]
impl QuickLinkStore for PgStore {
    async fn create(&self, input: &NewQuickLink) -> StoreResult<QuickLink> {
        QuickLinkRepo::create(&self.pool, input).await
    }

    async fn find_for_owner(
        &self,
        slug: &str,
        owner_id: DbId,
        id: DbId,
    ) -> StoreResult<Option<QuickLink>> {
        QuickLinkRepo::find_for_owner(&self.pool, slug, owner_id, id).await
    }

    async fn list_for_owner(&self, slug: &str, owner_id: DbId) -> StoreResult<Vec<QuickLink>> {
        QuickLinkRepo::list_for_owner(&self.pool, slug, owner_id).await
    }

    async fn url_taken(
        &self,
        workspace_id: DbId,
        owner_id: DbId,
        url: &str,
        exclude_id: Option<DbId>,
    ) -> StoreResult<bool> {
        QuickLinkRepo::url_taken(&self.pool, workspace_id, owner_id, url, exclude_id).await
    }

    async fn update(&self, id: DbId, input: &UpdateQuickLink) -> StoreResult<Option<QuickLink>> {
        QuickLinkRepo::update(&self.pool, id, input).await
    }

    async fn delete_for_owner(&self, slug: &str, owner_id: DbId, id: DbId) -> StoreResult<bool> {
        QuickLinkRepo::delete_for_owner(&self.pool, slug, owner_id, id).await
    }
}
