//! In-process store with the same semantics as [`crate::pg::PgStore`].
//!
//! Used by the API integration tests and for running the server without a
//! database. Seeding helpers (`insert_workspace`, `add_workspace_member`,
//! ...) stand in for the workspace and invitation flows that live outside
//! this service; they do not count as mutations.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use orbit_core::roles::Role;
use orbit_core::types::DbId;

use crate::models::member::{ProjectMember, WorkspaceMember};
use crate::models::quick_link::{NewQuickLink, QuickLink, UpdateQuickLink};
use crate::models::workspace::Workspace;
use crate::store::{MemberStore, QuickLinkStore, RoleResolver, StoreResult, WorkspaceStore};

#[derive(Default)]
struct State {
    next_id: DbId,
    workspaces: BTreeMap<DbId, Workspace>,
    /// Keyed by `(workspace_id, member_id)`: one row per user per workspace.
    workspace_members: HashMap<(DbId, DbId), WorkspaceMember>,
    /// Keyed by `(project_id, member_id)`: one row per user per project.
    project_members: HashMap<(DbId, DbId), ProjectMember>,
    quick_links: BTreeMap<DbId, QuickLink>,
    mutations: u64,
}

impl State {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }

    fn workspace_id(&self, slug: &str) -> Option<DbId> {
        self.workspaces
            .values()
            .find(|w| w.slug == slug)
            .map(|w| w.id)
    }
}

#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seed a workspace. Panics on a duplicate slug, mirroring the unique
    /// constraint on `workspaces.slug`.
    pub fn insert_workspace(&self, name: &str, slug: &str) -> Workspace {
        let mut state = self.write();
        assert!(
            state.workspace_id(slug).is_none(),
            "workspace slug '{slug}' already exists"
        );
        let now = Utc::now();
        let workspace = Workspace {
            id: state.next_id(),
            name: name.to_string(),
            slug: slug.to_string(),
            created_at: now,
            updated_at: now,
        };
        state.workspaces.insert(workspace.id, workspace.clone());
        workspace
    }

    /// Seed (or replace) the membership of `member_id` in a workspace.
    pub fn add_workspace_member(&self, workspace_id: DbId, member_id: DbId, role: Role) -> WorkspaceMember {
        let mut state = self.write();
        let now = Utc::now();
        let member = WorkspaceMember {
            id: state.next_id(),
            workspace_id,
            member_id,
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        state
            .workspace_members
            .insert((workspace_id, member_id), member.clone());
        member
    }

    /// Mark a workspace membership inactive (the member left or was removed).
    pub fn deactivate_workspace_member(&self, workspace_id: DbId, member_id: DbId) {
        if let Some(member) = self
            .write()
            .workspace_members
            .get_mut(&(workspace_id, member_id))
        {
            member.is_active = false;
        }
    }

    /// Seed (or replace) the membership of `member_id` in a project.
    pub fn add_project_member(
        &self,
        workspace_id: DbId,
        project_id: DbId,
        member_id: DbId,
        role: Role,
    ) -> ProjectMember {
        let mut state = self.write();
        let now = Utc::now();
        let member = ProjectMember {
            id: state.next_id(),
            workspace_id,
            project_id,
            member_id,
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        state
            .project_members
            .insert((project_id, member_id), member.clone());
        member
    }

    /// Number of writes performed through the store traits.
    pub fn mutation_count(&self) -> u64 {
        self.read().mutations
    }

    /// Number of stored quick links across all workspaces.
    pub fn quick_link_count(&self) -> usize {
        self.read().quick_links.len()
    }
}

#[async_trait]
impl WorkspaceStore for MemoryStore {
    async fn find_by_slug(&self, slug: &str) -> StoreResult<Option<Workspace>> {
        Ok(self
            .read()
            .workspaces
            .values()
            .find(|w| w.slug == slug)
            .cloned())
    }
}

#[async_trait]
impl RoleResolver for MemoryStore {
    async fn workspace_role(&self, slug: &str, user_id: DbId) -> StoreResult<Option<Role>> {
        let state = self.read();
        let role = state.workspace_id(slug).and_then(|workspace_id| {
            state
                .workspace_members
                .get(&(workspace_id, user_id))
                .filter(|m| m.is_active)
                .map(|m| m.role)
        });
        Ok(role)
    }

    async fn project_role(
        &self,
        slug: &str,
        project_id: DbId,
        user_id: DbId,
    ) -> StoreResult<Option<Role>> {
        let state = self.read();
        let role = state.workspace_id(slug).and_then(|workspace_id| {
            state
                .project_members
                .get(&(project_id, user_id))
                .filter(|m| m.is_active && m.workspace_id == workspace_id)
                .map(|m| m.role)
        });
        Ok(role)
    }
}

#[async_trait]
impl MemberStore for MemoryStore {
    async fn find_workspace_member(
        &self,
        workspace_id: DbId,
        member_id: DbId,
    ) -> StoreResult<Option<WorkspaceMember>> {
        Ok(self
            .read()
            .workspace_members
            .get(&(workspace_id, member_id))
            .cloned())
    }

    async fn list_workspace_members(&self, workspace_id: DbId) -> StoreResult<Vec<WorkspaceMember>> {
        let mut members: Vec<WorkspaceMember> = self
            .read()
            .workspace_members
            .values()
            .filter(|m| m.workspace_id == workspace_id && m.is_active)
            .cloned()
            .collect();
        members.sort_by(|a, b| b.role.cmp(&a.role).then(a.id.cmp(&b.id)));
        Ok(members)
    }

    async fn update_workspace_role(
        &self,
        workspace_id: DbId,
        member_id: DbId,
        role: Role,
    ) -> StoreResult<Option<WorkspaceMember>> {
        let mut state = self.write();
        let updated = match state.workspace_members.get_mut(&(workspace_id, member_id)) {
            Some(member) if member.is_active => {
                member.role = role;
                member.updated_at = Utc::now();
                Some(member.clone())
            }
            _ => None,
        };
        if updated.is_some() {
            state.mutations += 1;
        }
        Ok(updated)
    }

    async fn find_project_member(
        &self,
        slug: &str,
        project_id: DbId,
        member_id: DbId,
    ) -> StoreResult<Option<ProjectMember>> {
        let state = self.read();
        let member = state.workspace_id(slug).and_then(|workspace_id| {
            state
                .project_members
                .get(&(project_id, member_id))
                .filter(|m| m.is_active && m.workspace_id == workspace_id)
                .cloned()
        });
        Ok(member)
    }
}

#[async_trait]
impl QuickLinkStore for MemoryStore {
    async fn create(&self, input: &NewQuickLink) -> StoreResult<QuickLink> {
        let mut state = self.write();
        let now = Utc::now();
        let link = QuickLink {
            id: state.next_id(),
            workspace_id: input.workspace_id,
            owner_id: input.owner_id,
            title: input.title.clone(),
            url: input.url.clone(),
            logo: input.logo.clone(),
            created_at: now,
            updated_at: now,
        };
        state.quick_links.insert(link.id, link.clone());
        state.mutations += 1;
        Ok(link)
    }

    async fn find_for_owner(
        &self,
        slug: &str,
        owner_id: DbId,
        id: DbId,
    ) -> StoreResult<Option<QuickLink>> {
        let state = self.read();
        let link = state.workspace_id(slug).and_then(|workspace_id| {
            state
                .quick_links
                .get(&id)
                .filter(|l| l.workspace_id == workspace_id && l.owner_id == owner_id)
                .cloned()
        });
        Ok(link)
    }

    async fn list_for_owner(&self, slug: &str, owner_id: DbId) -> StoreResult<Vec<QuickLink>> {
        let state = self.read();
        let Some(workspace_id) = state.workspace_id(slug) else {
            return Ok(Vec::new());
        };
        Ok(state
            .quick_links
            .values()
            .rev()
            .filter(|l| l.workspace_id == workspace_id && l.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn url_taken(
        &self,
        workspace_id: DbId,
        owner_id: DbId,
        url: &str,
        exclude_id: Option<DbId>,
    ) -> StoreResult<bool> {
        Ok(self.read().quick_links.values().any(|l| {
            l.workspace_id == workspace_id
                && l.owner_id == owner_id
                && l.url == url
                && Some(l.id) != exclude_id
        }))
    }

    async fn update(&self, id: DbId, input: &UpdateQuickLink) -> StoreResult<Option<QuickLink>> {
        let mut state = self.write();
        let Some(link) = state.quick_links.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(title) = &input.title {
            link.title = title.clone();
        }
        if let Some(url) = input.new_url() {
            link.url = url.to_string();
        }
        if let Some(logo) = &input.logo {
            link.logo = logo.clone();
        }
        link.updated_at = Utc::now();
        let updated = link.clone();
        state.mutations += 1;
        Ok(Some(updated))
    }

    async fn delete_for_owner(&self, slug: &str, owner_id: DbId, id: DbId) -> StoreResult<bool> {
        let mut state = self.write();
        let owned = state.workspace_id(slug).is_some_and(|workspace_id| {
            state
                .quick_links
                .get(&id)
                .is_some_and(|l| l.workspace_id == workspace_id && l.owner_id == owner_id)
        });
        if !owned {
            return Ok(false);
        }
        state.quick_links.remove(&id);
        state.mutations += 1;
        Ok(true)
    }
}
