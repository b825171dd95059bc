use std::sync::Arc;

use orbit_db::store::{
    MemberStore, MemberStoreRef, QuickLinkStore, QuickLinkStoreRef, RoleResolver,
    RoleResolverRef, WorkspaceStore, WorkspaceStoreRef,
};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (JWT secret, timeouts).
    pub config: Arc<ServerConfig>,
    /// Workspace lookup by slug.
    pub workspaces: WorkspaceStoreRef,
    /// Caller role resolution for the permission gate.
    pub roles: RoleResolverRef,
    pub members: MemberStoreRef,
    pub quick_links: QuickLinkStoreRef,
}

impl AppState {
    /// Build state where one backend serves every store trait.
    pub fn new<S>(store: Arc<S>, config: ServerConfig) -> Self
    where
        S: WorkspaceStore + RoleResolver + MemberStore + QuickLinkStore + 'static,
    {
        Self {
            config: Arc::new(config),
            workspaces: store.clone(),
            roles: store.clone(),
            members: store.clone(),
            quick_links: store,
        }
    }
}
