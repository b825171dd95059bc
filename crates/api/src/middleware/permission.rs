//! Role-gated access to workspace and project scoped routes.
//!
//! Every guarded handler takes a [`Gate<P>`] where `P` names the
//! operation's [`AccessPolicy`]. Extraction authenticates the caller,
//! resolves their active role at the policy's scope from the route's
//! `{slug}` (and `{project_id}`) captures, and rejects with 403 before
//! the handler body or its request payload is touched.

use std::marker::PhantomData;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use orbit_core::error::CoreError;
use orbit_core::permission::{self, Policy};
use orbit_core::roles::{Role, ScopeLevel};
use orbit_core::types::DbId;
use serde::Deserialize;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Access rule attached to a handler at the type level.
///
/// ```ignore
/// pub struct WorkspaceAdmin;
///
/// impl AccessPolicy for WorkspaceAdmin {
///     const POLICY: Policy = Policy::new(ADMIN_ONLY, ScopeLevel::Workspace);
/// }
///
/// async fn handler(gate: Gate<WorkspaceAdmin>) -> AppResult<()> { ... }
/// ```
pub trait AccessPolicy: Send + Sync + 'static {
    const POLICY: Policy;
}

/// Scope captures shared by every gated route. Other captures are ignored.
#[derive(Debug, Deserialize)]
struct ScopeParams {
    slug: String,
    project_id: Option<DbId>,
}

/// Proof that the caller passed policy `P` for the addressed scope.
pub struct Gate<P: AccessPolicy> {
    pub user: AuthUser,
    /// The caller's resolved role at the policy's scope.
    pub role: Role,
    /// Workspace slug from the route.
    pub slug: String,
    _policy: PhantomData<fn() -> P>,
}

impl<P: AccessPolicy> Gate<P> {
    pub fn user_id(&self) -> DbId {
        self.user.user_id
    }
}

impl<P: AccessPolicy> FromRequestParts<AppState> for Gate<P> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        let Path(scope) = Path::<ScopeParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let policy = P::POLICY;
        let resolved = match policy.level {
            ScopeLevel::Workspace => {
                state.roles.workspace_role(&scope.slug, user.user_id).await?
            }
            ScopeLevel::Project => {
                let project_id = scope.project_id.ok_or_else(|| {
                    AppError::InternalError(
                        "project-level policy on a route without {project_id}".into(),
                    )
                })?;
                state
                    .roles
                    .project_role(&scope.slug, project_id, user.user_id)
                    .await?
            }
        };

        let role = permission::evaluate(&policy, resolved).map_err(|err| {
            if let CoreError::Forbidden(reason) = &err {
                tracing::debug!(
                    user_id = user.user_id,
                    slug = %scope.slug,
                    level = %policy.level,
                    reason = %reason,
                    "Permission denied",
                );
            }
            AppError::Core(err)
        })?;

        Ok(Gate {
            user,
            role,
            slug: scope.slug,
            _policy: PhantomData,
        })
    }
}
