//! Pure permission decision for role-gated operations.
//!
//! The API layer resolves the caller's role at a scope and hands it to
//! [`evaluate`]; this module decides without any I/O so the rules can be
//! tested exhaustively.

use crate::error::CoreError;
use crate::roles::{Role, ScopeLevel};

/// Message returned when the caller holds a role that is not allowed.
pub const INSUFFICIENT_PERMISSION: &str = "You don't have the required permissions.";

/// Declared access rule for one operation: which roles may call it and
/// at which scope the caller's role is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub roles: &'static [Role],
    pub level: ScopeLevel,
}

impl Policy {
    pub const fn new(roles: &'static [Role], level: ScopeLevel) -> Self {
        Self { roles, level }
    }

    /// Returns `true` if `role` is in the allowed set.
    pub fn allows(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Decide whether a caller with `resolved` role may run an operation
/// guarded by `policy`.
///
/// - `None` (not a member at the scope) -> [`CoreError::Forbidden`].
/// - a role outside `policy.roles` -> [`CoreError::Forbidden`].
/// - otherwise the resolved role is returned.
///
/// An empty role set denies everyone.
pub fn evaluate(policy: &Policy, resolved: Option<Role>) -> Result<Role, CoreError> {
    let role = resolved.ok_or_else(|| CoreError::Forbidden(not_a_member(policy.level).into()))?;
    if !policy.allows(role) {
        return Err(CoreError::Forbidden(INSUFFICIENT_PERMISSION.into()));
    }
    Ok(role)
}

fn not_a_member(level: ScopeLevel) -> &'static str {
    match level {
        ScopeLevel::Workspace => "You are not a member of this workspace.",
        ScopeLevel::Project => "You are not a member of this project.",
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::roles::{ADMIN_AND_MEMBER, ADMIN_ONLY, ALL_ROLES};

    const OPEN: Policy = Policy::new(ALL_ROLES, ScopeLevel::Workspace);
    const ADMIN: Policy = Policy::new(ADMIN_ONLY, ScopeLevel::Workspace);

    #[test]
    fn non_member_is_forbidden() {
        let err = evaluate(&OPEN, None).unwrap_err();
        assert_matches!(err, CoreError::Forbidden(msg) if msg.contains("not a member of this workspace"));
    }

    #[test]
    fn non_member_message_names_project_scope() {
        let policy = Policy::new(ALL_ROLES, ScopeLevel::Project);
        let err = evaluate(&policy, None).unwrap_err();
        assert_matches!(err, CoreError::Forbidden(msg) if msg.contains("project"));
    }

    #[test]
    fn guest_on_admin_only_is_forbidden() {
        let err = evaluate(&ADMIN, Some(Role::Guest)).unwrap_err();
        assert_matches!(err, CoreError::Forbidden(msg) if msg == INSUFFICIENT_PERMISSION);
    }

    #[test]
    fn member_on_admin_only_is_forbidden() {
        assert_matches!(evaluate(&ADMIN, Some(Role::Member)), Err(CoreError::Forbidden(_)));
    }

    #[test]
    fn allowed_roles_pass_through() {
        for role in ALL_ROLES {
            assert_eq!(evaluate(&OPEN, Some(*role)).unwrap(), *role);
        }
        assert_eq!(evaluate(&ADMIN, Some(Role::Admin)).unwrap(), Role::Admin);
    }

    #[test]
    fn allowed_set_is_not_a_minimum() {
        // A set that names only guests does not implicitly admit admins.
        const GUESTS: &[Role] = &[Role::Guest];
        let policy = Policy::new(GUESTS, ScopeLevel::Workspace);
        assert_matches!(evaluate(&policy, Some(Role::Admin)), Err(CoreError::Forbidden(_)));
    }

    #[test]
    fn empty_set_denies_everyone() {
        let policy = Policy::new(&[], ScopeLevel::Workspace);
        for role in ALL_ROLES {
            assert_matches!(evaluate(&policy, Some(*role)), Err(CoreError::Forbidden(_)));
        }
    }

    #[test]
    fn admin_and_member_excludes_guest() {
        let policy = Policy::new(ADMIN_AND_MEMBER, ScopeLevel::Workspace);
        assert!(policy.allows(Role::Admin));
        assert!(policy.allows(Role::Member));
        assert!(!policy.allows(Role::Guest));
    }
}
