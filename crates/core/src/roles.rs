//! Membership roles and the scope levels they apply at.
//!
//! Role values must match the `role` SMALLINT columns written by the
//! `workspace_members` / `project_members` migrations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Privilege tier of a member within a workspace or project.
///
/// Ordering follows privilege: `Admin > Member > Guest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum Role {
    Guest,
    Member,
    Admin,
}

pub const ROLE_ADMIN: i16 = 20;
pub const ROLE_MEMBER: i16 = 15;
pub const ROLE_GUEST: i16 = 5;

/// Every role; for operations any member may perform.
pub const ALL_ROLES: &[Role] = &[Role::Admin, Role::Member, Role::Guest];

/// Admins and members, excluding guests.
pub const ADMIN_AND_MEMBER: &[Role] = &[Role::Admin, Role::Member];

pub const ADMIN_ONLY: &[Role] = &[Role::Admin];

impl Role {
    /// The integer stored in the database and sent over the wire.
    pub const fn value(self) -> i16 {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::Member => ROLE_MEMBER,
            Role::Guest => ROLE_GUEST,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Member => "member",
            Role::Guest => "guest",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when an integer does not name a known role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown role value {0}")]
pub struct UnknownRole(pub i16);

impl TryFrom<i16> for Role {
    type Error = UnknownRole;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            ROLE_ADMIN => Ok(Role::Admin),
            ROLE_MEMBER => Ok(Role::Member),
            ROLE_GUEST => Ok(Role::Guest),
            other => Err(UnknownRole(other)),
        }
    }
}

impl From<Role> for i16 {
    fn from(role: Role) -> Self {
        role.value()
    }
}

/// Granularity at which a role is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScopeLevel {
    Workspace,
    Project,
}

impl ScopeLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            ScopeLevel::Workspace => "WORKSPACE",
            ScopeLevel::Project => "PROJECT",
        }
    }
}

impl fmt::Display for ScopeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
