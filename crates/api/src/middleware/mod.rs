//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`permission::Gate`] -- Resolves the caller's role at the route's scope
//!   and checks it against a declared [`permission::AccessPolicy`].

pub mod auth;
pub mod permission;
