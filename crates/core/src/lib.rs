//! Domain logic shared by the database and API crates.
//!
//! Nothing in here touches the network or the database: roles, the pure
//! permission decision, quick link validation rules and the error type.

pub mod error;
pub mod permission;
pub mod quick_link;
pub mod roles;
pub mod types;
