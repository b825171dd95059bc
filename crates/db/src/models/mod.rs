//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the request bodies that touch the entity

pub mod member;
pub mod quick_link;
pub mod workspace;
