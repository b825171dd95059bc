//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod member_repo;
pub mod quick_link_repo;
pub mod workspace_repo;

pub use member_repo::MemberRepo;
pub use quick_link_repo::QuickLinkRepo;
pub use workspace_repo::WorkspaceRepo;
