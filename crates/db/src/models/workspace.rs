//! Workspace entity model.

use serde::Serialize;
use sqlx::FromRow;
use orbit_core::types::{DbId, Timestamp};

/// A row from the `workspaces` table.
///
/// Workspaces are created elsewhere; this service only reads them to
/// resolve a slug to an id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Workspace {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
