//! Repository for the `workspaces` table.

use sqlx::PgPool;

use crate::models::workspace::Workspace;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, created_at, updated_at";

/// Provides read operations for workspaces.
pub struct WorkspaceRepo;

impl WorkspaceRepo {
    /// Find a workspace by its unique slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Workspace>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workspaces WHERE slug = $1");
        sqlx::query_as::<_, Workspace>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }
}
