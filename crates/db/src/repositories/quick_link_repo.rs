//! Repository for the `quick_links` table.

use sqlx::PgPool;
use orbit_core::types::DbId;

use crate::models::quick_link::{NewQuickLink, QuickLink, UpdateQuickLink};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, workspace_id, owner_id, title, url, logo, created_at, updated_at";

/// Resolves a workspace slug to its id inside a query (bound as `$n`).
const WORKSPACE_BY_SLUG: &str = "(SELECT id FROM workspaces WHERE slug = $2)";

/// Provides CRUD operations for quick links.
pub struct QuickLinkRepo;

impl QuickLinkRepo {
    /// Insert a new quick link, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewQuickLink) -> Result<QuickLink, sqlx::Error> {
        let query = format!(
            "INSERT INTO quick_links (workspace_id, owner_id, title, url, logo) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QuickLink>(&query)
            .bind(input.workspace_id)
            .bind(input.owner_id)
            .bind(&input.title)
            .bind(&input.url)
            .bind(&input.logo)
            .fetch_one(pool)
            .await
    }

    /// Find a link by id, only if it belongs to `owner_id` in the workspace `slug`.
    pub async fn find_for_owner(
        pool: &PgPool,
        slug: &str,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<QuickLink>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM quick_links \
             WHERE id = $1 AND workspace_id = {WORKSPACE_BY_SLUG} AND owner_id = $3"
        );
        sqlx::query_as::<_, QuickLink>(&query)
            .bind(id)
            .bind(slug)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// List the owner's links in a workspace, most recently created first.
    pub async fn list_for_owner(
        pool: &PgPool,
        slug: &str,
        owner_id: DbId,
    ) -> Result<Vec<QuickLink>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM quick_links \
             WHERE owner_id = $1 AND workspace_id = {WORKSPACE_BY_SLUG} \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, QuickLink>(&query)
            .bind(owner_id)
            .bind(slug)
            .fetch_all(pool)
            .await
    }

    /// Returns `true` if the owner already saved `url` in the workspace.
    pub async fn url_taken(
        pool: &PgPool,
        workspace_id: DbId,
        owner_id: DbId,
        url: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS( \
                 SELECT 1 FROM quick_links \
                 WHERE workspace_id = $1 AND owner_id = $2 AND url = $3 \
                   AND ($4::BIGINT IS NULL OR id <> $4) \
             )",
        )
        .bind(workspace_id)
        .bind(owner_id)
        .bind(url)
        .bind(exclude_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Update a link. Omitted fields keep their values; an explicit `null`
    /// clears `title` or `logo`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQuickLink,
    ) -> Result<Option<QuickLink>, sqlx::Error> {
        let query = format!(
            "UPDATE quick_links SET \
                 title = CASE WHEN $2 THEN $3 ELSE title END, \
                 url = COALESCE($4, url), \
                 logo = CASE WHEN $5 THEN $6 ELSE logo END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QuickLink>(&query)
            .bind(id)
            .bind(input.title.is_some())
            .bind(input.title.clone().flatten())
            .bind(input.new_url())
            .bind(input.logo.is_some())
            .bind(input.logo.clone().flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete the owner's link. Returns `true` if a row was removed.
    pub async fn delete_for_owner(
        pool: &PgPool,
        slug: &str,
        owner_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "DELETE FROM quick_links \
             WHERE id = $1 AND workspace_id = {WORKSPACE_BY_SLUG} AND owner_id = $3"
        );
        let result = sqlx::query(&query)
            .bind(id)
            .bind(slug)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
