#![allow(dead_code)]

//! Seed rows owned by flows outside this service (users, workspaces,
//! projects, memberships) so repository tests have something to scope by.

use orbit_core::roles::Role;
use orbit_core::types::DbId;
use sqlx::PgPool;

pub async fn seed_user(pool: &PgPool, email: &str) -> DbId {
    sqlx::query_scalar("INSERT INTO users (email) VALUES ($1) RETURNING id")
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn seed_workspace(pool: &PgPool, slug: &str) -> DbId {
    sqlx::query_scalar("INSERT INTO workspaces (name, slug) VALUES ($1, $1) RETURNING id")
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn seed_project(pool: &PgPool, workspace_id: DbId, name: &str) -> DbId {
    sqlx::query_scalar("INSERT INTO projects (workspace_id, name) VALUES ($1, $2) RETURNING id")
        .bind(workspace_id)
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn seed_workspace_member(
    pool: &PgPool,
    workspace_id: DbId,
    member_id: DbId,
    role: Role,
    is_active: bool,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO workspace_members (workspace_id, member_id, role, is_active) \
         VALUES ($1, $2, $3, $4)",
    )
    .bind(workspace_id)
    .bind(member_id)
    .bind(role.value())
    .bind(is_active)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn seed_project_member(
    pool: &PgPool,
    workspace_id: DbId,
    project_id: DbId,
    member_id: DbId,
    role: Role,
) {
    sqlx::query(
        "INSERT INTO project_members (workspace_id, project_id, member_id, role) \
         VALUES ($1, $2, $3, $4)",
    )
    .bind(workspace_id)
    .bind(project_id)
    .bind(member_id)
    .bind(role.value())
    .execute(pool)
    .await
    .unwrap();
}
