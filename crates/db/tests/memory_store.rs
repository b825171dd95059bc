//! Behavioral tests for `MemoryStore`, which the API tests rely on to
//! mirror the PostgreSQL repositories.

use orbit_core::roles::Role;
use orbit_db::memory::MemoryStore;
use orbit_db::models::quick_link::{NewQuickLink, UpdateQuickLink};
use orbit_db::store::{MemberStore, QuickLinkStore, RoleResolver, WorkspaceStore};

const ALICE: i64 = 1001;
const BOB: i64 = 1002;

fn new_link(workspace_id: i64, owner_id: i64, url: &str) -> NewQuickLink {
    NewQuickLink {
        workspace_id,
        owner_id,
        title: Some("Docs".into()),
        url: url.into(),
        logo: None,
    }
}

// ---------------------------------------------------------------------------
// Role resolution
// ---------------------------------------------------------------------------

#[tokio::test]
async fn workspace_role_resolves_by_slug() {
    let store = MemoryStore::new();
    let ws = store.insert_workspace("Acme", "acme");
    store.add_workspace_member(ws.id, ALICE, Role::Member);

    assert_eq!(store.workspace_role("acme", ALICE).await.unwrap(), Some(Role::Member));
    assert_eq!(store.workspace_role("acme", BOB).await.unwrap(), None);
    assert_eq!(store.workspace_role("missing", ALICE).await.unwrap(), None);
}

#[tokio::test]
async fn inactive_membership_has_no_role() {
    let store = MemoryStore::new();
    let ws = store.insert_workspace("Acme", "acme");
    store.add_workspace_member(ws.id, ALICE, Role::Admin);
    store.deactivate_workspace_member(ws.id, ALICE);

    assert_eq!(store.workspace_role("acme", ALICE).await.unwrap(), None);
    assert!(store.list_workspace_members(ws.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn one_role_per_user_and_workspace() {
    let store = MemoryStore::new();
    let ws = store.insert_workspace("Acme", "acme");
    store.add_workspace_member(ws.id, ALICE, Role::Guest);
    store.add_workspace_member(ws.id, ALICE, Role::Admin);

    assert_eq!(store.workspace_role("acme", ALICE).await.unwrap(), Some(Role::Admin));
    assert_eq!(store.list_workspace_members(ws.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn project_role_requires_matching_workspace() {
    let store = MemoryStore::new();
    let acme = store.insert_workspace("Acme", "acme");
    store.insert_workspace("Other", "other");
    store.add_project_member(acme.id, 7, ALICE, Role::Member);

    assert_eq!(store.project_role("acme", 7, ALICE).await.unwrap(), Some(Role::Member));
    assert_eq!(store.project_role("other", 7, ALICE).await.unwrap(), None);
    assert_eq!(store.project_role("acme", 8, ALICE).await.unwrap(), None);
    assert!(store.find_project_member("acme", 7, ALICE).await.unwrap().is_some());
}

#[tokio::test]
async fn members_list_highest_role_first() {
    let store = MemoryStore::new();
    let ws = store.insert_workspace("Acme", "acme");
    store.add_workspace_member(ws.id, BOB, Role::Guest);
    store.add_workspace_member(ws.id, ALICE, Role::Admin);

    let members = store.list_workspace_members(ws.id).await.unwrap();
    let roles: Vec<Role> = members.iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::Admin, Role::Guest]);
}

#[tokio::test]
async fn update_role_counts_as_mutation() {
    let store = MemoryStore::new();
    let ws = store.insert_workspace("Acme", "acme");
    store.add_workspace_member(ws.id, BOB, Role::Guest);

    let updated = store
        .update_workspace_role(ws.id, BOB, Role::Member)
        .await
        .unwrap()
        .expect("member should exist");
    assert_eq!(updated.role, Role::Member);
    assert_eq!(store.mutation_count(), 1);

    let missing = store.update_workspace_role(ws.id, 4242, Role::Member).await.unwrap();
    assert!(missing.is_none());
    assert_eq!(store.mutation_count(), 1);
}

// ---------------------------------------------------------------------------
// Quick links
// ---------------------------------------------------------------------------

#[tokio::test]
async fn seeding_is_not_a_mutation() {
    let store = MemoryStore::new();
    let ws = store.insert_workspace("Acme", "acme");
    store.add_workspace_member(ws.id, ALICE, Role::Member);
    assert_eq!(store.mutation_count(), 0);
    assert_eq!(store.find_by_slug("acme").await.unwrap().map(|w| w.id), Some(ws.id));
}

#[tokio::test]
async fn links_are_scoped_to_owner_and_workspace() {
    let store = MemoryStore::new();
    let acme = store.insert_workspace("Acme", "acme");
    store.insert_workspace("Other", "other");

    let link = store.create(&new_link(acme.id, ALICE, "https://x")).await.unwrap();

    assert!(store.find_for_owner("acme", ALICE, link.id).await.unwrap().is_some());
    assert!(store.find_for_owner("acme", BOB, link.id).await.unwrap().is_none());
    assert!(store.find_for_owner("other", ALICE, link.id).await.unwrap().is_none());
    assert!(store.list_for_owner("acme", BOB).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_returns_newest_first() {
    let store = MemoryStore::new();
    let ws = store.insert_workspace("Acme", "acme");
    let first = store.create(&new_link(ws.id, ALICE, "https://a")).await.unwrap();
    let second = store.create(&new_link(ws.id, ALICE, "https://b")).await.unwrap();

    let ids: Vec<i64> = store
        .list_for_owner("acme", ALICE)
        .await
        .unwrap()
        .iter()
        .map(|l| l.id)
        .collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
async fn partial_update_keeps_omitted_fields() {
    let store = MemoryStore::new();
    let ws = store.insert_workspace("Acme", "acme");
    let link = store.create(&new_link(ws.id, ALICE, "https://x")).await.unwrap();

    let input = UpdateQuickLink {
        title: Some(Some("Docs v2".into())),
        ..Default::default()
    };
    let updated = store.update(link.id, &input).await.unwrap().unwrap();
    assert_eq!(updated.title.as_deref(), Some("Docs v2"));
    assert_eq!(updated.url, "https://x");
    assert_eq!(updated.workspace_id, ws.id);
    assert_eq!(updated.owner_id, ALICE);
}

#[tokio::test]
async fn explicit_null_clears_optional_fields() {
    let store = MemoryStore::new();
    let ws = store.insert_workspace("Acme", "acme");
    let mut input = new_link(ws.id, ALICE, "https://x");
    input.logo = Some("https://logo".into());
    let link = store.create(&input).await.unwrap();

    let clear = UpdateQuickLink {
        title: Some(None),
        logo: Some(None),
        ..Default::default()
    };
    let updated = store.update(link.id, &clear).await.unwrap().unwrap();
    assert_eq!(updated.title, None);
    assert_eq!(updated.logo, None);
    assert_eq!(updated.url, "https://x");
}

#[tokio::test]
async fn url_taken_honors_exclusion() {
    let store = MemoryStore::new();
    let ws = store.insert_workspace("Acme", "acme");
    let link = store.create(&new_link(ws.id, ALICE, "https://x")).await.unwrap();

    assert!(store.url_taken(ws.id, ALICE, "https://x", None).await.unwrap());
    assert!(!store.url_taken(ws.id, ALICE, "https://x", Some(link.id)).await.unwrap());
    assert!(!store.url_taken(ws.id, BOB, "https://x", None).await.unwrap());
}

#[tokio::test]
async fn delete_only_removes_own_link() {
    let store = MemoryStore::new();
    let ws = store.insert_workspace("Acme", "acme");
    let link = store.create(&new_link(ws.id, ALICE, "https://x")).await.unwrap();

    assert!(!store.delete_for_owner("acme", BOB, link.id).await.unwrap());
    assert_eq!(store.quick_link_count(), 1);

    assert!(store.delete_for_owner("acme", ALICE, link.id).await.unwrap());
    assert_eq!(store.quick_link_count(), 0);
    assert_eq!(store.mutation_count(), 2);
}
