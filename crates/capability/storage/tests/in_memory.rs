use ac_storage::{InMemoryStateStore, InMemoryUserStore, StateStore, UserStore};
use domain::{StateAttributes, StateRecord};

#[tokio::test]
async fn find_default_admin() {
    let store = InMemoryUserStore::with_default_admin();
    let user = store
        .find_by_username("admin")
        .await
        .expect("query")
        .expect("admin");
    assert_eq!(user.username, "admin");
    assert!(user.is_admin);
}

#[tokio::test]
async fn password_hash_updates_by_user_id() {
    let store = InMemoryUserStore::with_default_admin();
    let updated = store
        .update_password_hash("user-1", "$argon2id$fake")
        .await
        .expect("update");
    assert!(updated);

    let user = store
        .find_by_username("admin")
        .await
        .expect("query")
        .expect("admin");
    assert_eq!(user.password, "$argon2id$fake");
}

#[tokio::test]
async fn refresh_jti_binding_roundtrip() {
    let store = InMemoryUserStore::with_default_admin();
    assert!(store
        .set_refresh_jti("user-1", Some("jti-1"))
        .await
        .expect("set"));
    assert_eq!(
        store.get_refresh_jti("user-1").await.expect("get").as_deref(),
        Some("jti-1")
    );

    assert!(store.set_refresh_jti("user-1", None).await.expect("clear"));
    assert!(store.get_refresh_jti("user-1").await.expect("get").is_none());
}

#[tokio::test]
async fn unknown_user_updates_return_false() {
    let store = InMemoryUserStore::new();
    assert!(!store
        .update_password_hash("ghost", "hash")
        .await
        .expect("update"));
    assert!(!store.set_refresh_jti("ghost", None).await.expect("set"));
}

#[tokio::test]
async fn state_store_snapshot_reflects_upserts() {
    let store = InMemoryStateStore::new();
    store.upsert_state(StateRecord {
        entity_id: "select.permission_manager_u1_area_kitchen".to_string(),
        state: "2".to_string(),
        attributes: StateAttributes {
            user_id: Some("u1".to_string()),
            resource_type: Some("area".to_string()),
            resource_id: Some("area_kitchen".to_string()),
            resource_name: None,
        },
    });

    let states = store.grant_states().await.expect("snapshot");
    assert_eq!(states.len(), 1);
    assert_eq!(states[0].state, "2");

    store.remove_state("select.permission_manager_u1_area_kitchen");
    assert!(store.grant_states().await.expect("snapshot").is_empty());
}

#[tokio::test]
async fn state_upsert_replaces_by_entity_id() {
    let store = InMemoryStateStore::new();
    for state in ["1", "3"] {
        store.upsert_state(StateRecord {
            entity_id: "select.permission_manager_u1_area_kitchen".to_string(),
            state: state.to_string(),
            attributes: StateAttributes::default(),
        });
    }

    let states = store.grant_states().await.expect("snapshot");
    assert_eq!(states.len(), 1);
    assert_eq!(states[0].state, "3");
}
