use ac_access::{QueryError, get_area_entities, get_permitted_areas};
use domain::{
    AreaRecord, Caller, DeviceRecord, EntityRecord, RegistrySnapshot, StateAttributes, StateRecord,
};

fn registry() -> RegistrySnapshot {
    RegistrySnapshot::new(
        vec![AreaRecord {
            area_id: "kitchen".to_string(),
            name: "Kitchen".to_string(),
            icon: None,
        }],
        vec![
            EntityRecord {
                entity_id: "light.k1".to_string(),
                area_id: Some("kitchen".to_string()),
                device_id: None,
                disabled: false,
            },
            EntityRecord {
                entity_id: "sensor.temp".to_string(),
                area_id: None,
                device_id: Some("dev-1".to_string()),
                disabled: false,
            },
        ],
        vec![DeviceRecord {
            device_id: "dev-1".to_string(),
            area_id: Some("kitchen".to_string()),
        }],
    )
}

fn grant_record(user: &str, area: &str, name: Option<&str>, state: &str) -> StateRecord {
    StateRecord {
        entity_id: format!("select.permission_manager_{user}_area_{area}"),
        state: state.to_string(),
        attributes: StateAttributes {
            user_id: Some(user.to_string()),
            resource_type: Some("area".to_string()),
            resource_id: Some(format!("area_{area}")),
            resource_name: name.map(|value| value.to_string()),
        },
    }
}

#[test]
fn missing_caller_is_unauthenticated() {
    let registry = registry();
    let result = get_permitted_areas(&registry, &[], None);
    assert!(matches!(result, Err(QueryError::NotAuthenticated)));

    let result = get_area_entities(&registry, &[], None, "kitchen");
    assert!(matches!(result, Err(QueryError::NotAuthenticated)));
}

#[test]
fn authentication_is_checked_before_validation() {
    // 未认证且 area_id 畸形：先报未认证
    let registry = registry();
    let result = get_area_entities(&registry, &[], None, "kitchen;drop");
    assert!(matches!(result, Err(QueryError::NotAuthenticated)));
}

#[test]
fn invalid_area_id_is_rejected_before_authorization() {
    // 已认证、无任何授权、area_id 畸形：先报格式错误
    let registry = registry();
    let caller = Caller::new("u1", false);
    let result = get_area_entities(&registry, &[], Some(&caller), "kitchen;drop");
    assert!(matches!(result, Err(QueryError::InvalidAreaId)));
}

#[test]
fn valid_id_charset_passes() {
    let registry = registry();
    let caller = Caller::new("u1", false);
    let states = vec![grant_record("u1", "kitchen-1_A", None, "1")];
    // 校验通过后按授权继续（区域不在注册表，返回空分组而非格式错误）
    let result = get_area_entities(&registry, &states, Some(&caller), "kitchen-1_A");
    assert!(result.expect("valid id").is_empty());
}

#[test]
fn empty_and_oversized_ids_are_rejected() {
    let registry = registry();
    let caller = Caller::new("u1", true);

    let result = get_area_entities(&registry, &[], Some(&caller), "");
    assert!(matches!(result, Err(QueryError::InvalidAreaId)));

    let oversized = "a".repeat(256);
    let result = get_area_entities(&registry, &[], Some(&caller), &oversized);
    assert!(matches!(result, Err(QueryError::InvalidAreaId)));
}

#[test]
fn non_admin_without_grant_is_forbidden() {
    let registry = registry();
    let caller = Caller::new("u1", false);
    let result = get_area_entities(&registry, &[], Some(&caller), "kitchen");
    assert!(matches!(result, Err(QueryError::Forbidden)));
}

#[test]
fn grant_below_view_is_still_forbidden() {
    let registry = registry();
    let caller = Caller::new("u1", false);
    let states = vec![grant_record("u1", "kitchen", None, "0")];
    let result = get_area_entities(&registry, &states, Some(&caller), "kitchen");
    assert!(matches!(result, Err(QueryError::Forbidden)));
}

#[test]
fn admin_bypasses_grant_check() {
    let registry = registry();
    let caller = Caller::new("admin-1", true);
    let entities = get_area_entities(&registry, &[], Some(&caller), "kitchen").expect("admin");
    assert_eq!(entities["light"], vec!["light.k1".to_string()]);
    assert_eq!(entities["sensor"], vec!["sensor.temp".to_string()]);
}

#[test]
fn granted_caller_gets_grouped_entities() {
    let registry = registry();
    let caller = Caller::new("u1", false);
    let states = vec![grant_record("u1", "kitchen", None, "1")];
    let entities = get_area_entities(&registry, &states, Some(&caller), "kitchen").expect("granted");
    assert_eq!(entities.len(), 2);
}

#[test]
fn permitted_area_count_matches_entity_listing() {
    let registry = registry();
    let caller = Caller::new("u1", false);
    let states = vec![grant_record("u1", "kitchen", None, "2")];

    let areas = get_permitted_areas(&registry, &states, Some(&caller)).expect("areas");
    let entities =
        get_area_entities(&registry, &states, Some(&caller), "kitchen").expect("entities");
    let listed: usize = entities.values().map(|ids| ids.len()).sum();

    assert_eq!(areas[0].entity_count, listed);
}

#[test]
fn kitchen_grant_end_to_end() {
    // grants: u1 对 kitchen 级别 2；注册表一个 kitchen 实体；非管理员调用
    let registry = RegistrySnapshot::new(
        vec![AreaRecord {
            area_id: "kitchen".to_string(),
            name: "Kitchen".to_string(),
            icon: None,
        }],
        vec![EntityRecord {
            entity_id: "light.k1".to_string(),
            area_id: Some("kitchen".to_string()),
            device_id: None,
            disabled: false,
        }],
        vec![],
    );
    let states = vec![grant_record("u1", "kitchen", Some("Kitchen"), "2")];
    let caller = Caller::new("u1", false);

    let areas = get_permitted_areas(&registry, &states, Some(&caller)).expect("areas");
    assert_eq!(areas.len(), 1);
    assert_eq!(areas[0].area_id, "kitchen");
    assert_eq!(areas[0].display_name, "Kitchen");
    assert_eq!(areas[0].entity_count, 1);
    assert_eq!(areas[0].permission_level.as_u8(), 2);

    let entities =
        get_area_entities(&registry, &states, Some(&caller), "kitchen").expect("entities");
    assert_eq!(entities["light"], vec!["light.k1".to_string()]);
}
