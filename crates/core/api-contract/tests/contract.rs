use api_contract::{AreaEntitiesResponse, PermittedAreaDto, PermittedAreasResponse};
use serde_json::Value;
use std::collections::BTreeMap;

#[test]
fn permitted_area_fields_are_snake_case() {
    let response = PermittedAreasResponse {
        areas: vec![PermittedAreaDto {
            id: "kitchen".to_string(),
            display_name: "Kitchen".to_string(),
            icon: Some("mdi:stove".to_string()),
            entity_count: 4,
            permission_level: 2,
        }],
    };
    let value = serde_json::to_value(response).expect("serialize");
    let area = &value["areas"][0];
    assert_eq!(area["id"], "kitchen");
    assert_eq!(area["display_name"], "Kitchen");
    assert_eq!(area["entity_count"], 4);
    assert_eq!(area["permission_level"], 2);
    assert!(area.get("displayName").is_none());
}

#[test]
fn missing_icon_serializes_as_null() {
    let area = PermittedAreaDto {
        id: "garage".to_string(),
        display_name: "garage".to_string(),
        icon: None,
        entity_count: 0,
        permission_level: 1,
    };
    let value = serde_json::to_value(area).expect("serialize");
    assert!(matches!(value.get("icon"), Some(Value::Null)));
}

#[test]
fn area_entities_groups_by_domain() {
    let mut entities = BTreeMap::new();
    entities.insert(
        "light".to_string(),
        vec!["light.k1".to_string(), "light.k2".to_string()],
    );
    entities.insert("sensor".to_string(), vec!["sensor.temp".to_string()]);
    let response = AreaEntitiesResponse { entities };
    let value = serde_json::to_value(response).expect("serialize");
    assert_eq!(value["entities"]["light"][1], "light.k2");
    assert_eq!(value["entities"]["sensor"][0], "sensor.temp");
}
