use ac_access::{effective_area, entities_by_area, entity_counts_per_area};
use domain::{AreaRecord, DeviceRecord, EntityRecord, RegistrySnapshot};

fn area(id: &str) -> AreaRecord {
    AreaRecord {
        area_id: id.to_string(),
        name: id.to_string(),
        icon: None,
    }
}

fn entity(id: &str, area_id: Option<&str>, device_id: Option<&str>, disabled: bool) -> EntityRecord {
    EntityRecord {
        entity_id: id.to_string(),
        area_id: area_id.map(|value| value.to_string()),
        device_id: device_id.map(|value| value.to_string()),
        disabled,
    }
}

fn device(id: &str, area_id: Option<&str>) -> DeviceRecord {
    DeviceRecord {
        device_id: id.to_string(),
        area_id: area_id.map(|value| value.to_string()),
    }
}

#[test]
fn entity_inherits_area_from_device() {
    let registry = RegistrySnapshot::new(
        vec![area("kitchen")],
        vec![entity("light.k1", None, Some("dev-1"), false)],
        vec![device("dev-1", Some("kitchen"))],
    );

    let result = entities_by_area(&registry, "kitchen");
    assert_eq!(result["light"], vec!["light.k1".to_string()]);
}

#[test]
fn direct_assignment_wins_over_device() {
    let registry = RegistrySnapshot::new(
        vec![area("kitchen"), area("garage")],
        vec![entity("light.k1", Some("garage"), Some("dev-1"), false)],
        vec![device("dev-1", Some("kitchen"))],
    );

    assert_eq!(
        effective_area(&registry, &registry.entities[0]),
        Some("garage")
    );
    assert!(entities_by_area(&registry, "kitchen").is_empty());
}

#[test]
fn missing_device_means_no_membership() {
    let registry = RegistrySnapshot::new(
        vec![area("kitchen")],
        vec![entity("light.k1", None, Some("dev-gone"), false)],
        vec![],
    );

    assert_eq!(effective_area(&registry, &registry.entities[0]), None);
    assert!(entities_by_area(&registry, "kitchen").is_empty());
    assert!(entity_counts_per_area(&registry).is_empty());
}

#[test]
fn disabled_entities_are_excluded_everywhere() {
    let registry = RegistrySnapshot::new(
        vec![area("kitchen")],
        vec![
            entity("light.k1", Some("kitchen"), None, true),
            entity("light.k2", Some("kitchen"), None, false),
        ],
        vec![],
    );

    let grouped = entities_by_area(&registry, "kitchen");
    assert_eq!(grouped["light"], vec!["light.k2".to_string()]);

    let counts = entity_counts_per_area(&registry);
    assert_eq!(counts["kitchen"], 1);
}

#[test]
fn entities_group_by_domain_in_encounter_order() {
    let registry = RegistrySnapshot::new(
        vec![area("kitchen")],
        vec![
            entity("sensor.temp", Some("kitchen"), None, false),
            entity("light.k1", Some("kitchen"), None, false),
            entity("light.k2", Some("kitchen"), None, false),
        ],
        vec![],
    );

    let grouped = entities_by_area(&registry, "kitchen");
    assert_eq!(
        grouped["light"],
        vec!["light.k1".to_string(), "light.k2".to_string()]
    );
    assert_eq!(grouped["sensor"], vec!["sensor.temp".to_string()]);
    // BTreeMap：domain 顺序确定
    let domains: Vec<&String> = grouped.keys().collect();
    assert_eq!(domains, vec!["light", "sensor"]);
}

#[test]
fn separatorless_id_groups_under_whole_id() {
    let registry = RegistrySnapshot::new(
        vec![area("kitchen")],
        vec![entity("orphan", Some("kitchen"), None, false)],
        vec![],
    );

    let grouped = entities_by_area(&registry, "kitchen");
    assert_eq!(grouped["orphan"], vec!["orphan".to_string()]);
}

#[test]
fn counts_cover_all_areas_in_one_pass() {
    let registry = RegistrySnapshot::new(
        vec![area("kitchen"), area("garage"), area("attic")],
        vec![
            entity("light.k1", Some("kitchen"), None, false),
            entity("light.k2", None, Some("dev-1"), false),
            entity("cover.g1", Some("garage"), None, false),
            entity("cover.g2", Some("garage"), None, true),
        ],
        vec![device("dev-1", Some("kitchen"))],
    );

    let counts = entity_counts_per_area(&registry);
    assert_eq!(counts.get("kitchen").copied(), Some(2));
    assert_eq!(counts.get("garage").copied(), Some(1));
    assert_eq!(counts.get("attic"), None);
}

#[test]
fn counts_agree_with_grouped_listing() {
    let registry = RegistrySnapshot::new(
        vec![area("kitchen"), area("garage")],
        vec![
            entity("light.k1", Some("kitchen"), None, false),
            entity("sensor.temp", None, Some("dev-1"), false),
            entity("light.g1", Some("garage"), None, false),
            entity("light.dead", Some("kitchen"), None, true),
        ],
        vec![device("dev-1", Some("kitchen"))],
    );

    let counts = entity_counts_per_area(&registry);
    for area_id in ["kitchen", "garage"] {
        let grouped = entities_by_area(&registry, area_id);
        let listed: usize = grouped.values().map(|ids| ids.len()).sum();
        assert_eq!(counts.get(area_id).copied().unwrap_or(0), listed);
    }
}
