//! 区域归属解析
//!
//! 实体的有效区域：直接分配优先，否则回退所属设备的区域。
//! 该关系是视图而非持久状态，每次调用都从快照重新计算。

use domain::data::{EntityRecord, RegistrySnapshot};
use std::collections::{BTreeMap, HashMap};

/// 计算实体的有效区域。
///
/// 直接分配优先；无直接分配且设备缺失或未分配时返回 None（静默）。
pub fn effective_area<'a>(
    registry: &'a RegistrySnapshot,
    entity: &'a EntityRecord,
) -> Option<&'a str> {
    if let Some(area_id) = entity.area_id.as_deref() {
        return Some(area_id);
    }
    entity
        .device_id
        .as_deref()
        .and_then(|device_id| registry.device_area(device_id))
}

/// Contract A：列出有效区域等于 `area_id` 的启用实体，按 domain 分组。
///
/// domain 取实体 ID 第一个 `.` 之前的子串；无分隔符的 ID 以整个 ID 为组。
/// BTreeMap 保证分组在响应中的顺序确定；组内保持快照遍历顺序。
pub fn entities_by_area(
    registry: &RegistrySnapshot,
    area_id: &str,
) -> BTreeMap<String, Vec<String>> {
    let mut by_domain: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for entity in &registry.entities {
        if entity.disabled {
            continue;
        }
        if effective_area(registry, entity) != Some(area_id) {
            continue;
        }
        let domain = entity
            .entity_id
            .split('.')
            .next()
            .unwrap_or(&entity.entity_id);
        by_domain
            .entry(domain.to_string())
            .or_default()
            .push(entity.entity_id.clone());
    }
    by_domain
}

/// Contract B：一次遍历统计所有区域的启用实体数。
///
/// O(n)，供聚合层对每个区域取数；对每个区域调用 Contract A
/// 会退化为 O(n·areas)。
pub fn entity_counts_per_area(registry: &RegistrySnapshot) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for entity in &registry.entities {
        if entity.disabled {
            continue;
        }
        if let Some(area_id) = effective_area(registry, entity) {
            *counts.entry(area_id.to_string()).or_insert(0) += 1;
        }
    }
    counts
}
