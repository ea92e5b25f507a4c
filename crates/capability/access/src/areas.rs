//! 区域聚合
//!
//! 按调用者合并区域元数据、实体计数与权限级别。

use crate::grants::scan_permitted_areas;
use crate::membership::entity_counts_per_area;
use ac_telemetry::record_dangling_grant;
use domain::data::{RegistrySnapshot, StateRecord};
use domain::permissions::PermissionLevel;
use domain::Caller;

/// 聚合后的区域摘要。
#[derive(Debug, Clone)]
pub struct AreaSummary {
    pub area_id: String,
    pub display_name: String,
    pub icon: Option<String>,
    pub entity_count: usize,
    pub permission_level: PermissionLevel,
}

/// 解析调用者可见的区域列表。
///
/// 实体计数每次请求只计算一次（Contract B），两个分支共用，
/// 区域/授权数量多时仍保持 O(n)。
pub fn resolve_areas_for_caller(
    registry: &RegistrySnapshot,
    states: &[StateRecord],
    caller: &Caller,
) -> Vec<AreaSummary> {
    let entity_counts = entity_counts_per_area(registry);

    // 管理员可见全部区域，显示级别固定为 Edit（策略值，无对应授权记录）
    if caller.is_admin {
        return registry
            .areas
            .iter()
            .map(|area| AreaSummary {
                area_id: area.area_id.clone(),
                display_name: area.name.clone(),
                icon: area.icon.clone(),
                entity_count: entity_counts.get(&area.area_id).copied().unwrap_or(0),
                permission_level: PermissionLevel::Edit,
            })
            .collect();
    }

    let mut areas = Vec::new();
    for permitted in scan_permitted_areas(states, &caller.user_id) {
        // 授权指向的区域可能已被删除：静默跳过
        let Some(area) = registry.find_area(&permitted.area_id) else {
            record_dangling_grant();
            continue;
        };
        areas.push(AreaSummary {
            area_id: area.area_id.clone(),
            display_name: area.name.clone(),
            icon: area.icon.clone(),
            entity_count: entity_counts.get(&area.area_id).copied().unwrap_or(0),
            permission_level: permitted.level,
        });
    }
    tracing::debug!(
        user_id = %caller.user_id,
        permitted = areas.len(),
        "resolved permitted areas"
    );
    areas
}
