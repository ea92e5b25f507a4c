//! 授权记录扫描
//!
//! 状态存储中没有一等的授权存储：授权只是按命名前缀约定存在的状态记录。
//! 本模块是唯一理解该约定的边界适配器，向上只暴露类型化形式。

use ac_telemetry::record_malformed_grant;
use domain::data::{PermissionGrant, StateRecord};
use domain::permissions::{
    AREA_RESOURCE_PREFIX, GRANT_STATE_PREFIX, PermissionLevel, ResourceType,
};

/// 某用户对某区域的一条可见授权。
#[derive(Debug, Clone)]
pub struct PermittedArea {
    pub area_id: String,
    pub display_name: String,
    pub level: PermissionLevel,
}

/// 将快照中符合命名约定的记录解析为类型化授权。
///
/// 缺少必要属性、资源类型未知、状态值无法解析为已知级别的记录
/// 一律静默跳过并计数。可疑的授权数据只会收敛为"无授权"，
/// 绝不报错，也绝不扩权。
pub fn scan_grants(states: &[StateRecord]) -> Vec<PermissionGrant> {
    let mut grants = Vec::new();
    for record in states {
        if !record.entity_id.starts_with(GRANT_STATE_PREFIX) {
            continue;
        }
        match parse_grant(record) {
            Some(grant) => grants.push(grant),
            None => {
                tracing::debug!(entity_id = %record.entity_id, "skipping malformed grant record");
                record_malformed_grant();
            }
        }
    }
    grants
}

fn parse_grant(record: &StateRecord) -> Option<PermissionGrant> {
    let attributes = &record.attributes;
    let user_id = attributes.user_id.clone()?;
    let resource_type = ResourceType::parse(attributes.resource_type.as_deref()?)?;
    let resource_id = attributes.resource_id.clone()?;
    let level = PermissionLevel::from_state(&record.state)?;
    Some(PermissionGrant {
        user_id,
        resource_type,
        resource_id,
        resource_name: attributes.resource_name.clone(),
        level,
    })
}

/// 扫描指定用户的可见区域授权（级别 >= View）。
///
/// 结果按快照遍历顺序返回，不保证排序；
/// 需要确定顺序的调用方必须自行排序。
pub fn scan_permitted_areas(states: &[StateRecord], user_id: &str) -> Vec<PermittedArea> {
    tracing::debug!(user_id, "scanning grant records with prefix {GRANT_STATE_PREFIX}");
    let mut permitted = Vec::new();
    for grant in scan_grants(states) {
        if grant.user_id != user_id {
            continue;
        }
        if grant.resource_type != ResourceType::Area {
            continue;
        }
        if grant.level < PermissionLevel::View {
            continue;
        }
        let area_id = grant
            .resource_id
            .strip_prefix(AREA_RESOURCE_PREFIX)
            .unwrap_or(&grant.resource_id)
            .to_string();
        let display_name = grant
            .resource_name
            .unwrap_or_else(|| area_id.clone());
        tracing::debug!(
            user_id,
            area_id = %area_id,
            level = grant.level.as_u8(),
            "area grant accepted"
        );
        permitted.push(PermittedArea {
            area_id,
            display_name,
            level: grant.level,
        });
    }
    permitted
}
