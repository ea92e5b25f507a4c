//! 查询服务
//!
//! 两个单发、无状态的查询操作。每个操作按固定顺序短路退出：
//! 认证 → 输入校验 → 授权 → 成功，四个出口均为终态。

use crate::areas::{AreaSummary, resolve_areas_for_caller};
use crate::grants::scan_permitted_areas;
use crate::membership::entities_by_area;
use domain::data::{RegistrySnapshot, StateRecord};
use domain::Caller;
use std::collections::BTreeMap;

/// 查询操作的终止性错误。
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("User not authenticated")]
    NotAuthenticated,
    #[error("Invalid area_id format")]
    InvalidAreaId,
    #[error("No permission for this area")]
    Forbidden,
}

impl QueryError {
    /// 对外契约中的稳定错误码。
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotAuthenticated => "not_authenticated",
            Self::InvalidAreaId => "invalid_area_id",
            Self::Forbidden => "forbidden",
        }
    }
}

/// area_id 格式校验：1–255 个字符，仅字母、数字、下划线、连字符。
///
/// 在任何注册表访问之前执行，标识符会被用作查找键，
/// 其余字符一律拒绝。
fn valid_area_id(area_id: &str) -> bool {
    !area_id.is_empty()
        && area_id.len() <= 255
        && area_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// 列出调用者可见的区域。
pub fn get_permitted_areas(
    registry: &RegistrySnapshot,
    states: &[StateRecord],
    caller: Option<&Caller>,
) -> Result<Vec<AreaSummary>, QueryError> {
    let caller = caller.ok_or(QueryError::NotAuthenticated)?;
    Ok(resolve_areas_for_caller(registry, states, caller))
}

/// 列出单个区域内的启用实体，按 domain 分组。
///
/// 非管理员需持有该区域 >= View 的授权；管理员跳过授权检查。
pub fn get_area_entities(
    registry: &RegistrySnapshot,
    states: &[StateRecord],
    caller: Option<&Caller>,
    area_id: &str,
) -> Result<BTreeMap<String, Vec<String>>, QueryError> {
    let caller = caller.ok_or(QueryError::NotAuthenticated)?;
    if !valid_area_id(area_id) {
        return Err(QueryError::InvalidAreaId);
    }
    if !caller.is_admin {
        let permitted = scan_permitted_areas(states, &caller.user_id);
        if !permitted.iter().any(|area| area.area_id == area_id) {
            return Err(QueryError::Forbidden);
        }
    }
    Ok(entities_by_area(registry, area_id))
}
