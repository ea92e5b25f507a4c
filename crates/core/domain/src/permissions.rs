//! 权限语义：权限级别、资源类型与授权记录命名约定。
//!
//! 授权记录由外部权限管理组件写入状态存储，
//! 实体 ID 格式：`select.permission_manager_{user}_{resource_type}_{resource}`。
//! 本系统只读取这些记录，不创建、不修改。

/// 授权记录的实体 ID 前缀。
pub const GRANT_STATE_PREFIX: &str = "select.permission_manager_";

/// 区域资源 ID 前缀（resource_id 去掉该前缀得到裸区域 ID）。
pub const AREA_RESOURCE_PREFIX: &str = "area_";

/// 区域资源类型标识。
pub const RESOURCE_TYPE_AREA: &str = "area";

/// 权限级别（全序，数值越大权限越宽；>= View 才可见）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PermissionLevel {
    /// 无访问权限。
    Closed = 0,
    /// 只读可见。
    View = 1,
    /// 部分交互。
    Limited = 2,
    /// 完全交互。
    Edit = 3,
}

impl PermissionLevel {
    /// 从整数值解析权限级别。
    ///
    /// 范围外的值视为无授权（宁缺毋滥：未知级别不得扩大访问）。
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Closed),
            1 => Some(Self::View),
            2 => Some(Self::Limited),
            3 => Some(Self::Edit),
            _ => None,
        }
    }

    /// 从状态值字符串解析权限级别。
    ///
    /// 状态值来自自由格式的状态存储，非整数视为无授权，不报错。
    pub fn from_state(state: &str) -> Option<Self> {
        state.trim().parse::<i64>().ok().and_then(Self::from_value)
    }

    /// 用于 DTO 编码的整数表示。
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// 授权资源类型（本系统仅消费 Area 变体）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Area,
    Device,
    Entity,
}

impl ResourceType {
    /// 解析资源类型字符串；未知类型返回 None。
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            RESOURCE_TYPE_AREA => Some(Self::Area),
            "device" => Some(Self::Device),
            "entity" => Some(Self::Entity),
            _ => None,
        }
    }
}
