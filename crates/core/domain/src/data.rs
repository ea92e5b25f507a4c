//! 快照数据模型
//!
//! 定义各解析函数消费的只读快照类型：
//! - 状态记录：StateRecord, StateAttributes（授权记录的原始形式）
//! - 类型化授权：PermissionGrant
//! - 注册表记录：AreaRecord, EntityRecord, DeviceRecord
//! - 注册表快照：RegistrySnapshot
//!
//! 所有类型均为某一时刻的视图，由调用方每次请求重新获取，
//! 本 crate 不持有、不缓存、不修改任何全局状态。

use crate::permissions::{PermissionLevel, ResourceType};
use serde::Deserialize;
use std::collections::HashMap;

/// 状态存储中的一条原始记录。
#[derive(Debug, Clone, Deserialize)]
pub struct StateRecord {
    pub entity_id: String,
    pub state: String,
    #[serde(default)]
    pub attributes: StateAttributes,
}

/// 状态记录的属性（显式可选字段，不使用动态属性包）。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateAttributes {
    pub user_id: Option<String>,
    pub resource_type: Option<String>,
    pub resource_id: Option<String>,
    pub resource_name: Option<String>,
}

/// 类型化的授权记录：一个用户对一个资源的访问级别。
///
/// 由 access 层的扫描适配器从 StateRecord 解析得到，
/// resource_id 保留原始值（含 `area_` 前缀）。
#[derive(Debug, Clone)]
pub struct PermissionGrant {
    pub user_id: String,
    pub resource_type: ResourceType,
    pub resource_id: String,
    pub resource_name: Option<String>,
    pub level: PermissionLevel,
}

/// 区域记录。
#[derive(Debug, Clone, Deserialize)]
pub struct AreaRecord {
    pub area_id: String,
    pub name: String,
    pub icon: Option<String>,
}

/// 实体记录，entity_id 形如 `"<domain>.<object>"`。
#[derive(Debug, Clone, Deserialize)]
pub struct EntityRecord {
    pub entity_id: String,
    pub area_id: Option<String>,
    pub device_id: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

/// 设备记录，仅为缺少直接区域分配的实体提供回退区域。
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceRecord {
    pub device_id: String,
    pub area_id: Option<String>,
}

/// 注册表某一时刻的只读快照。
///
/// 设备按 device_id 建索引，使回退查找为 O(1)，
/// 各解析 pass 保持整体 O(n)。
#[derive(Debug, Clone, Default)]
pub struct RegistrySnapshot {
    pub areas: Vec<AreaRecord>,
    pub entities: Vec<EntityRecord>,
    devices: HashMap<String, DeviceRecord>,
}

impl RegistrySnapshot {
    /// 从记录列表构造快照，建立设备索引。
    pub fn new(
        areas: Vec<AreaRecord>,
        entities: Vec<EntityRecord>,
        devices: Vec<DeviceRecord>,
    ) -> Self {
        let devices = devices
            .into_iter()
            .map(|device| (device.device_id.clone(), device))
            .collect();
        Self {
            areas,
            entities,
            devices,
        }
    }

    /// 查找区域记录。
    pub fn find_area(&self, area_id: &str) -> Option<&AreaRecord> {
        self.areas.iter().find(|area| area.area_id == area_id)
    }

    /// 查找设备的区域分配；设备不存在或未分配返回 None。
    pub fn device_area(&self, device_id: &str) -> Option<&str> {
        self.devices
            .get(device_id)
            .and_then(|device| device.area_id.as_deref())
    }
}
