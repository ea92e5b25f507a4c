//! 注册表内存存储实现
//!
//! 区域/实体/设备注册设施的本地替身。记录按写入顺序保存，
//! `snapshot` 每次交付带设备索引的副本；副本构造在短读锁内完成，
//! 解析 pass 不持锁运行。

use crate::error::StorageError;
use crate::traits::RegistryStore;
use domain::data::{AreaRecord, DeviceRecord, EntityRecord, RegistrySnapshot};
use std::sync::RwLock;

#[derive(Default)]
struct RegistryInner {
    areas: Vec<AreaRecord>,
    entities: Vec<EntityRecord>,
    devices: Vec<DeviceRecord>,
}

/// 注册表内存存储
pub struct InMemoryRegistryStore {
    inner: RwLock<RegistryInner>,
}

impl InMemoryRegistryStore {
    /// 创建空的注册表存储
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RegistryInner::default()),
        }
    }

    /// 写入或替换区域（按 area_id 去重）
    pub fn put_area(&self, record: AreaRecord) {
        if let Ok(mut inner) = self.inner.write() {
            match inner
                .areas
                .iter_mut()
                .find(|area| area.area_id == record.area_id)
            {
                Some(existing) => *existing = record,
                None => inner.areas.push(record),
            }
        }
    }

    /// 写入或替换实体（按 entity_id 去重）
    pub fn put_entity(&self, record: EntityRecord) {
        if let Ok(mut inner) = self.inner.write() {
            match inner
                .entities
                .iter_mut()
                .find(|entity| entity.entity_id == record.entity_id)
            {
                Some(existing) => *existing = record,
                None => inner.entities.push(record),
            }
        }
    }

    /// 写入或替换设备（按 device_id 去重）
    pub fn put_device(&self, record: DeviceRecord) {
        if let Ok(mut inner) = self.inner.write() {
            match inner
                .devices
                .iter_mut()
                .find(|device| device.device_id == record.device_id)
            {
                Some(existing) => *existing = record,
                None => inner.devices.push(record),
            }
        }
    }

    /// 删除区域
    pub fn remove_area(&self, area_id: &str) {
        if let Ok(mut inner) = self.inner.write() {
            inner.areas.retain(|area| area.area_id != area_id);
        }
    }
}

impl Default for InMemoryRegistryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RegistryStore for InMemoryRegistryStore {
    async fn snapshot(&self) -> Result<RegistrySnapshot, StorageError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(RegistrySnapshot::new(
            inner.areas.clone(),
            inner.entities.clone(),
            inner.devices.clone(),
        ))
    }
}
