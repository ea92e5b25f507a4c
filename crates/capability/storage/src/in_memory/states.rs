//! 授权状态内存存储实现
//!
//! 外部权限管理器的本地替身：按实体 ID 持有状态记录，
//! `grant_states` 交付当前内容的快照副本。

use crate::error::StorageError;
use crate::traits::StateStore;
use domain::data::StateRecord;
use std::collections::HashMap;
use std::sync::RwLock;

/// 授权状态内存存储
pub struct InMemoryStateStore {
    states: RwLock<HashMap<String, StateRecord>>,
}

impl InMemoryStateStore {
    /// 创建空的状态存储
    pub fn new() -> Self {
        Self {
            states: RwLock::new(HashMap::new()),
        }
    }

    /// 写入或替换状态记录（种子加载与测试用）
    pub fn upsert_state(&self, record: StateRecord) {
        if let Ok(mut map) = self.states.write() {
            map.insert(record.entity_id.clone(), record);
        }
    }

    /// 删除状态记录
    pub fn remove_state(&self, entity_id: &str) {
        if let Ok(mut map) = self.states.write() {
            map.remove(entity_id);
        }
    }
}

impl Default for InMemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl StateStore for InMemoryStateStore {
    async fn grant_states(&self) -> Result<Vec<StateRecord>, StorageError> {
        let map = self
            .states
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map.values().cloned().collect())
    }
}
