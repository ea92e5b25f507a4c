//! 用户内存存储实现
//!
//! 仅用于本地演示和测试。
//!
//! 功能：
//! - 内置 admin 账户（用户名：admin，密码：admin123）
//! - 根据用户名查找用户
//! - 口令哈希升级与 refresh token 绑定

use crate::error::StorageError;
use crate::models::UserRecord;
use crate::traits::UserStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// 用户内存存储
///
/// 使用 RwLock + HashMap（按用户名索引）提供线程安全的内存存储。
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    /// 创建空的用户存储
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// 内置 admin 账户
    ///
    /// 明文口令在首次登录时升级为 argon2 哈希。
    pub fn with_default_admin() -> Self {
        let store = Self::new();
        store.upsert_user(UserRecord {
            user_id: "user-1".to_string(),
            username: "admin".to_string(),
            password: "admin123".to_string(),
            is_admin: true,
            refresh_jti: None,
        });
        store
    }

    /// 写入或替换用户（种子加载用）
    pub fn upsert_user(&self, record: UserRecord) {
        if let Ok(mut map) = self.users.write() {
            map.insert(record.username.clone(), record);
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserRecord>, StorageError> {
        let map = self
            .users
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map.get(username).cloned())
    }

    async fn update_password_hash(
        &self,
        user_id: &str,
        password_hash: &str,
    ) -> Result<bool, StorageError> {
        let mut map = self
            .users
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        match map.values_mut().find(|user| user.user_id == user_id) {
            Some(user) => {
                user.password = password_hash.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_refresh_jti(
        &self,
        user_id: &str,
        jti: Option<&str>,
    ) -> Result<bool, StorageError> {
        let mut map = self
            .users
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        match map.values_mut().find(|user| user.user_id == user_id) {
            Some(user) => {
                user.refresh_jti = jti.map(|value| value.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn get_refresh_jti(&self, user_id: &str) -> Result<Option<String>, StorageError> {
        let map = self
            .users
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map
            .values()
            .find(|user| user.user_id == user_id)
            .and_then(|user| user.refresh_jti.clone()))
    }
}
