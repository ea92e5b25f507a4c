//! 存储接口 Trait 定义
//!
//! 定义快照存储的异步接口：
//! - UserStore：用户存储（登录、口令升级、refresh token 绑定）
//! - StateStore：授权状态记录的点时快照
//! - RegistryStore：区域/实体/设备注册表的点时快照
//!
//! 设计原则：
//! - 快照接口只读；变更方法只存在于具体实现上，供外部设施的替身使用
//! - 所有接口返回 StorageError
//! - 使用 async_trait 支持动态分发

use crate::error::StorageError;
use crate::models::UserRecord;
use async_trait::async_trait;
use domain::data::{RegistrySnapshot, StateRecord};

/// 用户存储接口
///
/// 提供登录所需的用户查询与更新（禁止在 handler 中直连存储细节）。
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 根据用户名查找用户
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserRecord>, StorageError>;

    /// 更新口令哈希（明文口令升级用），返回是否更新成功
    async fn update_password_hash(
        &self,
        user_id: &str,
        password_hash: &str,
    ) -> Result<bool, StorageError>;

    /// 绑定当前有效的 refresh token jti（None 表示注销绑定）
    async fn set_refresh_jti(
        &self,
        user_id: &str,
        jti: Option<&str>,
    ) -> Result<bool, StorageError>;

    /// 读取当前绑定的 refresh token jti
    async fn get_refresh_jti(&self, user_id: &str) -> Result<Option<String>, StorageError>;
}

/// 授权状态存储接口
///
/// 交付外部权限管理器写入的状态记录的点时快照。
#[async_trait]
pub trait StateStore: Send + Sync {
    /// 获取全部状态记录的快照（含非授权记录，由扫描层按前缀过滤）
    async fn grant_states(&self) -> Result<Vec<StateRecord>, StorageError>;
}

/// 注册表存储接口
///
/// 交付区域/实体/设备注册表的点时快照。
#[async_trait]
pub trait RegistryStore: Send + Sync {
    /// 获取注册表快照（含设备索引）
    async fn snapshot(&self) -> Result<RegistrySnapshot, StorageError>;
}
