//! 数据模型
//!
//! 快照记录类型（StateRecord、AreaRecord、EntityRecord、DeviceRecord、
//! RegistrySnapshot）定义在 `domain::data`，此处只定义认证侧的用户模型。

/// 用户记录（登录与 token 绑定用）。
///
/// password 为 argon2 哈希；历史明文口令在首次登录时透明升级。
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user_id: String,
    pub username: String,
    pub password: String,
    pub is_admin: bool,
    pub refresh_jti: Option<String>,
}
