pub mod data;
pub mod permissions;

pub use data::{
    AreaRecord, DeviceRecord, EntityRecord, PermissionGrant, RegistrySnapshot, StateAttributes,
    StateRecord,
};
pub use permissions::{PermissionLevel, ResourceType};

/// 调用者身份：由外部认证层解析，按原样信任。
#[derive(Debug, Clone)]
pub struct Caller {
    pub user_id: String,
    pub is_admin: bool,
}

impl Caller {
    /// 构造显式身份的调用者。
    pub fn new(user_id: impl Into<String>, is_admin: bool) -> Self {
        Self {
            user_id: user_id.into(),
            is_admin,
        }
    }
}
