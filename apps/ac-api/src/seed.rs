//! 快照种子加载
//!
//! 演示部署用：从 JSON 文件向内存存储写入初始数据，
//! 充当外部注册设施与权限管理器的替身。
//! 文件结构：`{ areas, devices, entities, grants, users }`，字段均可省略。

use ac_storage::{InMemoryRegistryStore, InMemoryStateStore, InMemoryUserStore, UserRecord};
use domain::data::{AreaRecord, DeviceRecord, EntityRecord, StateRecord};
use serde::Deserialize;

#[derive(Deserialize)]
struct SeedFile {
    #[serde(default)]
    areas: Vec<AreaRecord>,
    #[serde(default)]
    devices: Vec<DeviceRecord>,
    #[serde(default)]
    entities: Vec<EntityRecord>,
    #[serde(default)]
    grants: Vec<StateRecord>,
    #[serde(default)]
    users: Vec<SeedUser>,
}

#[derive(Deserialize)]
struct SeedUser {
    user_id: String,
    username: String,
    password: String,
    #[serde(default)]
    is_admin: bool,
}

/// 加载种子文件并写入内存存储。
pub fn load_seed(
    path: &str,
    registry: &InMemoryRegistryStore,
    states: &InMemoryStateStore,
    users: &InMemoryUserStore,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let seed: SeedFile = serde_json::from_str(&raw)?;

    tracing::info!(
        areas = seed.areas.len(),
        devices = seed.devices.len(),
        entities = seed.entities.len(),
        grants = seed.grants.len(),
        users = seed.users.len(),
        path,
        "loading snapshot seed"
    );

    for area in seed.areas {
        registry.put_area(area);
    }
    for device in seed.devices {
        registry.put_device(device);
    }
    for entity in seed.entities {
        registry.put_entity(entity);
    }
    for grant in seed.grants {
        states.upsert_state(grant);
    }
    for user in seed.users {
        users.upsert_user(UserRecord {
            user_id: user.user_id,
            username: user.username,
            password: user.password,
            is_admin: user.is_admin,
            refresh_jti: None,
        });
    }
    Ok(())
}
