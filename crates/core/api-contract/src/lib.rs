//! 稳定的 DTO 与 API 响应契约。
//!
//! 错误码是对外契约的一部分，保持稳定：
//! - `not_authenticated`：调用者身份缺失或无法解析
//! - `invalid_area_id`：area_id 格式校验失败
//! - `forbidden`：已认证但无对应区域授权
//! - `invalid_credentials`：登录凭据错误
//! - `internal_error`：存储/认证内部错误

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 登录请求体。
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// 登录响应体。
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires: u64,
    pub username: String,
    pub is_admin: bool,
}

/// 刷新 token 请求体。
#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// 刷新 token 响应体。
#[derive(Debug, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires: u64,
}

/// 单个可见区域的返回结构。
#[derive(Debug, Serialize)]
pub struct PermittedAreaDto {
    pub id: String,
    pub display_name: String,
    pub icon: Option<String>,
    pub entity_count: u64,
    pub permission_level: u8,
}

/// get_permitted_areas 成功载荷。
#[derive(Debug, Serialize)]
pub struct PermittedAreasResponse {
    pub areas: Vec<PermittedAreaDto>,
}

/// get_area_entities 成功载荷：domain -> 实体 ID 列表。
#[derive(Debug, Serialize)]
pub struct AreaEntitiesResponse {
    pub entities: BTreeMap<String, Vec<String>>,
}

/// 指标快照返回结构。
#[derive(Debug, Serialize)]
pub struct MetricsSnapshotDto {
    pub permitted_area_queries: u64,
    pub area_entity_queries: u64,
    pub denied_unauthenticated: u64,
    pub denied_invalid_input: u64,
    pub denied_forbidden: u64,
    pub malformed_grants_skipped: u64,
    pub dangling_grants_skipped: u64,
}
