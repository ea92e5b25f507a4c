//! HTTP 响应辅助函数和 DTO 转换
//!
//! 提供统一的错误响应构造函数和 DTO 转换函数：
//! - 错误响应：query_error, invalid_credentials_error, auth_error,
//!   internal_auth_error, storage_error
//! - DTO 转换：area_summary_to_dto
//!
//! 设计原则：
//! - 所有错误返回统一的 ApiResponse 格式
//! - 错误码是对外契约，HTTP 状态码与错误码一一对应
//! - 拒绝类错误在此统一计数

use ac_access::{AreaSummary, QueryError};
use ac_auth::AuthError;
use ac_storage::StorageError;
use ac_telemetry::{
    record_denied_forbidden, record_denied_invalid_input, record_denied_unauthenticated,
};
use api_contract::{ApiResponse, PermittedAreaDto};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// 查询服务错误响应（含拒绝计数）
pub fn query_error(err: QueryError) -> Response {
    let status = match err {
        QueryError::NotAuthenticated => {
            record_denied_unauthenticated();
            StatusCode::UNAUTHORIZED
        }
        QueryError::InvalidAreaId => {
            record_denied_invalid_input();
            StatusCode::BAD_REQUEST
        }
        QueryError::Forbidden => {
            record_denied_forbidden();
            StatusCode::FORBIDDEN
        }
    };
    let body = ApiResponse::<()>::error(err.code(), err.to_string());
    (status, Json(body)).into_response()
}

/// 登录凭据错误响应
pub fn invalid_credentials_error() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiResponse::<()>::error(
            "invalid_credentials",
            "invalid credentials",
        )),
    )
        .into_response()
}

/// 认证错误响应（token 缺失/无效/过期）
pub fn auth_error() -> Response {
    record_denied_unauthenticated();
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiResponse::<()>::error(
            "not_authenticated",
            "User not authenticated",
        )),
    )
        .into_response()
}

/// 认证内部错误响应
pub fn internal_auth_error(err: AuthError) -> Response {
    let message = err.to_string();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("internal_error", message)),
    )
        .into_response()
}

/// 存储错误响应（快照源不可用等致命条件）
pub fn storage_error(err: StorageError) -> Response {
    let message = err.to_string();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("internal_error", message)),
    )
        .into_response()
}

/// AreaSummary 转 PermittedAreaDto
pub fn area_summary_to_dto(summary: AreaSummary) -> PermittedAreaDto {
    PermittedAreaDto {
        id: summary.area_id,
        display_name: summary.display_name,
        icon: summary.icon,
        entity_count: summary.entity_count as u64,
        permission_level: summary.permission_level.as_u8(),
    }
}
