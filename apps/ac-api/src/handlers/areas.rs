//! 区域查询 handlers
//!
//! 提供两个查询接口：
//! - GET /areas - 列出调用者可见的区域（含实体计数与权限级别）
//! - GET /areas/{area_id}/entities - 列出单个区域内的实体（按 domain 分组）
//!
//! 流程：
//! 1. 解析调用者身份（token 缺失/无效视为无调用者，立即短路）
//! 2. 从存储获取授权状态与注册表的点时快照（不可用即 500）
//! 3. 委托查询服务执行校验、授权与解析
//! 4. 转换 DTO 并返回统一响应格式

use crate::AppState;
use crate::middleware::resolve_caller;
use crate::utils::response::{area_summary_to_dto, query_error, storage_error};
use ac_access::QueryError;
use ac_telemetry::{record_area_entity_query, record_permitted_area_query};
use api_contract::{ApiResponse, AreaEntitiesResponse, PermittedAreasResponse};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

#[derive(serde::Deserialize)]
pub struct AreaPath {
    area_id: String,
}

/// 列出调用者可见的区域
pub async fn get_permitted_areas(State(state): State<AppState>, headers: HeaderMap) -> Response {
    record_permitted_area_query();
    let caller = resolve_caller(&state, &headers);
    if caller.is_none() {
        return query_error(QueryError::NotAuthenticated);
    }

    let states = match state.state_store.grant_states().await {
        Ok(states) => states,
        Err(err) => return storage_error(err),
    };
    let registry = match state.registry.snapshot().await {
        Ok(registry) => registry,
        Err(err) => return storage_error(err),
    };

    match ac_access::get_permitted_areas(&registry, &states, caller.as_ref()) {
        Ok(areas) => {
            let areas = areas.into_iter().map(area_summary_to_dto).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(PermittedAreasResponse { areas })),
            )
                .into_response()
        }
        Err(err) => query_error(err),
    }
}

/// 列出单个区域内的实体
pub async fn get_area_entities(
    State(state): State<AppState>,
    Path(path): Path<AreaPath>,
    headers: HeaderMap,
) -> Response {
    record_area_entity_query();
    let caller = resolve_caller(&state, &headers);
    if caller.is_none() {
        return query_error(QueryError::NotAuthenticated);
    }

    let states = match state.state_store.grant_states().await {
        Ok(states) => states,
        Err(err) => return storage_error(err),
    };
    let registry = match state.registry.snapshot().await {
        Ok(registry) => registry,
        Err(err) => return storage_error(err),
    };

    match ac_access::get_area_entities(&registry, &states, caller.as_ref(), &path.area_id) {
        Ok(entities) => (
            StatusCode::OK,
            Json(ApiResponse::success(AreaEntitiesResponse { entities })),
        )
            .into_response(),
        Err(err) => query_error(err),
    }
}
