//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers。
//! 路由包括：
//! - 健康检查：/health
//! - 认证接口：/login, /refresh-token
//! - 区域查询：/areas, /areas/{id}/entities
//! - 指标快照：/metrics（仅管理员）

use super::AppState;
use super::handlers::*;
use axum::{
    Router,
    routing::{get, post},
};

/// 创建 API 路由
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/login", post(login))
        .route("/refresh-token", post(refresh_token))
        .route("/areas", get(get_permitted_areas))
        .route("/areas/:area_id/entities", get(get_area_entities))
        .route("/metrics", get(get_metrics))
}
