//! Telemetry 指标快照
//!
//! - GET /metrics（仅管理员）

use crate::AppState;
use crate::middleware::resolve_caller;
use crate::utils::response::query_error;
use ac_access::QueryError;
use ac_telemetry::metrics;
use api_contract::{ApiResponse, MetricsSnapshotDto};
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

pub async fn get_metrics(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let caller = match resolve_caller(&state, &headers) {
        Some(caller) => caller,
        None => return query_error(QueryError::NotAuthenticated),
    };
    if !caller.is_admin {
        return query_error(QueryError::Forbidden);
    }

    let snapshot = metrics().snapshot();
    (
        StatusCode::OK,
        Json(ApiResponse::success(MetricsSnapshotDto {
            permitted_area_queries: snapshot.permitted_area_queries,
            area_entity_queries: snapshot.area_entity_queries,
            denied_unauthenticated: snapshot.denied_unauthenticated,
            denied_invalid_input: snapshot.denied_invalid_input,
            denied_forbidden: snapshot.denied_forbidden,
            malformed_grants_skipped: snapshot.malformed_grants_skipped,
            dangling_grants_skipped: snapshot.dangling_grants_skipped,
        })),
    )
        .into_response()
}
