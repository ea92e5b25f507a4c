//! 追踪与请求 ID 生成。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 基础指标快照。
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub permitted_area_queries: u64,
    pub area_entity_queries: u64,
    pub denied_unauthenticated: u64,
    pub denied_invalid_input: u64,
    pub denied_forbidden: u64,
    pub malformed_grants_skipped: u64,
    pub dangling_grants_skipped: u64,
}

/// 基础指标。
///
/// 授权数据的静默排除（宁缺毋滥策略）不报错，
/// 但必须可观测，因此按类别计数。
pub struct TelemetryMetrics {
    permitted_area_queries: AtomicU64,
    area_entity_queries: AtomicU64,
    denied_unauthenticated: AtomicU64,
    denied_invalid_input: AtomicU64,
    denied_forbidden: AtomicU64,
    malformed_grants_skipped: AtomicU64,
    dangling_grants_skipped: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            permitted_area_queries: AtomicU64::new(0),
            area_entity_queries: AtomicU64::new(0),
            denied_unauthenticated: AtomicU64::new(0),
            denied_invalid_input: AtomicU64::new(0),
            denied_forbidden: AtomicU64::new(0),
            malformed_grants_skipped: AtomicU64::new(0),
            dangling_grants_skipped: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            permitted_area_queries: self.permitted_area_queries.load(Ordering::Relaxed),
            area_entity_queries: self.area_entity_queries.load(Ordering::Relaxed),
            denied_unauthenticated: self.denied_unauthenticated.load(Ordering::Relaxed),
            denied_invalid_input: self.denied_invalid_input.load(Ordering::Relaxed),
            denied_forbidden: self.denied_forbidden.load(Ordering::Relaxed),
            malformed_grants_skipped: self.malformed_grants_skipped.load(Ordering::Relaxed),
            dangling_grants_skipped: self.dangling_grants_skipped.load(Ordering::Relaxed),
        }
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录 get_permitted_areas 查询次数。
pub fn record_permitted_area_query() {
    metrics()
        .permitted_area_queries
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录 get_area_entities 查询次数。
pub fn record_area_entity_query() {
    metrics().area_entity_queries.fetch_add(1, Ordering::Relaxed);
}

/// 记录未认证拒绝次数。
pub fn record_denied_unauthenticated() {
    metrics()
        .denied_unauthenticated
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录输入校验拒绝次数。
pub fn record_denied_invalid_input() {
    metrics()
        .denied_invalid_input
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录无授权拒绝次数。
pub fn record_denied_forbidden() {
    metrics().denied_forbidden.fetch_add(1, Ordering::Relaxed);
}

/// 记录畸形授权记录跳过次数（状态值无法解析为已知级别）。
pub fn record_malformed_grant() {
    metrics()
        .malformed_grants_skipped
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录悬空授权跳过次数（授权指向的区域已不在注册表）。
pub fn record_dangling_grant() {
    metrics()
        .dangling_grants_skipped
        .fetch_add(1, Ordering::Relaxed);
}
