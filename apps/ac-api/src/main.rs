//! 区域可见性 HTTP API：登录/刷新、可见区域查询、区域实体查询。

mod handlers;
mod middleware;
mod routes;
mod seed;
mod utils;

use ac_auth::{AuthService, JwtManager};
use ac_config::AppConfig;
use ac_storage::{
    InMemoryRegistryStore, InMemoryStateStore, InMemoryUserStore, RegistryStore, StateStore,
};
use ac_telemetry::init_tracing;
use std::sync::Arc;

/// 应用共享状态。
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub state_store: Arc<dyn StateStore>,
    pub registry: Arc<dyn RegistryStore>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    // 内存存储：外部权限管理器与注册设施的本地替身
    let user_store = Arc::new(InMemoryUserStore::with_default_admin());
    let state_store = Arc::new(InMemoryStateStore::new());
    let registry_store = Arc::new(InMemoryRegistryStore::new());

    // 可选的快照种子（AC_SEED_PATH 指向 JSON 文件）
    if let Some(path) = config.seed_path.as_deref() {
        seed::load_seed(path, &registry_store, &state_store, &user_store)?;
    }

    // JWT 管理器与认证服务
    let jwt = JwtManager::new(
        config.jwt_secret.clone(),
        config.jwt_access_ttl_seconds,
        config.jwt_refresh_ttl_seconds,
    );
    let auth = Arc::new(AuthService::new(user_store.clone(), jwt));
    let state = AppState {
        auth,
        state_store,
        registry: registry_store,
    };

    let app = routes::create_api_router()
        .with_state(state)
        // 注入 request_id/trace_id
        .layer(axum::middleware::from_fn(middleware::request_context));

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    tracing::info!(addr = %config.http_addr, "area-control api listening");
    axum::serve(listener, app).await?;
    Ok(())
}
