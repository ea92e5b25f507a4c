//! 认证相关 handlers：登录、刷新 token
//!
//! ## 提供的端点
//!
//! - `GET /health` - 健康检查，返回 `{"ok": true}`
//! - `POST /login` - 用户登录，验证用户名密码后返回 access/refresh token
//! - `POST /refresh-token` - 使用 refresh token 刷新 access token
//!
//! 登录成功返回的 access token 携带调用者身份（user_id + 管理员标志），
//! 区域查询接口据此解析 Caller；refresh token 单次使用，刷新即轮换。

use crate::AppState;
use crate::utils::response::{auth_error, internal_auth_error, invalid_credentials_error};
use ac_auth::AuthError;
use api_contract::{
    ApiResponse, LoginRequest, LoginResponse, RefreshTokenRequest, RefreshTokenResponse,
};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// 健康检查端点
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}

/// 登录：校验凭据并签发 token
pub async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    match state.auth.login(&req.username, &req.password).await {
        Ok((user, tokens)) => {
            let response = LoginResponse {
                access_token: tokens.access_token,
                refresh_token: tokens.refresh_token,
                expires: tokens.expires_at.saturating_mul(1000),
                username: user.username,
                is_admin: user.is_admin,
            };
            (StatusCode::OK, Json(ApiResponse::success(response))).into_response()
        }
        Err(AuthError::InvalidCredentials) => invalid_credentials_error(),
        Err(err) => internal_auth_error(err),
    }
}

/// 刷新 token：校验 refresh token 并轮换
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(req): Json<RefreshTokenRequest>,
) -> Response {
    match state.auth.refresh(&req.refresh_token).await {
        Ok(tokens) => {
            let response = RefreshTokenResponse {
                access_token: tokens.access_token,
                refresh_token: tokens.refresh_token,
                expires: tokens.expires_at.saturating_mul(1000),
            };
            (StatusCode::OK, Json(ApiResponse::success(response))).into_response()
        }
        Err(AuthError::TokenInvalid | AuthError::TokenExpired) => auth_error(),
        Err(err) => internal_auth_error(err),
    }
}
