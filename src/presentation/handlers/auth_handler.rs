// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::Extension,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::application::dto::auth_request::PinRequestDto;
use crate::config::settings::Settings;
use crate::presentation::session;

/// 会话状态查询处理器
///
/// 无需认证，返回当前Cookie是否构成有效会话
pub async fn check(headers: HeaderMap) -> Json<serde_json::Value> {
    let authenticated =
        session::is_authenticated(session::session_cookie_value(&headers).as_deref());
    Json(json!({ "authenticated": authenticated }))
}

/// PIN认证处理器
///
/// 校验通过时签发会话Cookie。服务端未配置PIN时返回
/// 独立的错误消息，绝不静默放行。
pub async fn submit_pin(
    Extension(settings): Extension<Arc<Settings>>,
    Json(request): Json<PinRequestDto>,
) -> Response {
    if settings.auth.pin.is_empty() {
        warn!("PIN submitted but no dashboard PIN is configured");
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "error": "Dashboard PIN not configured" })),
        )
            .into_response();
    }

    let supplied = request.pin.unwrap_or_default();
    if !session::verify_pin(&supplied, &settings.auth.pin) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "error": "Invalid PIN" })),
        )
            .into_response();
    }

    (
        [(
            header::SET_COOKIE,
            session::issue_cookie(settings.server.production),
        )],
        Json(json!({ "success": true })),
    )
        .into_response()
}

/// 登出处理器
///
/// 清除会话Cookie；对未认证的调用同样幂等生效
pub async fn logout(Extension(settings): Extension<Arc<Settings>>) -> impl IntoResponse {
    (
        [(
            header::SET_COOKIE,
            session::clear_cookie(settings.server.production),
        )],
        Json(json!({ "success": true })),
    )
}
