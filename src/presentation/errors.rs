// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use metrics::counter;
use serde_json::json;
use thiserror::Error;

use crate::domain::repositories::restricted_store::StoreError;

/// 应用错误类型
///
/// 覆盖路由层的完整错误分类：认证失败、配置缺失、
/// 请求校验失败和上游存储失败。认证和配置失败立即
/// 终止请求处理，存储失败在路由边界被转换为结构化响应。
#[derive(Debug, Error)]
pub enum ApiError {
    /// 会话或PIN无效
    #[error("Unauthorized")]
    Unauthorized,
    /// 依赖的服务未配置（写路径返回503）
    #[error("{0} not configured")]
    Unconfigured(&'static str),
    /// 请求缺少必填字段
    #[error("{0}")]
    BadRequest(String),
    /// 字段级校验失败
    #[error("Validation failed")]
    Validation(#[from] validator::ValidationErrors),
    /// 存储请求失败
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Unauthorized" })),
            )
                .into_response(),
            ApiError::Unconfigured(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Validation failed", "details": errors })),
            )
                .into_response(),
            ApiError::Store(e) => {
                counter!("store_errors_total").increment(1);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": e.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
