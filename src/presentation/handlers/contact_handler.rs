// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, Json};
use serde_json::json;
use tracing::error;
use validator::Validate;

use crate::application::dto::contact_request::ContactRequestDto;
use crate::infrastructure::store::Stores;
use crate::presentation::errors::ApiError;

/// 联系表单处理器
///
/// 公开端点。先确认存储可用（写路径不降级），再做字段
/// 级校验，最后通过特权客户端插入。
pub async fn submit_contact(
    Extension(stores): Extension<Stores>,
    Json(request): Json<ContactRequestDto>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let store = stores
        .privileged()
        .ok_or(ApiError::Unconfigured("Contact service"))?;

    request.validate()?;

    store.insert_contact(&request.into()).await.map_err(|e| {
        error!("Contact submission insert failed: {}", e);
        e
    })?;

    Ok(Json(json!({
        "success": true,
        "message": "Form submitted successfully"
    })))
}
